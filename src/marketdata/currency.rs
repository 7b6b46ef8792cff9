pub const USD: &str = "USD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

impl Currency {
    pub fn new<C: Into<String>, N: Into<String>>(code: C, name: N) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Entry as listed by the currency pickers, `"EUR - Euro"`.
    pub fn display_entry(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

pub fn is_valid_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency() {
        let currency = Currency::new("EUR", "Euro");
        assert_eq!(currency.code, "EUR");
        assert_eq!(currency.display_entry(), "EUR - Euro");
    }

    #[test]
    fn valid_code() {
        assert!(is_valid_code("JPY"));
        assert!(!is_valid_code("jpy"));
        assert!(!is_valid_code("EU"));
        assert!(!is_valid_code("EURO"));
        assert!(!is_valid_code("E1R"));
    }
}
