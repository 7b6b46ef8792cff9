/// `1234.5` is rendered `1,234.50`.
pub fn format_amount(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (integer, decimal) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{decimal}")
}

pub fn format_rate(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(92.0), "92.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-98765.4321), "-98,765.43");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn rate() {
        assert_eq!(format_rate(0.92), "0.9200");
        assert_eq!(format_rate(162.123456), "162.1235");
    }
}
