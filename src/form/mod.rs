use crate::error::Error;
use crate::exchange::{Conversion, ConversionRequest, convert};
use crate::historical::{Period, Requester};
use crate::output::{rate_text, result_text};
use crate::referential::Referential;

use log::debug;

mod session;
pub use session::run_session;

pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let cleaned = text.trim().replace(',', "");
    let amount = cleaned.parse::<f64>().map_err(|_| {
        Error::new_input(format!("could not convert string to float: '{cleaned}'"))
    })?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::new_input(format!(
            "amount must be a positive number: '{cleaned}'"
        )));
    }
    Ok(amount)
}

/// Picker text is either a bare code or a `"EUR - Euro"` entry.
pub fn selected_currency(referential: &Referential, text: &str) -> Result<String, Error> {
    let code = text
        .split(" - ")
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_uppercase();
    match referential.get_currency_by_code(&code) {
        Some(currency) => Ok(currency.code.clone()),
        None => Err(Error::new_input(format!("unknown currency '{}'", text.trim()))),
    }
}

/// Inputs and displays of one conversion window. Displays keep their last
/// successful content when a conversion fails.
pub struct ConverterForm<'a> {
    referential: &'a Referential,
    requester: &'a dyn Requester,
    period: Period,
    amount_input: String,
    from_input: String,
    to_input: String,
    result_label: String,
    rate_label: String,
}

impl<'a> ConverterForm<'a> {
    pub fn new(referential: &'a Referential, requester: &'a dyn Requester, period: Period) -> Self {
        Self {
            referential,
            requester,
            period,
            amount_input: String::new(),
            from_input: String::new(),
            to_input: String::new(),
            result_label: String::new(),
            rate_label: String::new(),
        }
    }

    pub fn set_inputs(&mut self, amount: &str, from: &str, to: &str) {
        self.amount_input = amount.to_string();
        self.from_input = from.to_string();
        self.to_input = to.to_string();
    }

    pub fn result_label(&self) -> &str {
        &self.result_label
    }

    pub fn rate_label(&self) -> &str {
        &self.rate_label
    }

    pub fn convert_currency(&mut self) -> Result<Conversion, Error> {
        let request = ConversionRequest {
            amount: parse_amount(&self.amount_input)?,
            from: selected_currency(self.referential, &self.from_input)?,
            to: selected_currency(self.referential, &self.to_input)?,
        };
        debug!("conversion request {:?}", request);

        let conversion = convert(self.requester, &request, self.period)?;
        self.result_label = result_text(&conversion);
        self.rate_label = rate_text(&conversion);
        Ok(conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::exchange::tests::StubRequester;
    use assert_float_eq::*;

    #[test]
    fn parse_amount_01() {
        assert_float_absolute_eq!(parse_amount("100").unwrap(), 100.0, 1e-9);
        assert_float_absolute_eq!(parse_amount(" 1,234.56 ").unwrap(), 1234.56, 1e-9);
        assert_float_absolute_eq!(parse_amount("1e3").unwrap(), 1000.0, 1e-9);
    }

    #[test]
    fn parse_amount_02() {
        let error = parse_amount("abc").err().unwrap();
        assert_eq!(error.kind, ErrorKind::Input);
        assert_eq!(error.message, "could not convert string to float: 'abc'");

        for text in ["", "12.3.4", "inf", "NaN", "-5", "0"] {
            let result = parse_amount(text);
            assert_eq!(result.err().unwrap().kind, ErrorKind::Input);
        }
    }

    #[test]
    fn selected_currency_01() {
        let referential = Referential::builtin();
        assert_eq!(selected_currency(&referential, "EUR - Euro").unwrap(), "EUR");
        assert_eq!(selected_currency(&referential, " jpy ").unwrap(), "JPY");
        assert_eq!(selected_currency(&referential, "usd").unwrap(), "USD");

        let result = selected_currency(&referential, "XXX - Nowhere");
        assert_eq!(result.err().unwrap().kind, ErrorKind::Input);
        let result = selected_currency(&referential, "");
        assert_eq!(result.err().unwrap().kind, ErrorKind::Input);
    }

    #[test]
    fn convert_currency_usd_eur() {
        let referential = Referential::builtin();
        let requester = StubRequester::default().with_close("USDEUR=X", 0.92);
        let mut form = ConverterForm::new(&referential, &requester, Period::OneDay);
        form.set_inputs("100", "USD - United States Dollar", "EUR - Euro");

        let conversion = form.convert_currency().unwrap();
        assert_float_absolute_eq!(conversion.rate, 0.92, 1e-9);
        assert_eq!(form.result_label(), "100.00 USD = 92.00 EUR");
        assert_eq!(form.rate_label(), "Exchange Rate: 1 USD = 0.9200 EUR");
        assert_eq!(requester.requested(), vec!["USDEUR=X"]);
    }

    #[test]
    fn convert_currency_eur_usd() {
        let referential = Referential::builtin();
        let requester = StubRequester::default().with_close("EURUSD=X", 1.08);
        let mut form = ConverterForm::new(&referential, &requester, Period::OneDay);
        form.set_inputs("50", "EUR", "USD");

        let conversion = form.convert_currency().unwrap();
        assert_float_absolute_eq!(conversion.rate, 1.08, 1e-9);
        assert_eq!(form.result_label(), "50.00 EUR = 54.00 USD");
        assert_eq!(form.rate_label(), "Exchange Rate: 1 EUR = 1.0800 USD");
        assert_eq!(requester.requested(), vec!["EURUSD=X"]);
    }

    #[test]
    fn convert_currency_no_data() {
        let referential = Referential::builtin();
        let requester = StubRequester::default().with_close("EURUSD=X", 1.08);
        let mut form = ConverterForm::new(&referential, &requester, Period::OneDay);
        form.set_inputs("1,000", "EUR", "USD");
        form.convert_currency().unwrap();

        form.set_inputs("10", "EUR", "GBP");
        let error = form.convert_currency().err().unwrap();
        assert_eq!(error.kind, ErrorKind::NoData);
        assert_eq!(error.user_message(), "Value Error: No data fetched for USDGBP=X");
        assert_eq!(form.result_label(), "1,000.00 EUR = 1,080.00 USD");
        assert_eq!(form.rate_label(), "Exchange Rate: 1 EUR = 1.0800 USD");
    }

    #[test]
    fn convert_currency_rejected_before_fetch() {
        let referential = Referential::builtin();
        let requester = StubRequester::default().with_close("EURUSD=X", 1.08);
        let mut form = ConverterForm::new(&referential, &requester, Period::OneDay);

        form.set_inputs("abc", "EUR", "USD");
        let error = form.convert_currency().err().unwrap();
        assert_eq!(error.kind, ErrorKind::Input);

        form.set_inputs("10", "EUR - Euro", "eur");
        let error = form.convert_currency().err().unwrap();
        assert_eq!(error.kind, ErrorKind::SameCurrency);

        form.set_inputs("10", "USD", "USD");
        let error = form.convert_currency().err().unwrap();
        assert_eq!(error.kind, ErrorKind::SameCurrency);

        assert!(requester.requested().is_empty());
        assert!(form.result_label().is_empty());
        assert!(form.rate_label().is_empty());
    }

    #[test]
    fn convert_currency_overflow() {
        let referential = Referential::builtin();
        let requester = StubRequester::default()
            .with_close("USDEUR=X", 0.92)
            .with_close("USDJPY=X", 150.0);
        let mut form = ConverterForm::new(&referential, &requester, Period::OneDay);
        form.set_inputs("100", "USD", "EUR");
        form.convert_currency().unwrap();

        form.set_inputs("1e308", "USD", "JPY");
        let error = form.convert_currency().err().unwrap();
        assert_eq!(error.kind, ErrorKind::Input);
        assert_eq!(error.user_message(), "Value Error: amount too large to convert");
        assert_eq!(form.result_label(), "100.00 USD = 92.00 EUR");
        assert_eq!(form.rate_label(), "Exchange Rate: 1 USD = 0.9200 EUR");
    }

    #[test]
    fn convert_currency_fetch_failure() {
        let referential = Referential::builtin();
        let requester = StubRequester::default().failing_on("CHFUSD=X");
        let mut form = ConverterForm::new(&referential, &requester, Period::OneDay);
        form.set_inputs("10", "CHF", "USD");

        let error = form.convert_currency().err().unwrap();
        assert_eq!(error.kind, ErrorKind::Historical);
        assert!(error.user_message().starts_with("Failed to convert currency: "));
    }
}
