use crate::error::Error;
use crate::exchange::Conversion;

mod format;
mod json;
mod text;

pub use format::*;
pub use json::JsonOutput;
pub use text::TextOutput;

pub trait Output {
    fn write_conversion(&mut self, conversion: &Conversion) -> Result<(), Error>;
    fn write_error(&mut self, error: &Error) -> Result<(), Error>;
}

/// `100.00 USD = 92.00 EUR`
pub fn result_text(conversion: &Conversion) -> String {
    format!(
        "{} {} = {} {}",
        format_amount(conversion.amount),
        conversion.from,
        format_amount(conversion.converted),
        conversion.to
    )
}

/// `Exchange Rate: 1 USD = 0.9200 EUR`
pub fn rate_text(conversion: &Conversion) -> String {
    format!(
        "Exchange Rate: 1 {} = {} {}",
        conversion.from,
        format_rate(conversion.rate),
        conversion.to
    )
}
