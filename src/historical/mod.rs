use crate::alias::Date;
use crate::error::Error;

use clap::ValueEnum;

mod yahoo;
pub use yahoo::*;

#[derive(Copy, Clone, Debug)]
pub struct DataFrame {
    pub date: Date,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl DataFrame {
    #[inline]
    pub fn new(date: Date, open: f64, close: f64, high: f64, low: f64) -> Self {
        Self {
            date,
            open,
            close,
            high,
            low,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Period {
    #[value(name = "1d")]
    OneDay,
    #[value(name = "5d")]
    FiveDays,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::OneDay => "1d".fmt(f),
            Period::FiveDays => "5d".fmt(f),
        }
    }
}

/// Source of daily quotes for a ticker. Rows come back oldest first.
pub trait Requester {
    fn request(&self, ticker: &str, period: Period) -> Result<Vec<DataFrame>, Error>;
}

pub struct NullRequester;
impl Requester for NullRequester {
    fn request(&self, _ticker: &str, _period: Period) -> Result<Vec<DataFrame>, Error> {
        Ok(Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period() {
        assert_eq!(Period::OneDay.to_string(), "1d");
        assert_eq!(Period::FiveDays.to_string(), "5d");
    }

    #[test]
    fn null_requester() {
        let result = NullRequester.request("EURUSD=X", Period::OneDay);
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
