use crate::error::Error;
use crate::exchange::Conversion;
use crate::output::{Output, rate_text, result_text};

use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonConversion<'a> {
    amount: f64,
    from: &'a str,
    to: &'a str,
    rate: f64,
    converted: f64,
    result: String,
    rate_text: String,
}

#[derive(Serialize)]
struct JsonError<'a> {
    kind: String,
    message: &'a str,
    error: String,
}

pub struct JsonOutput<W: Write> {
    stream: W,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.stream, value)
            .map_err(|error| Error::new_output(format!("unable to write json : {error}")))?;
        writeln!(self.stream)?;
        Ok(())
    }
}

impl<W: Write> Output for JsonOutput<W> {
    fn write_conversion(&mut self, conversion: &Conversion) -> Result<(), Error> {
        self.write_line(&JsonConversion {
            amount: conversion.amount,
            from: &conversion.from,
            to: &conversion.to,
            rate: conversion.rate,
            converted: conversion.converted,
            result: result_text(conversion),
            rate_text: rate_text(conversion),
        })
    }

    fn write_error(&mut self, error: &Error) -> Result<(), Error> {
        self.write_line(&JsonError {
            kind: format!("{:?}", error.kind),
            message: &error.message,
            error: error.user_message(),
        })
    }
}
