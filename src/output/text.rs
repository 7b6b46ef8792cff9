use crate::error::{Error, Severity};
use crate::exchange::Conversion;
use crate::output::{Output, rate_text, result_text};

use std::io::Write;

pub struct TextOutput<W: Write, E: Write> {
    stream: W,
    error_stream: E,
}

impl<W: Write, E: Write> TextOutput<W, E> {
    pub fn new(stream: W, error_stream: E) -> Self {
        Self {
            stream,
            error_stream,
        }
    }
}

impl<W: Write, E: Write> Output for TextOutput<W, E> {
    fn write_conversion(&mut self, conversion: &Conversion) -> Result<(), Error> {
        writeln!(self.stream, "{}", result_text(conversion))?;
        writeln!(self.stream, "{}", rate_text(conversion))?;
        Ok(())
    }

    fn write_error(&mut self, error: &Error) -> Result<(), Error> {
        let title = match error.severity() {
            Severity::Warning => "Warning",
            Severity::Critical => "Error",
        };
        writeln!(self.error_stream, "{}: {}", title, error.user_message())?;
        Ok(())
    }
}
