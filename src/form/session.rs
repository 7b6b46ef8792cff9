use crate::error::Error;
use crate::form::ConverterForm;
use crate::output::Output;

use log::info;
use std::io::{BufRead, Write};

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    prompt_stream: &mut W,
    label: &str,
) -> Result<Option<String>, Error> {
    write!(prompt_stream, "{label} ")?;
    prompt_stream.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts for amount, from and to currencies until end of input or an empty
/// amount. A failed conversion is reported and the session goes on.
pub fn run_session<R: BufRead, W: Write>(
    form: &mut ConverterForm,
    mut input: R,
    mut prompt_stream: W,
    output: &mut dyn Output,
) -> Result<usize, Error> {
    let mut conversions = 0;
    loop {
        let Some(amount) = prompt(&mut input, &mut prompt_stream, "Amount:")? else {
            break;
        };
        if amount.trim().is_empty() {
            break;
        }
        let Some(from) = prompt(&mut input, &mut prompt_stream, "From Currency:")? else {
            break;
        };
        let Some(to) = prompt(&mut input, &mut prompt_stream, "To Currency:")? else {
            break;
        };

        form.set_inputs(&amount, &from, &to);
        match form.convert_currency() {
            Ok(conversion) => {
                output.write_conversion(&conversion)?;
                conversions += 1;
            }
            Err(error) => output.write_error(&error)?,
        }
    }
    info!("session done after {} conversions", conversions);
    Ok(conversions)
}
