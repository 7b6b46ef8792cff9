use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;
use log::info;
use std::io::Write;

mod alias;
mod error;
mod exchange;
mod form;
mod historical;
mod marketdata;
mod output;
mod referential;

use form::{ConverterForm, run_session};
use historical::{NullRequester, Period, Requester, YahooRequester};
use output::{JsonOutput, Output, TextOutput};
use referential::Referential;

use error::Error;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum SpotSource {
    Null,
    Yahoo,
}

impl std::fmt::Display for SpotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputType {
    Text,
    Json,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Convert an amount between two currencies from live Yahoo Finance rates
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// amount to convert, thousands separators allowed
    #[clap(short, long, value_parser, requires = "from")]
    amount: Option<String>,

    /// source currency, "EUR" or "EUR - Euro"
    #[clap(short, long, value_parser, requires = "to")]
    from: Option<String>,

    /// target currency
    #[clap(long, value_parser, requires = "amount")]
    to: Option<String>,

    /// currency table file, json object code -> name
    #[clap(short, long, value_parser)]
    currencies: Option<String>,

    /// list known currencies and exit
    #[clap(short, long, action)]
    list: bool,

    /// quote period
    #[clap(default_value_t = Period::OneDay, short, long, value_parser)]
    period: Period,

    /// output type
    #[clap(default_value_t = OutputType::Text, short = 't', long, value_parser)]
    output_type: OutputType,

    /// spot source
    #[clap(default_value_t = SpotSource::Yahoo, short, long, value_parser)]
    spot_source: SpotSource,
}

fn make_requester(source: SpotSource) -> Result<Box<dyn Requester>, Error> {
    let value: Box<dyn Requester> = match source {
        SpotSource::Null => Box::new(NullRequester),
        SpotSource::Yahoo => Box::new(YahooRequester::new()?),
    };
    Ok(value)
}

fn main() -> Result<(), Error> {
    //
    // cli arg
    let args = Args::parse();

    //
    // logger
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    //
    // currency table
    let referential = match &args.currencies {
        Some(filename) => Referential::load(filename)?,
        None => Referential::builtin(),
    };

    if args.list {
        let mut stdout = std::io::stdout().lock();
        for currency in referential.currencies() {
            writeln!(stdout, "{}", currency.display_entry())?;
        }
        return Ok(());
    }

    //
    // quote source
    let requester = make_requester(args.spot_source)?;
    info!("spot source {} period {}", args.spot_source, args.period);

    //
    // convert
    let mut output: Box<dyn Output> = match args.output_type {
        OutputType::Text => Box::new(TextOutput::new(std::io::stdout(), std::io::stderr())),
        OutputType::Json => Box::new(JsonOutput::new(std::io::stdout())),
    };
    let mut form = ConverterForm::new(&referential, requester.as_ref(), args.period);

    match (&args.amount, &args.from, &args.to) {
        (Some(amount), Some(from), Some(to)) => {
            form.set_inputs(amount, from, to);
            match form.convert_currency() {
                Ok(conversion) => output.write_conversion(&conversion)?,
                Err(error) => {
                    output.write_error(&error)?;
                    std::process::exit(1);
                }
            }
        }
        _ => {
            let stdin = std::io::stdin();
            run_session(&mut form, stdin.lock(), std::io::stderr(), output.as_mut())?;
        }
    }
    info!("conversion done");

    Ok(())
}
