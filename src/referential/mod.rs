mod builtin;

use crate::error::{Error, ErrorKind};
use crate::marketdata::{Currency, is_valid_code};

use log::info;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorKind::Referential, format!("not json format : {error}"))
    }
}

/// Currency reference table, kept sorted by code.
pub struct Referential {
    currencies: Vec<Currency>,
}

impl Referential {
    pub fn builtin() -> Self {
        let table = builtin::CURRENCIES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect::<BTreeMap<_, _>>();
        Self::from_table(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let table: BTreeMap<String, String> = serde_json::from_reader(reader)?;
        if let Some(code) = table.keys().find(|code| !is_valid_code(code)) {
            return Err(Error::new_referential(format!(
                "{code} is not a valid currency code"
            )));
        }
        if table.is_empty() {
            return Err(Error::new_referential("currency table is empty"));
        }
        Ok(Self::from_table(table))
    }

    pub fn load(filename: &str) -> Result<Self, Error> {
        let file = File::open(filename)
            .map_err(|error| Error::new_referential(format!("unable to open {filename} : {error}")))?;
        let referential = Self::from_reader(BufReader::new(file))?;
        info!(
            "loading {} currencies from {} done",
            referential.currencies.len(),
            filename
        );
        Ok(referential)
    }

    fn from_table(table: BTreeMap<String, String>) -> Self {
        let currencies = table
            .into_iter()
            .map(|(code, name)| Currency::new(code, name))
            .collect();
        Self { currencies }
    }

    pub fn get_currency_by_code(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .binary_search_by(|currency| currency.code.as_str().cmp(code))
            .ok()
            .map(|position| &self.currencies[position])
    }

    pub fn sorted_codes(&self) -> Vec<&str> {
        self.currencies
            .iter()
            .map(|currency| currency.code.as_str())
            .collect()
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }
}
