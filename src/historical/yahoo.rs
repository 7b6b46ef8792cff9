use super::{DataFrame, Period, Requester};
use crate::alias::Date;
use crate::error::Error;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct YahooResult {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartResult>>,
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    #[serde(default, deserialize_with = "deserialize_vec_timestamp")]
    timestamp: Vec<Date>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct YahooChartQuote {
    low: Vec<Option<f64>>,
    open: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
}

const NOT_FOUND: &str = "Not Found";

fn deserialize_vec_timestamp<'de, D>(deserializer: D) -> Result<Vec<Date>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<i64> = Vec::deserialize(deserializer)?;
    let mut dates = Vec::with_capacity(values.len());
    for value in values {
        let date = chrono::DateTime::from_timestamp(value, 0)
            .ok_or_else(|| {
                serde::de::Error::custom(format!("unable to create date from timestamp {}", value))
            })?
            .naive_utc()
            .date();
        dates.push(date);
    }
    Ok(dates)
}

fn value_at(values: &[Option<f64>], position: usize) -> Option<f64> {
    values.get(position).copied().flatten()
}

/// Decodes a chart answer. An unknown ticker is reported by Yahoo as a
/// `Not Found` chart error, which maps to an empty series.
fn parse_chart(ticker: &str, body: &str) -> Result<Vec<DataFrame>, Error> {
    let request_result: YahooResult = serde_json::from_str(body).map_err(|error| {
        Error::new_historical(format!(
            "malformed answer for historic ticker:{ticker} error:{error}"
        ))
    })?;

    if let Some(error) = request_result.chart.error {
        if error.code == NOT_FOUND {
            info!("ticker {} unknown from provider", ticker);
            return Ok(Vec::new());
        }
        return Err(Error::new_historical(format!(
            "provider error on ticker:{ticker} code:{} description:{}",
            error.code,
            error.description.unwrap_or_default()
        )));
    }

    let results = request_result.chart.result.ok_or_else(|| {
        Error::new_historical(format!("missing chart result on ticker:{ticker}"))
    })?;

    let mut data_frames: Vec<DataFrame> = Vec::new();
    for result in results.iter() {
        let Some(quotes) = result.indicators.quote.first() else {
            info!("no quote available for {}", ticker);
            continue;
        };
        for (date_position, date) in result.timestamp.iter().enumerate() {
            let open = value_at(&quotes.open, date_position);
            let close = value_at(&quotes.close, date_position);
            let high = value_at(&quotes.high, date_position);
            let low = value_at(&quotes.low, date_position);
            match (open, close, high, low) {
                (Some(open), Some(close), Some(high), Some(low)) => {
                    data_frames.push(DataFrame::new(*date, open, close, high, low));
                }
                _ => info!("value not available at {} for {}", date, ticker),
            }
        }
    }
    Ok(data_frames)
}

pub struct YahooRequester {
    reqwest_client: Client,
}

impl YahooRequester {
    pub fn new() -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Expires", HeaderValue::from_static("-1"));
        headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
        headers.insert("User-Agent", HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/54.0.2840.99 Safari/537.36"));

        let client = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(|error| Error::new_historical(format!("failed to init reqwest : {error}")))?;

        Ok(Self {
            reqwest_client: client,
        })
    }

    fn request_data(&self, ticker: &str, period: Period) -> Result<String, Error> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval=1d",
            ticker, period
        );
        debug!("request data from url {}", url);
        let output = self
            .reqwest_client
            .get(url)
            .send()
            .map_err(|error| {
                Error::new_historical(format!(
                    "failed to request historic ticker:{ticker} error:{error}"
                ))
            })?
            .text()
            .map_err(|error| {
                Error::new_historical(format!(
                    "failed to read body from request historic ticker:{ticker} error:{error}"
                ))
            })?;
        debug!("request result: {}", output);
        Ok(output)
    }
}

impl Requester for YahooRequester {
    fn request(&self, ticker: &str, period: Period) -> Result<Vec<DataFrame>, Error> {
        info!("try to request {} quotes for {}", period, ticker);
        let body = self.request_data(ticker, period)?;
        let result = parse_chart(ticker, &body)?;
        info!(
            "request quotes for {} done nb_record:{}",
            ticker,
            result.len()
        );
        Ok(result)
    }
}
