use crate::error::Error;
use crate::historical::{Period, Requester};
use crate::marketdata::USD;

use log::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub converted: f64,
}

/// Price of one unit of `code` in USD.
pub fn ticker_from_usd(code: &str) -> String {
    format!("{code}USD=X")
}

/// Price of one USD in `code`.
pub fn ticker_to_usd(code: &str) -> String {
    format!("USD{code}=X")
}

pub fn latest_close(requester: &dyn Requester, ticker: &str, period: Period) -> Result<f64, Error> {
    let data = requester.request(ticker, period)?;
    let latest = data
        .last()
        .ok_or_else(|| Error::new_no_data(format!("No data fetched for {ticker}")))?;
    debug!("latest close for {} at {} is {}", ticker, latest.date, latest.close);
    Ok(latest.close)
}

/// Returns `(rate_from, rate_to)`. The from leg is quoted as FROMUSD and the
/// to leg as USDTO, so their product is the number of TO per FROM.
pub fn pair_rates(
    requester: &dyn Requester,
    from: &str,
    to: &str,
    period: Period,
) -> Result<(f64, f64), Error> {
    let rate_from = if from != USD {
        latest_close(requester, &ticker_from_usd(from), period)?
    } else {
        1.0
    };

    let rate_to = if to != USD {
        latest_close(requester, &ticker_to_usd(to), period)?
    } else {
        1.0
    };

    Ok((rate_from, rate_to))
}

pub fn exchange_rate(
    requester: &dyn Requester,
    from: &str,
    to: &str,
    period: Period,
) -> Result<f64, Error> {
    let (rate_from, rate_to) = pair_rates(requester, from, to, period)?;
    Ok(rate_from * rate_to)
}

pub fn convert(
    requester: &dyn Requester,
    request: &ConversionRequest,
    period: Period,
) -> Result<Conversion, Error> {
    if request.from == request.to {
        return Err(Error::same_currency());
    }

    info!(
        "try to convert {} {} to {}",
        request.amount, request.from, request.to
    );
    let rate = exchange_rate(requester, &request.from, &request.to, period)?;
    let converted = request.amount * rate;
    if !rate.is_finite() || !converted.is_finite() {
        return Err(Error::new_input("amount too large to convert"));
    }
    let conversion = Conversion {
        amount: request.amount,
        from: request.from.clone(),
        to: request.to.clone(),
        rate,
        converted,
    };
    info!(
        "convert {} {} to {} done rate:{} converted:{}",
        request.amount, request.from, request.to, rate, conversion.converted
    );
    Ok(conversion)
}
