// SPDX-License-Identifier: MPL-2.0
//! Live price tickers for the showcase token and for ETH.
//!
//! Both tickers poll a GeckoTerminal-style token endpoint on a fixed
//! interval and format the figures for their display slots. They share no
//! state with the navigator; a failed poll just shows an "unavailable"
//! label until the next tick.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Interval between price polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

pub const UNAVAILABLE_TEXT: &str = "Price Unavailable";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    data: TokenData,
}

#[derive(Debug, Deserialize)]
struct TokenData {
    attributes: TokenAttributes,
}

#[derive(Debug, Deserialize)]
struct TokenAttributes {
    price_usd: String,
    #[serde(default)]
    volume_usd: VolumeUsd,
    #[serde(default)]
    fdv_usd: Option<String>,
    #[serde(default)]
    market_cap_usd: Option<String>,
    #[serde(default)]
    total_reserve_in_usd: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeUsd {
    #[serde(default)]
    h24: Option<String>,
}

/// One parsed price sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceQuote {
    pub price_usd: f64,
    pub volume_24h_usd: Option<f64>,
    pub fdv_usd: Option<f64>,
    /// Market cap when reported, otherwise FDV, matching the site widget.
    pub market_cap_usd: Option<f64>,
    pub liquidity_usd: Option<f64>,
}

fn parse_decimal(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.parse::<f64>().ok())
}

/// Parses a token endpoint body into a quote.
pub fn parse_quote(body: &str) -> Result<PriceQuote> {
    let response: TokenResponse = serde_json::from_str(body)?;
    let attributes = response.data.attributes;
    let price_usd = attributes
        .price_usd
        .parse::<f64>()
        .map_err(|e| Error::Json(format!("price_usd: {}", e)))?;
    let fdv = parse_decimal(attributes.fdv_usd.as_deref());
    Ok(PriceQuote {
        price_usd,
        volume_24h_usd: parse_decimal(attributes.volume_usd.h24.as_deref()),
        fdv_usd: fdv,
        market_cap_usd: parse_decimal(attributes.market_cap_usd.as_deref()).or(fdv),
        liquidity_usd: parse_decimal(attributes.total_reserve_in_usd.as_deref()),
    })
}

/// Polls the token endpoint once.
pub async fn fetch_quote(client: &reqwest::Client, endpoint: &str) -> Result<PriceQuote> {
    let response = client
        .get(endpoint)
        .header("accept", "application/json")
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "price endpoint returned status {}",
            response.status().as_u16()
        )));
    }
    let body = response.text().await?;
    parse_quote(&body)
}

/// Formats a token price with decimals tiered by magnitude, so micro-cap
/// prices keep their significant digits.
pub fn format_price(price_usd: f64) -> String {
    let decimals = if price_usd < 0.00001 {
        10
    } else if price_usd < 0.0001 {
        8
    } else if price_usd < 0.01 {
        6
    } else {
        4
    };
    format!("${:.*}", decimals, price_usd)
}

/// Formats a majors-style price with two decimals and thousands separators.
pub fn format_price_with_commas(price_usd: f64) -> String {
    let fixed = format!("{:.2}", price_usd);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    let digits: Vec<char> = whole.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    format!("${}.{}", grouped, fraction)
}

/// Abbreviates a large dollar figure with a K/M/B suffix.
pub fn format_large_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

/// Formats a 24h percent change with an explicit sign.
pub fn format_percent_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": {
            "attributes": {
                "price_usd": "0.00000342",
                "volume_usd": { "h24": "125000.5" },
                "fdv_usd": "3400000",
                "total_reserve_in_usd": "85000"
            }
        }
    }"#;

    #[test]
    fn parse_quote_extracts_all_figures() {
        let quote = parse_quote(SAMPLE).expect("parse");
        assert!((quote.price_usd - 0.00000342).abs() < 1e-12);
        assert_eq!(quote.volume_24h_usd, Some(125000.5));
        assert_eq!(quote.fdv_usd, Some(3_400_000.0));
        // No market cap reported: falls back to FDV.
        assert_eq!(quote.market_cap_usd, Some(3_400_000.0));
        assert_eq!(quote.liquidity_usd, Some(85_000.0));
    }

    #[test]
    fn parse_quote_rejects_missing_price() {
        assert!(parse_quote(r#"{"data":{"attributes":{}}}"#).is_err());
    }

    #[test]
    fn micro_prices_keep_ten_decimals() {
        assert_eq!(format_price(0.0000000042), "$0.0000000042");
    }

    #[test]
    fn small_prices_keep_eight_decimals() {
        assert_eq!(format_price(0.0000342), "$0.00003420");
    }

    #[test]
    fn sub_cent_prices_keep_six_decimals() {
        assert_eq!(format_price(0.00342), "$0.003420");
    }

    #[test]
    fn ordinary_prices_keep_four_decimals() {
        assert_eq!(format_price(1.5), "$1.5000");
    }

    #[test]
    fn large_numbers_abbreviate_with_suffix() {
        assert_eq!(format_large_number(2_500_000_000.0), "2.50B");
        assert_eq!(format_large_number(3_400_000.0), "3.40M");
        assert_eq!(format_large_number(125_000.5), "125.00K");
        assert_eq!(format_large_number(950.0), "950.00");
    }

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_price_with_commas(1234567.891), "$1,234,567.89");
        assert_eq!(format_price_with_commas(999.9), "$999.90");
    }

    #[test]
    fn percent_change_carries_sign() {
        assert_eq!(format_percent_change(2.5), "+2.50%");
        assert_eq!(format_percent_change(-1.25), "-1.25%");
    }
}
