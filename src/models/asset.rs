//! Crypto asset holdings shown on the dashboard.

use serde::Deserialize;

use crate::utils::format::{format_amount, format_signed_percent, format_usd};

/// One row of the asset table. Rendering never mutates these records.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CryptoAsset {
    /// Unique within a list.
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Icon key shown when no image URL is available.
    pub icon: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Quantity held, in units of `amount_symbol`.
    pub amount: f64,
    pub amount_symbol: String,
    pub value_usd: f64,
    pub price_usd: f64,
    /// Signed 24-hour change in percent.
    pub change_24h: f64,
}

/// Sign of the 24-hour change, used for coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeDirection {
    /// Zero or positive.
    Up,
    Down,
}

impl CryptoAsset {
    /// e.g. `$46,376.25`
    pub fn price_display(&self) -> String {
        format_usd(self.price_usd)
    }

    /// e.g. `$34,782.19`
    pub fn value_display(&self) -> String {
        format_usd(self.value_usd)
    }

    /// e.g. `0.75 BTC`
    pub fn holdings_display(&self) -> String {
        format!("{} {}", format_amount(self.amount), self.amount_symbol)
    }

    /// e.g. `+2.35%` or `-1.12%`
    pub fn change_display(&self) -> String {
        format_signed_percent(self.change_24h)
    }

    pub fn change_direction(&self) -> ChangeDirection {
        if self.change_24h >= 0.0 {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(price_usd: f64, change_24h: f64) -> CryptoAsset {
        CryptoAsset {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            icon: "bitcoin".to_string(),
            icon_url: None,
            amount: 0.75,
            amount_symbol: "BTC".to_string(),
            value_usd: 34782.19,
            price_usd,
            change_24h,
        }
    }

    #[test]
    fn test_row_strings() {
        let btc = asset(46376.25, 2.35);
        assert_eq!(btc.price_display(), "$46,376.25");
        assert_eq!(btc.value_display(), "$34,782.19");
        assert_eq!(btc.holdings_display(), "0.75 BTC");
        assert_eq!(btc.change_display(), "+2.35%");
        assert_eq!(btc.change_direction(), ChangeDirection::Up);
    }

    #[test]
    fn test_negative_change_has_no_plus() {
        let eth = asset(2410.06, -1.12);
        assert_eq!(eth.change_display(), "-1.12%");
        assert_eq!(eth.change_direction(), ChangeDirection::Down);
    }

    #[test]
    fn test_zero_change_counts_as_up() {
        let flat = asset(70.0, 0.0);
        assert_eq!(flat.change_display(), "+0.00%");
        assert_eq!(flat.change_direction(), ChangeDirection::Up);
    }

    #[test]
    fn test_formatting_does_not_mutate() {
        let btc = asset(46376.25, 2.35);
        let before = btc.clone();
        let _ = (btc.price_display(), btc.holdings_display(), btc.change_display());
        assert_eq!(btc, before);
    }
}
