//! Fixed-rate currency conversion.
//!
//! The shop quotes everything against USD. Any pair is resolved as
//! identity, a direct USD rate, the inverse, or a cross-rate through USD.
//! Rates are configuration handed in as a `RateTable`, never fetched.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CurrencyError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Currency {
    Usd,
    Eur,
    Cop,
    Gbp,
    Jpy,
    Chf,
    Cad,
    Aud,
    Cny,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Cop,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Chf,
        Currency::Cad,
        Currency::Aud,
        Currency::Cny,
    ];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cop => "COP",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Cny => "CNY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "COP" => Ok(Currency::Cop),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            "CHF" => Ok(Currency::Chf),
            "CAD" => Ok(Currency::Cad),
            "AUD" => Ok(Currency::Aud),
            "CNY" => Ok(Currency::Cny),
            other => Err(CurrencyError::UnknownCurrency(other.to_string())),
        }
    }
}

/// USD-quoted exchange rates: how many units of each currency one USD buys.
#[derive(Clone, Debug)]
pub struct RateTable {
    usd_rates: HashMap<Currency, f64>,
}

impl Default for RateTable {
    /// March 2025 reference rates.
    fn default() -> Self {
        let mut usd_rates = HashMap::new();
        usd_rates.insert(Currency::Eur, 0.91);
        usd_rates.insert(Currency::Cop, 3_900.0);
        usd_rates.insert(Currency::Gbp, 0.78);
        usd_rates.insert(Currency::Jpy, 147.50);
        usd_rates.insert(Currency::Chf, 0.88);
        usd_rates.insert(Currency::Cad, 1.35);
        usd_rates.insert(Currency::Aud, 1.52);
        usd_rates.insert(Currency::Cny, 7.19);
        Self { usd_rates }
    }
}

impl RateTable {
    /// An empty table; pair it with `with_rate` to build custom fixtures.
    pub fn empty() -> Self {
        Self {
            usd_rates: HashMap::new(),
        }
    }

    /// Set the USD rate for one currency.
    pub fn with_rate(mut self, currency: Currency, units_per_usd: f64) -> Self {
        self.usd_rates.insert(currency, units_per_usd);
        self
    }

    fn units_per_usd(&self, currency: Currency) -> Result<f64, CurrencyError> {
        if currency == Currency::Usd {
            return Ok(1.0);
        }
        self.usd_rates
            .get(&currency)
            .copied()
            .ok_or(CurrencyError::MissingRate(currency))
    }

    /// Exchange rate between two currencies.
    ///
    /// Identity pairs are 1.0; everything else reduces to a cross-rate
    /// through USD, which covers the direct and inverse cases too.
    pub fn rate(&self, from: Currency, to: Currency) -> Result<f64, CurrencyError> {
        if from == to {
            return Ok(1.0);
        }
        Ok(self.units_per_usd(to)? / self.units_per_usd(from)?)
    }

    /// Convert an amount between two currencies.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, CurrencyError> {
        Ok(amount * self.rate(from, to)?)
    }
}
