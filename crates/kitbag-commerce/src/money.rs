//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! drift when cart totals are summed over and over. On the wire the
//! storefront uses plain numbers; see [`decimal`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use kitbag_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// The same decimal amount expressed in another currency.
    ///
    /// No exchange rate is applied: `20.00 USD` becomes `20.00 EUR`. Used to
    /// tag amounts read from currency-less JSON with the currency in use.
    pub fn in_currency(self, currency: Currency) -> Money {
        if self.currency == currency {
            self
        } else {
            Money::from_decimal(self.to_decimal(), currency)
        }
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values in one currency.
    ///
    /// Returns None if any value is in another currency or the sum overflows.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter writing [`Money`] as a plain JSON number (`20`, `22.5`).
///
/// Use with `#[serde(with = "crate::money::decimal")]`. The number carries
/// no currency, so values are read in `Currency::default()`; owners that
/// know better re-tag them with [`Money::in_currency`].
pub mod decimal {
    use super::{Currency, Money};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        let unit = 10_i64.pow(money.currency.decimal_places());
        if money.amount_cents % unit == 0 {
            serializer.serialize_i64(money.amount_cents / unit)
        } else {
            serializer.serialize_f64(money.to_decimal())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(D::Error::custom("amount is not a finite number"));
        }
        Ok(Money::from_decimal(amount, Currency::default()))
    }

    /// Same as the parent module, for optional amounts.
    pub mod option {
        use super::Money;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            money: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match money {
                Some(money) => super::serialize(money, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Money>, D::Error> {
            #[derive(Deserialize)]
            struct Amount(#[serde(with = "super")] Money);

            Ok(Option::<Amount>::deserialize(deserializer)?.map(|Amount(money)| money))
        }
    }
}
