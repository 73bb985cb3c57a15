//! Store configuration.

use kitbag_commerce::Currency;
use serde::{Deserialize, Serialize};

/// Slot key the storefront has always used.
pub const DEFAULT_SLOT_KEY: &str = "cart";

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Key of the durable slot holding the cart snapshot.
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Currency cart totals are computed in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            currency: Currency::default(),
        }
    }
}

impl StoreConfig {
    /// Use a different slot key.
    pub fn with_slot_key(mut self, key: impl Into<String>) -> Self {
        self.slot_key = key.into();
        self
    }

    /// Use a different currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.slot_key, "cart");
        assert_eq!(config.currency, Currency::USD);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: StoreConfig = toml::from_str(r#"currency = "EUR""#).unwrap();
        assert_eq!(config, StoreConfig::default().with_currency(Currency::EUR));

        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }
}
