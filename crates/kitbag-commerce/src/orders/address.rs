//! Address types.

use serde::{Deserialize, Serialize};

/// A postal address with contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Street line.
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address, self.city, self.state, self.zip_code, self.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_formatting() {
        let address = Address {
            first_name: "Sam".to_string(),
            last_name: "Okafor".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "12 Stadium Rd".to_string(),
            city: "Leeds".to_string(),
            state: "WY".to_string(),
            zip_code: "LS11".to_string(),
            country: "UK".to_string(),
        };
        assert_eq!(address.full_name(), "Sam Okafor");
        assert_eq!(address.one_line(), "12 Stadium Rd, Leeds, WY LS11, UK");

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["zipCode"], "LS11");
    }
}
