//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a CartItemId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id($prefix))
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CategoryId, "cat");
define_id!(ProductId, "prod");
define_id!(VariantId, "var");
define_id!(CartItemId, "cart");
define_id!(OrderId, "ord");
define_id!(OrderItemId, "oitem");
define_id!(UserId, "user");

/// Generate a prefixed ID from 12 random bytes, base64url encoded.
fn generate_id(prefix: &str) -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 12] = rand::thread_rng().gen();
    format!("{}_{}", prefix, URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_generation_is_unique_and_prefixed() {
        let id1 = CartItemId::generate();
        let id2 = CartItemId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("cart_"));
        assert_eq!(id1.as_str().len(), "cart_".len() + 16);
    }

    #[test]
    fn test_id_from_string() {
        let id: VariantId = "var-456".into();
        assert_eq!(id.as_str(), "var-456");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = OrderId::new("ord-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ord-1\"");
    }
}
