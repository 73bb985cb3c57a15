//! User types.

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A storefront account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Active, non-admin account.
    pub fn is_customer(&self) -> bool {
        self.is_active && !self.is_admin
    }
}

/// Registration payload.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl std::fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterData")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_names() {
        let now = Utc::now();
        let user = User {
            id: UserId::generate(),
            email: "jo@example.com".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Park".to_string(),
            phone: None,
            is_active: true,
            is_admin: false,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(user.full_name(), "Jo Park");
        assert!(user.is_customer());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Jo");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_register_data_debug_redacts_password() {
        let data: RegisterData = serde_json::from_str(
            r#"{"email":"a@b.c","password":"hunter2","firstName":"A","lastName":"B"}"#,
        )
        .unwrap();
        let debug = format!("{:?}", data);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
