//! Application user accounts.
//!
//! # Invariants
//! - Passwords are held in plaintext, matching the persisted document shape.
//!   Credential checks are exact string comparisons.

use crate::model::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
}

/// Partial profile change; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: new_entity_id(),
            username: username.into(),
            password: password.into(),
            full_name: String::new(),
            email: String::new(),
            role,
        }
    }

    /// The account guaranteed to exist after seeding or migration, so a
    /// fresh install is never locked out.
    pub fn default_admin() -> Self {
        Self {
            id: "1".to_string(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            full_name: "Quản trị viên".to_string(),
            email: "admin@radsafe.local".to_string(),
            role: UserRole::Admin,
        }
    }
}
