use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Minimum password length accepted by local registration validation.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A user's account profile. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// A server-side bookmark linking the account to a fund.
///
/// The `id` is assigned by the account service and is the ONLY deletion
/// key — removal never goes by list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFund {
    pub id: i64,
    pub fund: SavedFundInfo,
}

/// The fund identity carried inside a saved-fund record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFundInfo {
    pub scheme_code: String,
    pub scheme_name: String,
}

/// Login form input.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Check both fields are non-empty. Violations are reported together
    /// and nothing is dispatched until they pass.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Vec::new();
        if self.username.trim().is_empty() {
            violations.push("Username is required".to_string());
        }
        if self.password.is_empty() {
            violations.push("Password is required".to_string());
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(violations))
        }
    }
}

/// Registration form input, validated locally before any network dispatch.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Validate the form. All violations are collected and surfaced at
    /// once — a too-short AND mismatched password reports both.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Vec::new();
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            violations.push(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long"
            ));
        }
        if self.password != self.confirm_password {
            violations.push("Passwords do not match".to_string());
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(violations))
        }
    }
}
