use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Stored user record. `password` holds the bcrypt hash, never plaintext.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub contact_no: String,
    pub user_name: String,
    pub password: String,
}

/// Public subset returned by login; never carries the hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_name: String,
    pub first_name: String,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile { user_name: self.user_name.clone(), first_name: self.first_name.clone() }
    }
}

/// Registration request body. Fields default so a missing key surfaces as
/// our own validation message instead of a deserialization rejection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl RegisterInput {
    /// All six fields are required.
    pub fn validate(&self) -> Result<(), ModelError> {
        let all = present(&self.first_name)
            && present(&self.last_name)
            && present(&self.address)
            && present(&self.contact_no)
            && present(&self.user_name)
            && present(&self.password);
        if !all {
            return Err(ModelError::Validation("All fields are required".into()));
        }
        Ok(())
    }
}

/// Login request body.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        if !present(&self.user_name) || !present(&self.password) {
            return Err(ModelError::Validation("Username and password are required".into()));
        }
        Ok(())
    }
}
