//! Session configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `ATM_USER_ID`: user the session is unlocked for (default: `Mansi`)
//! - `ATM_PIN`: that user's PIN (default: `Mansi@1234`)
//! - `ATM_ACCOUNT_ID`: number of the account being operated (default: `123456789`)

use std::env;

use thiserror::Error;

use crate::{
    account::{Account, AccountId},
    credential::Credential,
};

pub const DEFAULT_USER_ID: &str = "Mansi";
pub const DEFAULT_PIN: &str = "Mansi@1234";
pub const DEFAULT_ACCOUNT_ID: &str = "123456789";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub user_id: String,
    pub pin: String,
    pub account_id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            pin: DEFAULT_PIN.to_string(),
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            user_id: get_optional(&lookup, "ATM_USER_ID", DEFAULT_USER_ID)?,
            pin: get_optional(&lookup, "ATM_PIN", DEFAULT_PIN)?,
            account_id: get_optional(&lookup, "ATM_ACCOUNT_ID", DEFAULT_ACCOUNT_ID)?,
        })
    }

    pub fn credential(&self) -> Credential {
        Credential::new(&self.user_id, &self.pin)
    }

    pub fn account(&self) -> Account {
        Account::new(AccountId::new(&self.account_id))
    }
}

fn get_optional<F>(lookup: &F, key: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value must not be blank".to_string(),
        }),
        Some(value) => Ok(value),
    }
}
