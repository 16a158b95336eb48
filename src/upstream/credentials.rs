use std::fmt;

use crate::app::{FolioError, Result};
use crate::upstream::FeedbinConfig;

pub const USER_ENV: &str = "FEEDBIN_USER";
pub const PASS_ENV: &str = "FEEDBIN_PASS";

/// Basic-auth credentials handed to the API client at construction.
pub trait CredentialsProvider: Send + Sync {
    fn username(&self) -> &str;
    fn password(&self) -> Option<&str>;
}

/// Credentials resolved once at startup and never changed afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
        }
    }

    /// Resolve from the process environment, falling back to the config file.
    pub fn resolve(config: &FeedbinConfig) -> Result<Self> {
        Self::from_sources(
            std::env::var(USER_ENV).ok(),
            std::env::var(PASS_ENV).ok(),
            config,
        )
    }

    fn from_sources(
        env_user: Option<String>,
        env_pass: Option<String>,
        config: &FeedbinConfig,
    ) -> Result<Self> {
        let non_empty = |s: &String| !s.is_empty();

        let username = env_user
            .filter(non_empty)
            .or_else(|| config.username.clone().filter(non_empty))
            .ok_or(FolioError::MissingCredentials)?;
        let password = env_pass
            .filter(non_empty)
            .or_else(|| config.password.clone().filter(non_empty));

        Ok(Self { username, password })
    }
}

impl CredentialsProvider for Credentials {
    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
