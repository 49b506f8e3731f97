//! Auth Module
//!
//! Identity check against a fixed credential table. No lockout, rate
//! limiting or attempt tracking.

use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

use crate::error::{GameError, GameResult};

/// Built-in accounts
const DEFAULT_USERS: [(&str, &str); 2] = [("user", "password"), ("music", "123")];

/// Authenticated username, stored in the session for its lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity(String);

impl UserIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only username → password mapping, built once at startup
#[derive(Debug, Clone)]
pub struct CredentialTable {
    users: HashMap<String, String>,
}

impl CredentialTable {
    pub fn new() -> Self {
        Self::from_pairs(DEFAULT_USERS)
    }

    pub fn from_pairs<I, U, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: pairs.into_iter().map(|(u, p)| (u.into(), p.into())).collect(),
        }
    }

    /// Exact match on both fields. Failure never says which one was wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> GameResult<UserIdentity> {
        match self.users.get(username) {
            Some(expected) if expected == password => {
                info!("Login accepted for '{}'", username);
                Ok(UserIdentity(username.to_string()))
            }
            _ => {
                warn!("Login rejected for '{}'", username);
                Err(GameError::InvalidCredentials)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accounts() {
        let table = CredentialTable::new();
        assert_eq!(table.len(), 2);
        assert_eq!(table.authenticate("user", "password").unwrap().as_str(), "user");
        assert_eq!(table.authenticate("music", "123").unwrap().as_str(), "music");
    }

    #[test]
    fn test_rejections_are_generic() {
        let table = CredentialTable::new();
        assert_eq!(table.authenticate("user", "wrong"), Err(GameError::InvalidCredentials));
        assert_eq!(table.authenticate("nobody", "password"), Err(GameError::InvalidCredentials));
        assert_eq!(table.authenticate("", ""), Err(GameError::InvalidCredentials));
        // case matters
        assert_eq!(table.authenticate("User", "password"), Err(GameError::InvalidCredentials));
    }

    #[test]
    fn test_custom_table() {
        let table = CredentialTable::from_pairs([("ravi", "sitar")]);
        assert!(table.authenticate("ravi", "sitar").is_ok());
        assert!(table.authenticate("user", "password").is_err());
    }
}
