use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user-chosen name that keys a user's folder namespace.
///
/// An `Identity` is not a credential; the remote service decides whether a
/// face matches it. Holding one is proof that the name is non-empty after
/// trimming, which is the precondition for entering the vault manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity must not be empty")]
    Empty,
}

impl Identity {
    /// Trims the input and rejects names that are empty afterwards.
    pub fn new(name: &str) -> Result<Self, IdentityError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let id = Identity::new("  alice \n").unwrap();
        assert_eq!(id.as_str(), "alice");
    }

    #[test]
    fn test_rejects_empty_and_whitespace_only() {
        assert!(Identity::new("").is_err());
        assert!(Identity::new("   \t ").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = Identity::new("alice").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"alice\"");
    }
}
