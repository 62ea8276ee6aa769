//! Credential scheme

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::Error;

/// Password hashing scheme
///
/// `Sha256` is a bare, unsalted digest: two profiles with the same password
/// end up with the same hash. `Argon2id` salts every hash and is the one to
/// use for anything beyond compatibility with existing sha256 digests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialScheme {
    #[default]
    Sha256,
    Argon2id,
}

impl CredentialScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Argon2id => "argon2id",
        }
    }
}

impl FromStr for CredentialScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "argon2id" | "argon2" => Ok(Self::Argon2id),
            other => Err(Error::config(format!("unknown credential scheme: {other}"))),
        }
    }
}

impl fmt::Display for CredentialScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("sha256".parse::<CredentialScheme>().unwrap(), CredentialScheme::Sha256);
        assert_eq!(" Argon2id ".parse::<CredentialScheme>().unwrap(), CredentialScheme::Argon2id);
        assert!("md5".parse::<CredentialScheme>().is_err());
    }

    #[test]
    fn test_scheme_serde_names() {
        let json = serde_json::to_string(&CredentialScheme::Argon2id).unwrap();
        assert_eq!(json, "\"argon2id\"");
    }
}
