//! Salted Argon2id credential hasher
//!
//! Every hash gets a fresh random salt and is stored as a PHC string
//! (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), so the parameters
//! travel with the digest.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::result::{Error, Result};
use crate::domain::CredentialScheme;
use crate::ports::CredentialHasher;

pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Hasher with the argon2 crate's default Argon2id parameters
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hasher with explicit cost parameters
    ///
    /// `memory_kib` is in KiB, `time_cost` is the number of passes.
    pub fn with_params(memory_kib: u32, time_cost: u32, parallelism: u32) -> Result<Self> {
        let params = Params::new(memory_kib, time_cost, parallelism, None)
            .map_err(|e| Error::credential(format!("invalid argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn scheme(&self) -> CredentialScheme {
        CredentialScheme::Argon2id
    }

    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::credential(format!("failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool> {
        let parsed = PasswordHash::new(digest)
            .map_err(|_| Error::credential("invalid password hash format"))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(Error::credential(format!(
                "password verification failed: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(1024, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let digest = hasher.hash("SecurePassword123").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify("SecurePassword123", &digest).unwrap());
        assert!(!hasher.verify("WrongPassword", &digest).unwrap());
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = fast_hasher();
        let first = hasher.hash("1234").unwrap();
        let second = hasher.hash("1234").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("1234", &first).unwrap());
        assert!(hasher.verify("1234", &second).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        let hasher = fast_hasher();
        let err = hasher.verify("1234", "invalid-hash").unwrap_err();
        assert!(matches!(err, Error::Credential(_)));
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(Argon2Hasher::with_params(0, 0, 0).is_err());
    }
}
