//! Unsalted SHA-256 credential hasher
//!
//! Digest is the lowercase hex SHA-256 of the UTF-8 password. No salt: equal
//! passwords give equal digests across profiles, which keeps the digests
//! comparable with ones produced elsewhere but makes them open to
//! precomputed-table attacks.

use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};

use crate::domain::result::Result;
use crate::domain::CredentialScheme;
use crate::ports::CredentialHasher;

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }

    /// Hex digest of `password`
    pub fn digest(password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl CredentialHasher for Sha256Hasher {
    fn scheme(&self) -> CredentialScheme {
        CredentialScheme::Sha256
    }

    fn hash(&self, password: &str) -> Result<String> {
        Ok(Self::digest(password))
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool> {
        let candidate = Self::digest(password);
        Ok(constant_time_eq(candidate.as_bytes(), digest.as_bytes()))
    }
}
