//! Credential hashing port

use crate::domain::result::Result;
use crate::domain::CredentialScheme;

/// One-way password hashing
pub trait CredentialHasher: Send + Sync {
    /// Scheme produced by this hasher
    fn scheme(&self) -> CredentialScheme;

    /// Hash a plaintext password into a storable digest
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a digest produced by [`Self::hash`]
    fn verify(&self, password: &str, digest: &str) -> Result<bool>;
}
