//! Profile Core - user profile records
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: The profile record, email validation, value types
//! - **ports**: Trait definitions for collaborators (Logger, CredentialHasher, NotificationGateway)
//! - **adapters**: Concrete implementations (tracing, SHA-256, Argon2id, random.org, demo)
//! - **config**: settings.json loading

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

use std::path::Path;
use std::sync::Arc;

use adapters::{Argon2Hasher, DemoGateway, RandomOrgGateway, Sha256Hasher, TracingLogger};
use config::Config;
use ports::{CredentialHasher, Logger, NotificationGateway};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{
    is_valid_email, Collaborators, CredentialScheme, ProfileRecord, ProfileSnapshot,
    ProfileUpdate, Visibility,
};

/// Main context for profile operations
///
/// Loads the configuration and wires the collaborators every profile
/// created through it will share.
pub struct ProfileContext {
    pub config: Config,
    pub collaborators: Collaborators,
}

impl ProfileContext {
    /// Create a context from the settings in `profile_dir`, logging through `tracing`
    pub fn new(profile_dir: &Path) -> Result<Self> {
        let config = Config::load(profile_dir)?;
        Self::from_config(config, Arc::new(TracingLogger::new()))
    }

    /// Create a context from an already loaded config and a logger
    pub fn from_config(config: Config, logger: Arc<dyn Logger>) -> Result<Self> {
        let hasher = hasher_for(config.credential_scheme);

        let gateway: Arc<dyn NotificationGateway> = if config.demo_mode {
            Arc::new(DemoGateway::new())
        } else {
            Arc::new(RandomOrgGateway::new(
                &config.gateway_url,
                config.gateway_timeout,
            )?)
        };

        Ok(Self {
            config,
            collaborators: Collaborators::new(logger, hasher, gateway),
        })
    }

    /// Create a profile wired to this context's collaborators
    pub fn create_profile(
        &self,
        username: &str,
        email: &str,
        age: u32,
        password: &str,
    ) -> Result<ProfileRecord> {
        ProfileRecord::new(username, email, age, password, self.collaborators.clone())
    }
}

/// Hasher implementing `scheme`
pub fn hasher_for(scheme: CredentialScheme) -> Arc<dyn CredentialHasher> {
    match scheme {
        CredentialScheme::Sha256 => Arc::new(Sha256Hasher::new()),
        CredentialScheme::Argon2id => Arc::new(Argon2Hasher::new()),
    }
}
