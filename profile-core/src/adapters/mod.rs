//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - `tracing` and in-memory sinks for the Logger port
//! - SHA-256 and Argon2id for the CredentialHasher port
//! - random.org HTTP client and an offline demo generator for NotificationGateway

pub mod argon2_hasher;
pub mod demo;
pub mod logger;
pub mod random_org;
pub mod sha256;

pub use argon2_hasher::Argon2Hasher;
pub use demo::DemoGateway;
pub use logger::{LogLevel, LogLine, MemoryLogger, TracingLogger};
pub use random_org::RandomOrgGateway;
pub use sha256::Sha256Hasher;
