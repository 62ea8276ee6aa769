//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The profile record
//! depends only on these traits, not on concrete implementations.

mod gateway;
mod hasher;
mod logger;

pub use gateway::NotificationGateway;
pub use hasher::CredentialHasher;
pub use logger::Logger;
