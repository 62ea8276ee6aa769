//! Core domain entities
//!
//! The profile record and the value types around it. Validation lives here;
//! I/O goes through the traits in `ports`.

mod credential;
mod email;
mod profile;
mod visibility;
pub mod result;

pub use credential::CredentialScheme;
pub use email::is_valid_email;
pub use profile::{Collaborators, ProfileRecord, ProfileSnapshot, ProfileUpdate};
pub use visibility::Visibility;
