//! Verification gateway port

use crate::domain::result::Result;

/// Issues verification codes for an email address
///
/// The HTTP implementation asks a public random-number service for the code;
/// the demo implementation generates one locally. Either way the code is
/// returned to the caller and never stored on the profile.
pub trait NotificationGateway: Send + Sync {
    /// Gateway name (e.g., "random-org", "demo")
    fn name(&self) -> &str;

    /// Issue a verification code for `email`
    ///
    /// A single attempt: transport failures and unparseable responses are
    /// returned as [`crate::Error::Gateway`] without retrying.
    fn issue_code(&self, email: &str) -> Result<i64>;
}
