//! Offline gateway for demo mode
//!
//! Produces codes in the same range as the random.org endpoint without
//! touching the network.

use rand::Rng;

use crate::domain::result::Result;
use crate::ports::NotificationGateway;

/// Lowest code issued
pub const MIN_CODE: i64 = 1;
/// Highest code issued
pub const MAX_CODE: i64 = 100;

#[derive(Debug, Default, Clone, Copy)]
pub struct DemoGateway;

impl DemoGateway {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationGateway for DemoGateway {
    fn name(&self) -> &str {
        "demo"
    }

    fn issue_code(&self, email: &str) -> Result<i64> {
        let code = rand::thread_rng().gen_range(MIN_CODE..=MAX_CODE);
        tracing::debug!(target: "profile", email, code, "issued demo verification code");
        Ok(code)
    }
}
