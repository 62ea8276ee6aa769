//! Logging port
//!
//! The profile record reports what it does through this trait instead of a
//! process-wide logger, so callers decide where the lines end up.

/// Informational and error message sink
///
/// Implementations must not fail or panic: a broken sink should never abort
/// a profile operation.
pub trait Logger: Send + Sync {
    /// Record an informational message
    fn info(&self, message: &str);

    /// Record an error message
    fn error(&self, message: &str);
}
