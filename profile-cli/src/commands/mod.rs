//! CLI command implementations

pub mod check_email;
pub mod config;
pub mod create;
pub mod demo;
pub mod hash;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use profile_core::ProfileContext;

/// Get the profile directory from environment or default
pub fn get_profile_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PROFILE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".userprofile"))
        .context("Could not find home directory; set PROFILE_DIR")
}

/// Build the profile context from the settings in the profile directory
pub fn get_context() -> Result<ProfileContext> {
    let profile_dir = get_profile_dir()?;
    tracing::debug!(dir = %profile_dir.display(), "loading profile settings");
    ProfileContext::new(&profile_dir).context("Failed to initialize profile context")
}

/// Run `f` while showing a spinner with `message`
///
/// The spinner is hidden when stderr is not a terminal.
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = f();

    spinner.finish_and_clear();
    result
}
