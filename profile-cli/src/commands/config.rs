//! Config command - show and change settings.json

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use profile_core::config::{Config, SETTINGS_FILE};
use profile_core::CredentialScheme;

use super::get_profile_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Turn demo mode (offline verification codes) on or off
    Demo {
        #[arg(value_parser = ["on", "off"])]
        state: String,
    },
    /// Set the password hashing scheme (sha256, argon2id)
    Scheme { scheme: String },
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    let profile_dir = get_profile_dir()?;

    match command {
        Some(ConfigCommands::Show { json }) => show(&profile_dir, json),
        None => show(&profile_dir, false),
        Some(ConfigCommands::Demo { state }) => {
            std::fs::create_dir_all(&profile_dir).with_context(|| {
                format!("Failed to create profile directory: {:?}", profile_dir)
            })?;
            let mut config = Config::load_file(&profile_dir)?;
            if state == "on" {
                config.enable_demo_mode();
                config.save(&profile_dir)?;
                output::success("Demo mode enabled");
            } else {
                config.disable_demo_mode();
                config.save(&profile_dir)?;
                println!("{}", "Demo mode disabled".yellow());
            }
            Ok(())
        }
        Some(ConfigCommands::Scheme { scheme }) => {
            let scheme: CredentialScheme = scheme.parse()?;
            std::fs::create_dir_all(&profile_dir).with_context(|| {
                format!("Failed to create profile directory: {:?}", profile_dir)
            })?;
            let mut config = Config::load_file(&profile_dir)?;
            config.credential_scheme = scheme;
            config.save(&profile_dir)?;
            output::success(&format!("Credential scheme set to {}", scheme));
            if scheme == CredentialScheme::Sha256 {
                output::warning("sha256 digests are unsalted; prefer argon2id");
            }
            Ok(())
        }
    }
}

fn show(profile_dir: &std::path::Path, json: bool) -> Result<()> {
    let config = Config::load(profile_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![
        "Settings file".to_string(),
        profile_dir.join(SETTINGS_FILE).display().to_string(),
    ]);
    table.add_row(vec![
        "Demo mode".to_string(),
        if config.demo_mode { "on".green().to_string() } else { "off".to_string() },
    ]);
    table.add_row(vec![
        "Credential scheme".to_string(),
        config.credential_scheme.to_string(),
    ]);
    table.add_row(vec!["Gateway URL".to_string(), config.gateway_url.clone()]);
    table.add_row(vec![
        "Gateway timeout".to_string(),
        format!("{}s", config.gateway_timeout.as_secs()),
    ]);
    println!("{}", table);
    Ok(())
}
