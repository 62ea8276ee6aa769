//! Profile CLI - user profile records in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

use commands::{check_email, config, create, demo, hash};

/// Profile - create, validate and verify user profiles
#[derive(Parser)]
#[command(name = "profile", version, about, long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample session: create, change password, verify, print
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a profile and apply the requested operations to it
    Create(create::CreateArgs),

    /// Check whether an email address is accepted
    CheckEmail {
        /// Email address to check
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the digest of a password
    Hash {
        /// Password to hash
        password: String,
        /// Hashing scheme (sha256, argon2id)
        #[arg(long, default_value = "sha256")]
        scheme: String,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    let json = wants_json(&cli.command);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match output::json_failure(&e) {
                Ok(rendered) if json => println!("{}", rendered),
                _ => output::error(&format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}

/// Whether the command asked for JSON on stdout
fn wants_json(command: &Commands) -> bool {
    match command {
        Commands::Demo { json } | Commands::CheckEmail { json, .. } => *json,
        Commands::Create(args) => args.json,
        Commands::Config {
            command: Some(config::ConfigCommands::Show { json }),
        } => *json,
        Commands::Hash { .. } | Commands::Config { .. } => false,
    }
}

/// Send log output to stderr so JSON on stdout stays clean
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Demo { json } => demo::run(json),
        Commands::Create(args) => create::run(args),
        Commands::CheckEmail { email, json } => check_email::run(&email, json),
        Commands::Hash { password, scheme } => hash::run(&password, &scheme),
        Commands::Config { command } => config::run(command),
    }
}
