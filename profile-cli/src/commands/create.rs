//! Create command - one-shot profile session
//!
//! Profiles are not persisted: the command creates one, applies the requested
//! operations in a fixed order and prints the result.

use std::collections::HashMap;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Password;
use profile_core::{OperationResult, ProfileUpdate, Visibility};

use super::{get_context, with_spinner};
use crate::output;

#[derive(Args)]
pub struct CreateArgs {
    /// Username
    #[arg(long)]
    pub username: String,
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Age
    #[arg(long)]
    pub age: u32,
    /// Initial password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
    /// Change the password after creation
    #[arg(long)]
    pub new_password: Option<String>,
    /// Profile visibility (public, private)
    #[arg(long)]
    pub visibility: Option<String>,
    /// Send the verification request
    #[arg(long)]
    pub verify: bool,
    /// Enable two-factor authentication
    #[arg(long = "enable-2fa")]
    pub enable_two_factor: bool,
    /// Delete the profile at the end
    #[arg(long)]
    pub delete: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CreateArgs) -> Result<()> {
    let ctx = get_context()?;

    let password = match args.password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let mut profile = ctx.create_profile(&args.username, &args.email, args.age, &password)?;

    if let Some(visibility) = args.visibility {
        if Visibility::parse(&visibility).is_none() && !args.json {
            output::warning(&format!(
                "Unknown visibility '{}', keeping {}",
                visibility,
                profile.visibility()
            ));
        }
        profile.update(ProfileUpdate::new().with_visibility(visibility))?;
    }

    if let Some(new_password) = args.new_password {
        profile.set_password(&new_password)?;
    }

    let code = if args.verify {
        Some(with_spinner("Requesting verification code...", || {
            profile.send_verification_email()
        })?)
    } else {
        None
    };

    if args.enable_two_factor {
        profile.enable_two_factor()?;
    }

    if args.delete {
        profile.delete()?;
    }

    let snapshot = profile.snapshot();

    if args.json {
        let mut context = HashMap::new();
        if let Some(code) = code {
            context.insert("verificationCode".to_string(), serde_json::json!(code));
        }
        let result = OperationResult::ok_with_context(snapshot, context);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::success("Profile created");
    if let Some(code) = code {
        println!("Verification code: {}", code.to_string().bold());
    }
    println!();
    output::print_snapshot(&snapshot);

    Ok(())
}
