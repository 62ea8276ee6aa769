//! Check-email command

use anyhow::Result;
use colored::Colorize;
use profile_core::{is_valid_email, OperationResult};
use serde::Serialize;

#[derive(Serialize)]
struct EmailCheck<'a> {
    email: &'a str,
    valid: bool,
}

pub fn run(email: &str, json: bool) -> Result<()> {
    let valid = is_valid_email(email);

    if json {
        let result = OperationResult::ok(EmailCheck { email, valid });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if valid {
        println!("{} is {}", email, "valid".green());
    } else {
        println!("{} is {}", email, "not valid".red());
    }
    Ok(())
}
