//! Demo command - the sample profile session
//!
//! Creates `asd` / `asd@gmail.com`, changes the password, sends the
//! verification request and prints the resulting profile.

use std::collections::HashMap;

use anyhow::Result;
use colored::Colorize;
use profile_core::OperationResult;

use super::{get_context, with_spinner};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let mut profile = ctx.create_profile("asd", "asd@gmail.com", 25, "1234")?;
    profile.set_password("12345")?;

    let code = with_spinner("Requesting verification code...", || {
        profile.send_verification_email()
    })?;

    let snapshot = profile.snapshot();

    if json {
        let mut context = HashMap::new();
        context.insert("verificationCode".to_string(), serde_json::json!(code));
        context.insert(
            "gateway".to_string(),
            serde_json::json!(ctx.collaborators.gateway.name()),
        );
        let result = OperationResult::ok_with_context(snapshot, context);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if ctx.config.demo_mode {
        output::warning("Demo mode: verification code generated locally");
    }
    println!("Verification code: {}", code.to_string().bold());
    println!();
    output::print_snapshot(&snapshot);

    Ok(())
}
