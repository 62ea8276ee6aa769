//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use profile_core::{OperationResult, ProfileSnapshot};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Render a failed command as `OperationResult` JSON
pub fn json_failure(error: &anyhow::Error) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&OperationResult::<()>::fail(format!("{:#}", error)))
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn or_absent(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_else(|| "-".to_string())
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".yellow().to_string()
    }
}

/// Print every field of a profile followed by its activity log
pub fn print_snapshot(snapshot: &ProfileSnapshot) {
    let mut table = create_table();
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Username".to_string(), or_absent(snapshot.username.as_deref())]);
    table.add_row(vec!["Email".to_string(), or_absent(snapshot.email.as_deref())]);
    table.add_row(vec![
        "Age".to_string(),
        snapshot
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Password hash".to_string(),
        or_absent(snapshot.credential_hash.as_deref()),
    ]);
    table.add_row(vec!["Verified".to_string(), yes_no(snapshot.verified)]);
    table.add_row(vec!["Visibility".to_string(), snapshot.visibility.to_string()]);
    table.add_row(vec!["2FA enabled".to_string(), yes_no(snapshot.two_factor_enabled)]);
    if snapshot.deleted {
        table.add_row(vec!["Status".to_string(), "deleted".red().to_string()]);
    }

    println!("{}", table);

    if snapshot.activity_log.is_empty() {
        println!("{}", "No activity recorded.".dimmed());
        return;
    }

    println!();
    println!("{}", "Activity".bold());
    for (i, entry) in snapshot.activity_log.iter().enumerate() {
        println!("  {}. {}", i + 1, entry);
    }
}
