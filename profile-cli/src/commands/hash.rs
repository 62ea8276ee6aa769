//! Hash command - print a password digest

use anyhow::Result;
use profile_core::{hasher_for, CredentialScheme};

pub fn run(password: &str, scheme: &str) -> Result<()> {
    let scheme: CredentialScheme = scheme.parse()?;
    let digest = hasher_for(scheme).hash(password)?;
    println!("{}", digest);
    Ok(())
}
