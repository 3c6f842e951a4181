//! Validate command implementation

use clap::Args;
use std::path::PathBuf;
use textlens_core::LanguageProfile;

use crate::error::ServerResult;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the language profile to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> ServerResult<()> {
        println!(
            "Validating language profile: {}",
            self.language_config.display()
        );

        match LanguageProfile::from_file(&self.language_config) {
            Ok(profile) => {
                println!("✓ Profile is valid!");
                println!("  Language code: {}", profile.code());
                println!("  Language name: {}", profile.name());
                println!("  Stemmer:       {}", profile.stemmer_name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
