//! Generate config command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::error::ServerResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new profile
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> ServerResult<()> {
        use std::fs;

        println!("Generating language profile template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Fill in stop words and abbreviations for the language");
        println!("2. Validate your profile:");
        println!(
            "   textlens validate --language-config {}",
            self.output.display()
        );
        println!("3. List it under [languages] profiles in the server configuration");

        Ok(())
    }

    /// Generate template profile content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language profile for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Snowball stemmer: arabic, danish, dutch, english, finnish, french, german,
# greek, hungarian, italian, norwegian, portuguese, romanian, russian,
# spanish, swedish, tamil, turkish, or "none"
[stemmer]
algorithm = "none"

# Sentence terminator characters
[terminators]
chars = [".", "!", "?"]

# Abbreviations organized by category; a terminator right after one of
# these does not end a sentence. Category names are arbitrary.
[abbreviations]
titles = ["Dr", "Prof"]
common = ["etc", "e.g", "i.e"]

# Words ignored by the statistical summarizer
[stopwords]
words = []
"#,
            code = self.language_code
        )
    }
}
