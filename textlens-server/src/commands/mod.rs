//! CLI command implementations

use clap::Subcommand;

pub mod analyze;
pub mod generate_config;
pub mod serve;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP analysis service
    Serve(serve::ServeArgs),

    /// Analyze text from files, standard input or the command line
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language profile file
    Validate(validate::ValidateArgs),

    /// Generate a language profile template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List language profiles available to the statistical summarizer
    Languages,
}

impl ListCommands {
    pub fn execute(&self) -> crate::ServerResult<()> {
        match self {
            ListCommands::Languages => {
                let registry = textlens_core::ProfileRegistry::builtin();
                println!("Available languages:");
                for profile in registry.profiles() {
                    println!("  {:<4} {}", profile.code(), profile.name());
                }
                Ok(())
            }
        }
    }
}

/// Initialize logging from the verbosity count
///
/// `RUST_LOG` takes precedence over the count. Safe to call more than once.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_command_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_list_languages_executes() {
        assert!(ListCommands::Languages.execute().is_ok());
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
