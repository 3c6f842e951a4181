//! textlens command-line entry point

use clap::Parser;
use textlens_server::commands::Commands;
use textlens_server::ServerResult;

/// Text analysis service: language, sentiment, keywords and summaries
#[derive(Debug, Parser)]
#[command(name = "textlens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ServerResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => args.execute(),
        Commands::Analyze(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}
