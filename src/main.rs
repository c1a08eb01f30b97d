//! Command-line interface for autofixture
//!
//! # Usage Examples
//!
//! ```bash
//! # Three records shaped like contact.json, constrained by contact.yaml
//! autofixture generate --template contact.json --spec contact.yaml
//!
//! # Ten reproducible records, pretty-printed
//! AUTOFIXTURE_SEED=42 autofixture generate -t contact.json -n 10 --pretty
//!
//! # Show how a field spec is understood
//! autofixture check "number in <1.5, 2>"
//!
//! # Random contacts through the repository and service layers
//! autofixture contacts --count 5 --seed 7
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=fixture_generator=debug`).

use autofixture::commands::{
    run_check, run_contacts, run_generate, CheckArgs, ContactsArgs, GenerateArgs,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "autofixture")]
#[command(about = "Generate random test data from field specs")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records from a JSON template and a spec map
    Generate(GenerateArgs),

    /// Parse a field spec and print its canonical form
    Check(CheckArgs),

    /// Store random contacts in memory and print them
    Contacts(ContactsArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Generate(args) => run_generate(&args, &mut out),
        Commands::Check(args) => run_check(&args, &mut out),
        Commands::Contacts(args) => run_contacts(&args, &mut out),
    }
}
