//! xtask - Development task runner for pipable
//!
//! Usage:
//!   cargo xtask codegen [--config <yaml>] [--max-arity <n>] [--check]
//!   cargo xtask print [--kind <kind>] [--format text|json]

mod codegen;
mod config;
mod print;
mod template;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for pipable")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the declaration template with generated overloads
    Codegen(codegen::CodegenArgs),
    /// Print generated overload families
    Print(print::PrintArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen(args) => codegen::run(&args),
        Commands::Print(args) => print::run(&args),
    }
}
