mod cli;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

/// Descriptive statistics and projection plots for PDB/mmCIF structure models
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Per-chain residue and atom statistics
    Describe(cli::describe::Args),
    /// List non-standard residues and count waters
    Hetero(cli::hetero::Args),
    /// Render a multi-panel scatter figure of atomic positions
    Plot(cli::plot::Args),
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match &cli.command {
        Commands::Describe(args) => cli::describe::run(args),
        Commands::Hetero(args) => cli::hetero::run(args),
        Commands::Plot(args) => cli::plot::run(args),
    }
}
