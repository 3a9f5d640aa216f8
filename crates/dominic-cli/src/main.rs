mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dominic",
    about = "Dominic mnemonic system: compose person + action phrases for numbers",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: nearest directory with .dominic/, else cwd)
    #[arg(long, global = true, env = "DOMINIC_ROOT")]
    root: Option<PathBuf>,

    /// Table file of label:name:action lines (default: from config, else dominic.txt)
    #[arg(long, global = true, env = "DOMINIC_TABLE")]
    table: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log debug output to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    /// Print the phrases for a range of cells, e.g. '0-9'. Cell numbers start at 0.
    #[arg(short = 'r', long = "range", value_name = "BEGIN-END")]
    range: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the letter pair for a two-digit number
    Code {
        /// Number from 0 to 99
        number: u64,
    },

    /// Show the record stored at a table index
    Show {
        /// Zero-based line number in the table
        index: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let table = cli.table.as_deref();

    let result = match cli.command {
        Some(_) if cli.range.is_some() => Err(anyhow::anyhow!(
            "--range cannot be combined with a subcommand"
        )),
        Some(Commands::Code { number }) => cmd::code::run(number, cli.json),
        Some(Commands::Show { index }) => cmd::show::run(&root, table, index, cli.json),
        None => cmd::range::run(&root, table, cli.range.as_deref(), cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
