use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use linepatch::areas::session::Session;
use linepatch::{Algorithm, DiffOptions, DiffService};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "linepatch",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Line-based diff and patch tool",
    long_about = "Computes minimal line diffs between two files, stores them in a compact \
    versioned format and rebuilds either file from the other plus a stored patch.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show a unified diff between two files",
        long_about = "This command prints a unified diff turning the first file into the second. \
        Each hunk carries a single trailing context line."
    )]
    Diff {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The updated file")]
        new: PathBuf,
        #[arg(long, help = "Name shown in the ---/+++ header (defaults to the updated file name)")]
        filename: Option<String>,
    },
    #[command(
        name = "encode",
        about = "Print the stored form of the diff between two files",
        long_about = "This command computes the diff between two files and prints the versioned \
        envelope that can be kept in a store and applied later."
    )]
    Encode {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The updated file")]
        new: PathBuf,
        #[arg(short, long, help = "Emit the deflated base64 form instead of JSON")]
        packed: bool,
        #[arg(short, long, default_value = "myers", help = "Diff algorithm (myers or simple)")]
        algorithm: Algorithm,
        #[arg(long, help = "Do not record the base file checksum")]
        no_checksum: bool,
    },
    #[command(
        name = "apply",
        about = "Rebuild a file from a base file and a stored patch",
        long_about = "This command applies a stored patch to the base file and prints the result. \
        With --reverse the base is the updated file and the original is rebuilt."
    )]
    Apply {
        #[arg(index = 1, help = "The base file")]
        base: PathBuf,
        #[arg(index = 2, help = "The stored patch")]
        patch: PathBuf,
        #[arg(short, long, help = "Rebuild the original from the updated file")]
        reverse: bool,
        #[arg(long, help = "Skip the base checksum check")]
        unchecked: bool,
    },
    #[command(
        name = "stats",
        about = "Summarize the changes between two files"
    )]
    Stats {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The updated file")]
        new: PathBuf,
    },
    #[command(
        name = "decode",
        about = "Print the edits held by a stored patch"
    )]
    Decode {
        #[arg(index = 1, help = "The stored patch")]
        patch: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    let options = match &cli.command {
        Commands::Encode {
            algorithm,
            no_checksum,
            ..
        } => DiffOptions {
            algorithm: *algorithm,
            compress: true,
            checksum: !no_checksum,
            ..DiffOptions::default()
        },
        _ => DiffOptions::default(),
    };

    let session = Session::new(DiffService::new(options), Box::new(std::io::stdout()));

    match &cli.command {
        Commands::Diff { old, new, filename } => session.diff(old, new, filename.as_deref())?,
        Commands::Encode {
            old, new, packed, ..
        } => session.encode(old, new, *packed)?,
        Commands::Apply {
            base,
            patch,
            reverse,
            unchecked,
        } => session.apply(base, patch, *reverse, *unchecked)?,
        Commands::Stats { old, new } => session.stats(old, new)?,
        Commands::Decode { patch } => session.decode(patch)?,
    }

    Ok(())
}
