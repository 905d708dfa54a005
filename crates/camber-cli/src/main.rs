use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "camber")]
#[command(about = "Offline signature and offset diagnostics for dumped module images")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the signature table against a dumped module image
    Scan {
        /// Raw module image dump
        image: PathBuf,

        /// JSON signature table (builtin table when omitted)
        #[arg(short, long)]
        signatures: Option<PathBuf>,

        /// Build label recorded in the offset dump
        #[arg(short, long, default_value = "unknown")]
        build: String,

        /// Write the resolved offsets to a JSON dump
        #[arg(short, long)]
        dump: Option<PathBuf>,
    },
    /// Search an image for an ad-hoc pattern, e.g. "74 0A ?? ?? EB 25"
    Pattern {
        /// Raw module image dump
        image: PathBuf,

        /// Pattern tokens, wildcards as ??
        #[arg(required = true)]
        pattern: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("camber=info".parse()?)
                .add_directive("camber_cli=info".parse()?),
        )
        .init();

    match Args::parse().command {
        Command::Scan {
            image,
            signatures,
            build,
            dump,
        } => commands::scan::run(&image, signatures.as_deref(), &build, dump.as_deref()),
        Command::Pattern { image, pattern } => {
            commands::pattern::run(&image, &pattern.join(" "))
        }
    }
}
