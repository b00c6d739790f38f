mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use argus_core::consts::DEFAULT_SERVER_URL;

#[derive(Parser)]
#[command(name = "argus", about = "Image malware analysis and steganography client")]
#[command(version)]
struct Cli {
    /// Analysis server base URL
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an image for malware families
    Analyze(commands::analyze::AnalyzeArgs),
    /// Classify a server-side sample image
    Sample(commands::sample::SampleArgs),
    /// Report how much data an image can hide
    Capacity(commands::capacity::CapacityArgs),
    /// Hide a text payload inside an image
    Encode(commands::encode::EncodeArgs),
    /// Extract a hidden payload from an image
    Decode(commands::decode::DecodeArgs),
    /// Fetch a previously encoded image by its server token
    Download(commands::download::DownloadArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, &cli.server),
        Commands::Sample(args) => commands::sample::run(args, &cli.server),
        Commands::Capacity(args) => commands::capacity::run(args, &cli.server),
        Commands::Encode(args) => commands::encode::run(args, &cli.server),
        Commands::Decode(args) => commands::decode::run(args, &cli.server),
        Commands::Download(args) => commands::download::run(args, &cli.server),
    }
}
