use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use argus_core::client::ApiClient;

#[derive(Args)]
pub struct DownloadArgs {
    /// Server-issued token from a previous encode
    pub token: String,

    /// Write the file here (defaults to the token name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &DownloadArgs, server: &str) -> Result<()> {
    let client = ApiClient::new(server)?;

    let pb = super::request_spinner("Downloading...")?;
    let bytes = client.download(&args.token);
    pb.finish_and_clear();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&args.token));
    std::fs::write(&output, bytes?)?;
    println!("Saved: {}", output.display());
    Ok(())
}
