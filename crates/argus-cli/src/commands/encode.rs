use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use argus_core::client::ApiClient;
use argus_core::intake::ImageFile;
use argus_core::stego::EncodeReport;

use crate::summary;

#[derive(Args)]
pub struct EncodeArgs {
    /// Cover image (JPEG or PNG, max 16 MB)
    pub file: PathBuf,

    /// Text to hide; reads stdin when omitted
    #[arg(long)]
    pub data: Option<String>,

    /// Encrypt the payload with a password
    #[arg(long)]
    pub password: Option<String>,

    /// Write the encoded image here (defaults to the server's file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &EncodeArgs, server: &str) -> Result<()> {
    let file = ImageFile::open(&args.file)?;

    let data = match &args.data {
        Some(data) => data.clone(),
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let data = data.trim();
    if data.is_empty() {
        bail!("Nothing to hide: the payload text is empty");
    }

    let client = ApiClient::new(server)?;

    let pb = super::request_spinner("Encoding...")?;
    let reply = client.encode(&file, data, args.password.as_deref());
    pb.finish_and_clear();

    let report = EncodeReport::from_reply(reply?)?;
    summary::print_encode(&report);

    // The reply carries the encoded image inline; no second round trip.
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(report.download.as_str()));
    std::fs::write(&output, &report.preview_png)?;
    println!("Saved: {}", output.display());
    Ok(())
}
