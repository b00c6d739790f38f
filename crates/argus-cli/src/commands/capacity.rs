use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use argus_core::client::ApiClient;
use argus_core::intake::ImageFile;

use crate::summary;

#[derive(Args)]
pub struct CapacityArgs {
    /// Cover image to probe (JPEG or PNG, max 16 MB)
    pub file: PathBuf,
}

pub fn run(args: &CapacityArgs, server: &str) -> Result<()> {
    let file = ImageFile::open(&args.file)?;
    let client = ApiClient::new(server)?;

    let pb = super::request_spinner("Probing capacity...")?;
    let reply = client.capacity(&file);
    pb.finish_and_clear();

    summary::print_capacity(&reply?);
    Ok(())
}
