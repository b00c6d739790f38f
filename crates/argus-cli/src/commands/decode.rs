use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use argus_core::client::ApiClient;
use argus_core::intake::ImageFile;

#[derive(Args)]
pub struct DecodeArgs {
    /// Stego image to read (JPEG or PNG, max 16 MB)
    pub file: PathBuf,

    /// Password the payload was encrypted with
    #[arg(long)]
    pub password: Option<String>,
}

pub fn run(args: &DecodeArgs, server: &str) -> Result<()> {
    let file = ImageFile::open(&args.file)?;
    let client = ApiClient::new(server)?;

    let pb = super::request_spinner("Extracting...")?;
    let reply = client.decode(&file, args.password.as_deref());
    pb.finish_and_clear();

    let reply = reply?;
    eprintln!("{}", reply.message);
    // Extracted text goes to stdout verbatim so it can be piped.
    println!("{}", reply.data);
    Ok(())
}
