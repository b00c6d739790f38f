use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use argus_core::client::ApiClient;
use argus_core::intake::ImageFile;
use argus_core::report::ClassificationReport;

use crate::summary;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Image file to classify (JPEG or PNG, max 16 MB)
    pub file: PathBuf,
}

pub fn run(args: &AnalyzeArgs, server: &str) -> Result<()> {
    let file = ImageFile::open(&args.file)?;
    let client = ApiClient::new(server)?;

    let pb = super::request_spinner("Analyzing...")?;
    let reply = client.classify(&file);
    pb.finish_and_clear();

    let report = ClassificationReport::from_map(&reply?.probabilities);
    summary::print_classification(&report);
    Ok(())
}
