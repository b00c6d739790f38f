use anyhow::Result;
use clap::Args;

use argus_core::client::ApiClient;
use argus_core::report::ClassificationReport;

use crate::summary;

#[derive(Args)]
pub struct SampleArgs {
    /// Server-side sample image name
    pub name: String,
}

pub fn run(args: &SampleArgs, server: &str) -> Result<()> {
    let client = ApiClient::new(server)?;

    let pb = super::request_spinner("Analyzing sample...")?;
    let reply = client.classify_sample(&args.name);
    pb.finish_and_clear();

    let report = ClassificationReport::from_map(&reply?.probabilities);
    summary::print_classification(&report);
    Ok(())
}
