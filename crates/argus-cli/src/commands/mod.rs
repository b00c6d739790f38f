pub mod analyze;
pub mod capacity;
pub mod decode;
pub mod download;
pub mod encode;
pub mod sample;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight; the service has no
/// progress reporting, so this is indeterminate.
pub(crate) fn request_spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}
