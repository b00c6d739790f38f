//! View models for the steganography workflows: the encode result with its
//! inline preview and download reference, and the decode passthrough.

use std::fmt;

use crate::error::Result;
use crate::protocol::{decode_data_url, EncodeMetadata, EncodeReply};

/// Opaque server-issued token identifying an encode result for later
/// retrieval. Never parsed or mutated; only handed back to the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadReference(String);

impl DownloadReference {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DownloadReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode result ready for display: server message, decoded preview bytes,
/// metadata panel content, and the stored download reference.
#[derive(Clone, Debug)]
pub struct EncodeReport {
    pub message: String,
    /// The resulting image, decoded from the inline data-URL.
    pub preview_png: Vec<u8>,
    pub metadata: EncodeMetadata,
    pub download: DownloadReference,
}

impl EncodeReport {
    pub fn from_reply(reply: EncodeReply) -> Result<Self> {
        let preview_png = decode_data_url(&reply.image_data)?;
        Ok(Self {
            message: reply.message,
            preview_png,
            metadata: reply.metadata,
            download: DownloadReference::new(reply.download_filename),
        })
    }

    /// Metadata panel rows, in display order.
    pub fn metadata_lines(&self) -> Vec<String> {
        let [width, height] = self.metadata.original_size;
        vec![
            format!("Original Size: {width} x {height}"),
            format!("Data Length: {} characters", self.metadata.data_length),
            format!("Capacity Used: {}", self.metadata.capacity_used),
            self.metadata.encryption_badge().to_string(),
        ]
    }
}
