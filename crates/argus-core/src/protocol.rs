//! Wire types for the analysis service. Every endpoint answers JSON with a
//! top-level `success` flag; failures carry the reason in `error`.

use std::fmt;

use base64::Engine;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{ArgusError, Result};

#[derive(Debug, Deserialize)]
struct ReplyEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Parse a response body. A well-formed `success: false` becomes
/// [`ArgusError::Server`] with the server's message verbatim; a body that is
/// not JSON at all becomes [`ArgusError::MalformedResponse`].
pub fn parse_reply<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: ReplyEnvelope = serde_json::from_slice(body)?;
    if !envelope.success {
        return Err(ArgusError::Server(
            envelope
                .error
                .unwrap_or_else(|| "Unknown server error".to_string()),
        ));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Ordered label → probability mapping, in the exact order the server sent
/// it. The first entry is treated as the most likely family; the client
/// does not re-sort.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilityMap(Vec<(String, f64)>);

impl ProbabilityMap {
    pub fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.0
    }

    pub fn top(&self) -> Option<(&str, f64)> {
        self.0.first().map(|(label, p)| (label.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ProbabilityMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapOrderVisitor;

        impl<'de> Visitor<'de> for MapOrderVisitor {
            type Value = ProbabilityMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to probability")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, probability)) = access.next_entry::<String, f64>()? {
                    entries.push((label, probability));
                }
                Ok(ProbabilityMap(entries))
            }
        }

        deserializer.deserialize_map(MapOrderVisitor)
    }
}

/// Basic properties of the analyzed image, echoed back by the server.
#[derive(Clone, Debug, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub size: u64,
    #[serde(default)]
    pub format: Option<String>,
}

/// Successful `/analyze` or `/sample/{name}` response.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalyzeReply {
    pub probabilities: ProbabilityMap,
    #[serde(default)]
    pub image_info: Option<ImageInfo>,
}

/// Successful `/stego/capacity` response.
#[derive(Clone, Debug, Deserialize)]
pub struct CapacityReply {
    pub max_characters: u64,
    pub max_kb: f64,
    #[serde(default)]
    pub total_pixels: Option<u64>,
    #[serde(default)]
    pub image_size: Option<[u32; 2]>,
}

impl CapacityReply {
    /// One-line summary for the capacity panel.
    pub fn summary(&self) -> String {
        format!(
            "Capacity: {} characters ({} KB)",
            self.max_characters, self.max_kb
        )
    }
}

/// Properties of a completed embedding, for the metadata panel.
#[derive(Clone, Debug, Deserialize)]
pub struct EncodeMetadata {
    /// Original image dimensions as `[width, height]`.
    pub original_size: [u32; 2],
    /// Payload length in characters.
    pub data_length: u64,
    /// Human-readable capacity-used indicator, e.g. `"3.52%"`.
    pub capacity_used: String,
    pub encrypted: bool,
}

impl EncodeMetadata {
    pub fn encryption_badge(&self) -> &'static str {
        if self.encrypted {
            "Encrypted"
        } else {
            "Not Encrypted"
        }
    }
}

/// Successful `/stego/encode` response.
#[derive(Clone, Debug, Deserialize)]
pub struct EncodeReply {
    pub message: String,
    /// Inline result image as a `data:image/png;base64,...` URL.
    pub image_data: String,
    /// Opaque token for a follow-up `/download/{filename}` request.
    pub download_filename: String,
    pub metadata: EncodeMetadata,
}

/// Successful `/stego/decode` response.
#[derive(Clone, Debug, Deserialize)]
pub struct DecodeReply {
    pub message: String,
    /// The extracted text, verbatim.
    pub data: String,
}

/// Decode a `data:<mime>;base64,` URL into raw bytes.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let encoded = url
        .split_once("base64,")
        .map(|(_, rest)| rest)
        .ok_or_else(|| ArgusError::MalformedPayload("missing base64 data URL marker".into()))?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ArgusError::MalformedPayload(format!("invalid base64 image data: {e}")))
}
