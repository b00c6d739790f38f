use std::fmt;
use std::path::Path;

use crate::consts::MAX_UPLOAD_BYTES;
use crate::error::{ArgusError, Result};

/// Accepted input image formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Detect the format from a file name extension (`jpg`, `jpeg`, `png`).
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            _ => None,
        }
    }

    /// Detect the format from leading magic bytes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some(ImageKind::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageKind::Jpeg)
        } else {
            None
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Jpeg => write!(f, "JPEG"),
            ImageKind::Png => write!(f, "PNG"),
        }
    }
}

/// A validated candidate image, held in memory for the lifetime of a
/// workflow session.
#[derive(Clone, Debug)]
pub struct ImageFile {
    pub name: String,
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Validate a candidate file. Runs synchronously, touches no network,
    /// and leaves no state behind on rejection.
    ///
    /// Rejects anything that is not JPEG/PNG (by extension, falling back to
    /// content sniffing for extension-less names) and anything over 16 MiB.
    pub fn validate(name: &str, bytes: Vec<u8>) -> Result<Self> {
        let kind = ImageKind::from_name(name)
            .or_else(|| ImageKind::from_bytes(&bytes))
            .ok_or_else(|| ArgusError::UnsupportedType(name.to_string()))?;

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ArgusError::TooLarge {
                size: bytes.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        Ok(Self {
            name: name.to_string(),
            kind,
            bytes,
        })
    }

    /// Read and validate a file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        Self::validate(&name, bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode into a displayable RGBA preview. Decoding a 16 MiB image is
    /// not cheap; callers run this off the UI thread.
    pub fn decode_preview(&self) -> Result<ImagePreview> {
        decode_rgba(&self.bytes)
    }
}

/// Decode arbitrary encoded image bytes into a displayable RGBA preview.
pub fn decode_rgba(bytes: &[u8]) -> Result<ImagePreview> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(ImagePreview {
        width,
        height,
        rgba: decoded.into_raw(),
    })
}

/// Decoded pixels ready for display.
#[derive(Clone, Debug)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, 4 bytes per pixel.
    pub rgba: Vec<u8>,
}
