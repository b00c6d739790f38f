use std::path::PathBuf;

use argus_core::intake::{ImageFile, ImagePreview};
use argus_core::protocol::{CapacityReply, DecodeReply};
use argus_core::report::ClassificationReport;
use argus_core::session::Workflow;
use argus_core::stego::{DownloadReference, EncodeReport};

/// Where a candidate image comes from.
pub enum ImageSource {
    /// Picked via the file dialog or dropped with a path.
    Path(PathBuf),
    /// Dropped as raw bytes (e.g. dragged out of another application).
    Memory { name: String, bytes: Vec<u8> },
}

/// Commands sent from the UI thread to the worker thread. Every command
/// tied to a session carries the generation current when it was issued, so
/// late results for a cleared session can be dropped.
pub enum WorkerCommand {
    /// Read, validate, and decode a candidate image for preview. For the
    /// encode workflow this also triggers the capacity probe.
    OpenImage {
        workflow: Workflow,
        source: ImageSource,
        generation: u64,
    },

    /// POST the image for malware-family classification.
    Classify { file: ImageFile, generation: u64 },

    /// Classify a server-side sample fixture (no upload).
    ClassifySample { name: String, generation: u64 },

    /// Embed the payload into the image.
    Encode {
        file: ImageFile,
        payload: String,
        password: Option<String>,
        generation: u64,
    },

    /// Extract a hidden payload from the image.
    Decode {
        file: ImageFile,
        password: Option<String>,
        generation: u64,
    },

    /// Fetch an encode result by its opaque token and save it.
    Download {
        token: DownloadReference,
        dest: PathBuf,
    },
}

/// Results sent from the worker thread back to the UI thread.
pub enum WorkerResult {
    /// A candidate image passed validation and decoded.
    FileAccepted {
        workflow: Workflow,
        file: ImageFile,
        preview: ImagePreview,
        generation: u64,
    },

    /// A candidate image was rejected (validation or decode failure).
    OpenFailed {
        workflow: Workflow,
        message: String,
    },

    /// Capacity probe finished for the encode workflow's current file.
    CapacityDone {
        info: CapacityReply,
        generation: u64,
    },

    ClassifyDone {
        report: ClassificationReport,
        generation: u64,
    },

    EncodeDone {
        report: EncodeReport,
        preview: ImagePreview,
        generation: u64,
    },

    DecodeDone {
        reply: DecodeReply,
        generation: u64,
    },

    DownloadDone { path: PathBuf },

    /// A submission failed (transport or application error).
    Failed {
        workflow: Workflow,
        message: String,
        generation: u64,
    },

    Log { message: String },
}
