//! HTTP orchestration against the analysis service. One request per user
//! action; bodies are multipart form submissions and every response is
//! parsed through [`protocol::parse_reply`] so application-level failures
//! (`success: false`) stay distinct from transport failures.

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};

use crate::error::{ArgusError, Result};
use crate::intake::ImageFile;
use crate::protocol::{self, AnalyzeReply, CapacityReply, DecodeReply, EncodeReply};
use crate::session::WorkflowSession;

/// The four submittable request kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Classify,
    ClassifySample(String),
    StegoEncode,
    StegoDecode,
}

/// Typed payload routed to the matching renderer.
#[derive(Clone, Debug)]
pub enum ServerResponse {
    Classification(AnalyzeReply),
    Encoded(EncodeReply),
    Decoded(DecodeReply),
}

/// Blocking client for the analysis service. Callers run it on a worker
/// thread; there is no timeout and no retry, matching the service contract.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the request from session state and dispatch it.
    pub fn submit(&self, kind: &RequestKind, session: &WorkflowSession) -> Result<ServerResponse> {
        match kind {
            RequestKind::Classify => {
                let file = session.file().ok_or(ArgusError::NotReady)?;
                Ok(ServerResponse::Classification(self.classify(file)?))
            }
            RequestKind::ClassifySample(name) => {
                Ok(ServerResponse::Classification(self.classify_sample(name)?))
            }
            RequestKind::StegoEncode => {
                let file = session.file().ok_or(ArgusError::NotReady)?;
                Ok(ServerResponse::Encoded(self.encode(
                    file,
                    session.payload(),
                    session.password(),
                )?))
            }
            RequestKind::StegoDecode => {
                let file = session.file().ok_or(ArgusError::NotReady)?;
                Ok(ServerResponse::Decoded(
                    self.decode(file, session.password())?,
                ))
            }
        }
    }

    /// POST /analyze with the image; returns the ranked probability map.
    pub fn classify(&self, image: &ImageFile) -> Result<AnalyzeReply> {
        let form = Form::new().part("image", image_part(image)?);
        let body = self.post_multipart("/analyze", form)?;
        protocol::parse_reply(&body)
    }

    /// GET /sample/{name}: classify a server-side fixture, no upload.
    pub fn classify_sample(&self, name: &str) -> Result<AnalyzeReply> {
        let path = format!("/sample/{name}");
        let body = self.read_body(&path, self.http.get(self.endpoint(&path)).send())?;
        protocol::parse_reply(&body)
    }

    /// POST /stego/capacity: how much payload the image can hold.
    pub fn capacity(&self, image: &ImageFile) -> Result<CapacityReply> {
        let form = Form::new().part("image", image_part(image)?);
        let body = self.post_multipart("/stego/capacity", form)?;
        protocol::parse_reply(&body)
    }

    /// POST /stego/encode with image, payload text, and optional password.
    pub fn encode(
        &self,
        image: &ImageFile,
        data: &str,
        password: Option<&str>,
    ) -> Result<EncodeReply> {
        let mut form = Form::new()
            .part("image", image_part(image)?)
            .text("data", data.to_string());
        if let Some(password) = password {
            form = form.text("password", password.to_string());
        }
        let body = self.post_multipart("/stego/encode", form)?;
        protocol::parse_reply(&body)
    }

    /// POST /stego/decode with image and optional password.
    pub fn decode(&self, image: &ImageFile, password: Option<&str>) -> Result<DecodeReply> {
        let mut form = Form::new().part("image", image_part(image)?);
        if let Some(password) = password {
            form = form.text("password", password.to_string());
        }
        let body = self.post_multipart("/stego/decode", form)?;
        protocol::parse_reply(&body)
    }

    /// Retrieval URL for an encode result. The token is opaque and is
    /// appended untouched.
    pub fn download_url(&self, token: &str) -> String {
        self.endpoint(&format!("/download/{token}"))
    }

    /// GET /download/{filename}: the raw encoded file.
    pub fn download(&self, token: &str) -> Result<Vec<u8>> {
        let url = self.download_url(token);
        let response = self
            .http
            .get(&url)
            .send()
            .inspect_err(|e| tracing::warn!(%url, error = %e, "download request failed"))?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        if !status.is_success() {
            // The service answers failed downloads with the usual JSON
            // envelope; fall back to the HTTP status if it does not.
            return match protocol::parse_reply::<serde_json::Value>(&body) {
                Err(e @ ArgusError::Server(_)) => Err(e),
                _ => Err(ArgusError::Server(format!("Download failed: HTTP {status}"))),
            };
        }
        Ok(body)
    }

    fn post_multipart(&self, path: &str, form: Form) -> Result<Vec<u8>> {
        self.read_body(
            path,
            self.http.post(self.endpoint(path)).multipart(form).send(),
        )
    }

    /// Read the body regardless of HTTP status: application errors arrive
    /// as JSON on 4xx and must be surfaced verbatim, not as transport
    /// failures. Transport detail is logged here; callers show a generic
    /// message.
    fn read_body(&self, path: &str, sent: reqwest::Result<Response>) -> Result<Vec<u8>> {
        let response =
            sent.inspect_err(|e| tracing::warn!(path, error = %e, "request failed"))?;
        let status = response.status();
        let body = response
            .bytes()
            .inspect_err(|e| tracing::warn!(path, error = %e, "failed to read response body"))?;
        tracing::debug!(path, %status, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}

fn image_part(image: &ImageFile) -> Result<Part> {
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.name.clone())
        .mime_str(image.kind.mime())?;
    Ok(part)
}
