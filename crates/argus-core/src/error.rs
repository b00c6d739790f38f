use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgusError {
    #[error("Unsupported file type: {0} (expected JPEG or PNG)")]
    UnsupportedType(String),

    #[error("File too large: {size} bytes (limit: {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("A password is required when password protection is enabled")]
    MissingPassword,

    #[error("Nothing to submit: required fields are missing")]
    NotReady,

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed server response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Malformed image payload: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Server(String),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArgusError {
    /// True for errors raised locally before any request is dispatched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ArgusError::UnsupportedType(_)
                | ArgusError::TooLarge { .. }
                | ArgusError::MissingPassword
                | ArgusError::NotReady
        )
    }

    /// True when the server answered with a well-formed `success: false`.
    pub fn is_application(&self) -> bool {
        matches!(self, ArgusError::Server(_))
    }

    /// Message suitable for direct display. Application errors are shown
    /// verbatim; transport failures get a generic line (detail goes to the
    /// log).
    pub fn user_message(&self) -> String {
        match self {
            ArgusError::Transport(_) => {
                "Request failed. Check the server and try again.".to_string()
            }
            ArgusError::MalformedResponse(_) => {
                "The server returned an unreadable response.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArgusError>;
