use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("unexpected status {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("font error: {0}")]
    Font(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::HttpStatus { .. } => "HTTP_STATUS",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Font(_) => "FONT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Transport-level failures, as opposed to bad content or local problems.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::HttpStatus { .. }
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(value: image::ImageError) -> Self {
        match value {
            image::ImageError::Encoding(err) => Self::Encode(err.to_string()),
            image::ImageError::IoError(err) => Self::Io(err.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            return Self::Timeout(value.to_string());
        }
        if let Some(status) = value.status() {
            return Self::HttpStatus {
                status: status.as_u16(),
                url: value
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            };
        }
        Self::Network(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
