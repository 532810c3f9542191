use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the generation service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The liveness probe never reached the server.
    #[error("cannot connect to Ollama server at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The generate request failed before any response arrived.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP status {status} for url ({url})")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },
}

impl ApiError {
    /// Status and payload of the failed response, if the server sent one.
    pub fn response(&self) -> Option<(StatusCode, &str)> {
        match self {
            ApiError::Status { status, body, .. } => Some((*status, body.as_str())),
            _ => None,
        }
    }

    /// Human-readable lines describing the response payload: the parsed
    /// JSON when possible, otherwise the raw status and body.
    pub fn detail_lines(&self) -> Vec<String> {
        let Some((status, body)) = self.response() else {
            return Vec::new();
        };
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(detail) => vec![format!("Error details: {}", detail)],
            Err(_) => vec![
                format!("Status code: {}", status.as_u16()),
                format!("Response text: {}", body),
            ],
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
