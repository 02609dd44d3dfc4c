use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagFlowError {
    /// Network or HTTP-layer fault, or a response body that is not a valid envelope.
    #[error("Transport error{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        body: Option<String>,
        message: String,
    },

    /// Well-formed envelope carrying a non-zero `code`.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RagFlowError {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            body: None,
            message: message.into(),
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Server-side application code, when the failure came from the envelope.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status of a transport failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RagFlowError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("Request timed out: {error}")
        } else if error.is_connect() {
            format!("Connection failed: {error}")
        } else {
            format!("Request failed: {error}")
        };

        Self::Transport {
            status: error.status().map(|status| status.as_u16()),
            body: None,
            message,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, RagFlowError>;
