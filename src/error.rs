use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssuntoError {
    // Gateway errors
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Parse(String),

    #[error("server rejected the request ({status}): {body}")]
    RemoteRejected { status: u16, body: String },

    #[error("invalid base URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl AssuntoError {
    /// Whether the failure happened below HTTP status handling
    /// (transport or body decoding) rather than as a server rejection.
    pub fn is_transport(&self) -> bool {
        matches!(self, AssuntoError::Network(_) | AssuntoError::Parse(_))
    }
}

impl From<reqwest::Error> for AssuntoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AssuntoError::Parse(err.to_string())
        } else {
            AssuntoError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AssuntoError>;
