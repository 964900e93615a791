//! Errors returned by the client.
//!
//! Every call ends in a typed value or in exactly one [`ClientError`]:
//!
//! - [`MissingToken`] when an authorized endpoint is called before a token is
//!   set. Nothing is sent in that case.
//! - [`Transport`] for anything the HTTP layer reports (connection, timeout,
//!   malformed URL).
//! - [`Decode`] when a body is not the JSON shape the endpoint expects.
//! - [`Api`] when the server answers with its structured error body.
//!
//!  [`MissingToken`]: ClientError::MissingToken
//!  [`Transport`]: ClientError::Transport
//!  [`Decode`]: ClientError::Decode
//!  [`Api`]: ClientError::Api
use api_types::error::ErrorBody;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authorized call attempted without a token, login or set one first")]
    MissingToken,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// The API error carried by this error, if the server produced one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status reported by the server.
    pub fn status(&self) -> Option<u16> {
        self.api().map(|err| err.http_status_code)
    }
}

/// Error reported by the groshi server on any non-200 response.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}{}", render_details(.details))]
pub struct ApiError {
    pub http_status_code: u16,
    pub message: String,
    pub details: Vec<String>,
}

impl ApiError {
    pub fn new(http_status_code: u16, body: ErrorBody) -> Self {
        Self {
            http_status_code,
            message: body.error_message,
            details: body.error_details,
        }
    }
}

fn render_details(details: &[String]) -> String {
    if details.is_empty() {
        String::new()
    } else {
        format!(" ({})", details.join(", "))
    }
}
