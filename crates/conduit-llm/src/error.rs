use conduit_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while routing or serving an inference call
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider credential is missing or blank
    #[error("{0} is not configured")]
    Configuration(String),

    /// No wired provider serves the requested model
    #[error(
        "provider routing not implemented for model: {model}. Use a supported model or add the `together/` prefix"
    )]
    RoutingNotImplemented { model: String },

    /// Caller sent a request that cannot be forwarded
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream answered with a non-success status
    #[error("{provider} API error ({status}): {body}")]
    Upstream {
        /// Provider display name
        provider: String,
        /// HTTP status code returned upstream
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Request never produced an upstream response
    #[error("transport error: {0}")]
    Transport(String),

    /// Successful upstream response whose body could not be decoded
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Failure inside an already-returned output stream
    #[error("streaming error: {0}")]
    Stream(String),
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration(_) | Self::Stream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RoutingNotImplemented { .. } => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } | Self::Transport(_) | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::RoutingNotImplemented { .. } => "routing_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream { .. } | Self::MalformedResponse(_) => "upstream_error",
            Self::Transport(_) => "transport_error",
            Self::Stream(_) => "streaming_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Configuration(_) => "an internal error occurred".to_owned(),
            other => other.to_string(),
        }
    }
}
