use http::StatusCode;

/// Status mapping for routing and provider failures
///
/// `conduit_llm::LlmError` implements this so a service wrapping the router
/// can answer with a status and a scrubbed message. Credential problems, for
/// instance, come back as a generic 500 without naming the variable.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `routing_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}
