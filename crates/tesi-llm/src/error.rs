//! Error types for completion calls

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request failed: {message}")]
    Network { message: String },

    #[error("Completion endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no choices")]
    EmptyResponse,

    #[error("Malformed completion response: {message}")]
    MalformedResponse { message: String },
}
