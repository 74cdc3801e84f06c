//! Error types for backend operations
//!
//! Every variant is terminal. Failed calls are logged and abandoned by the
//! caller; there is no retry machinery.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode rows: {message}")]
    Decode { message: String },
}
