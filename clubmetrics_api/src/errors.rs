//! Error types for the API client.

/// Errors that can occur when fetching the analytics document.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The endpoint returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response arrived but was not a valid analytics document.
    #[error("Malformed response body")]
    ParseFailed,
}
