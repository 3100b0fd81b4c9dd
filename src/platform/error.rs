//! Error types for the platform API client.
//!
//! [`PlatformError`] covers the three failure scenarios the operator tools
//! hit in practice: an HTTP error status from the API, a response body that
//! does not have the expected shape, and plain network failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    /// The API returned a non-success status. The body is carried verbatim
    /// so callers can print exactly what the server said.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The response parsed as JSON but did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// Underlying network failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_body() {
        let err = PlatformError::Api {
            status: 401,
            body: "{\"errors\":[\"invalid credentials\"]}".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("401"));
        assert!(rendered.contains("invalid credentials"));
    }

    #[test]
    fn shape_error_display() {
        let err = PlatformError::Shape("missing result.fields.token".to_string());
        assert_eq!(
            err.to_string(),
            "unexpected response shape: missing result.fields.token"
        );
    }
}
