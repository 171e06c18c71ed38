//! Error types for document composition and serving.
//!
//! Rendering is deterministic, so none of these errors are retried: they are
//! surfaced once to the immediate caller.

/// Result type alias for promo_pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or serving a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The drawing primitive failed to produce a complete document
    #[error("Render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value or file
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP server failure (bind or accept loop)
    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Whether this error came from document rendering.
    pub fn is_render(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error() {
        let err = Error::Render("unbalanced graphics state".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Render error"));
        assert!(msg.contains("unbalanced graphics state"));
        assert!(err.is_render());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_render());
    }

    #[test]
    fn test_json_error_becomes_config() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
