//! Cache error types

use thiserror::Error;

/// Boxed error used as the source of backend failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during cache operations
///
/// Callers are expected to branch on [`CacheError::KeyNotFound`] for
/// cache-miss handling and treat every other variant as an
/// infrastructure fault.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Construction-time configuration problem (e.g. empty namespace)
    #[error("Invalid cache configuration: {0}")]
    InvalidConfiguration(String),

    /// Get against a key the store does not hold; carries the
    /// fully-qualified key that was queried
    #[error("Key does not exist: {0}")]
    KeyNotFound(String),

    /// Any other store-level failure, wrapping the underlying cause
    #[error("Cache backend error: {source}")]
    Backend {
        #[source]
        source: BoxError,
    },

    /// Cache operation timed out or was cancelled mid-call
    #[error("Cache operation timed out: {0}")]
    Timeout(String),
}

impl CacheError {
    /// Wrap an underlying store failure as a backend error
    pub fn backend(source: impl Into<BoxError>) -> Self {
        Self::Backend {
            source: source.into(),
        }
    }

    /// True when this error represents a cache miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_matchable() {
        let err = CacheError::KeyNotFound("svc:missing".to_string());
        assert!(err.is_not_found());
        assert!(!CacheError::InvalidConfiguration("x".to_string()).is_not_found());
    }

    #[test]
    fn test_backend_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = CacheError::backend(io);
        let source = std::error::Error::source(&err).expect("backend error has a source");
        assert!(source.to_string().contains("refused"));
    }

    #[test]
    fn test_display_includes_key() {
        let err = CacheError::KeyNotFound("svc:user_42".to_string());
        assert!(err.to_string().contains("svc:user_42"));
    }
}
