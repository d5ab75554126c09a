//! Error type shared by every calculator operation.

use std::path::PathBuf;

/// Errors produced by the calculator.
///
/// Every variant is recoverable: a rejected interaction is reported and the
/// previously displayed state stays as it was.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Distribution parameters violate `σ > 0` or are not finite.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A probability lies outside the quantile function's domain.
    #[error("domain error: {0}")]
    Domain(String),

    /// Configuration values are inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::InvalidParameter("σ=0".to_string());
        assert_eq!(err.to_string(), "invalid parameter: σ=0");

        let err = CalcError::Domain("p=1".to_string());
        assert_eq!(err.to_string(), "domain error: p=1");

        let err = CalcError::InvalidConfig("sample_count=1".to_string());
        assert_eq!(err.to_string(), "invalid config: sample_count=1");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<CalcError>();
        assert_sync::<CalcError>();
    }
}
