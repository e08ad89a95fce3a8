// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the scene classification library.

use std::fmt;

/// Result type alias for classification operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Main error type for the scene classification library.
#[derive(Debug)]
pub enum ClassifyError {
    /// Error loading the classifier artifact.
    ModelLoadError(String),
    /// Error loading or running the frame-feature extractor.
    ExtractorError(String),
    /// Error decoding or processing images.
    ImageError(String),
    /// Feature row width does not match the classifier's expected width.
    SchemaError(String),
    /// The classifier produced a class id outside its two-valued contract.
    PredictionError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoadError(msg) => write!(f, "Model load error: {msg}"),
            Self::ExtractorError(msg) => write!(f, "Extractor error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::SchemaError(msg) => write!(f, "Schema error: {msg}"),
            Self::PredictionError(msg) => write!(f, "Prediction error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClassifyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for ClassifyError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClassifyError::ModelLoadError("test".to_string());
        assert_eq!(err.to_string(), "Model load error: test");

        let err = ClassifyError::SchemaError("test".to_string());
        assert_eq!(err.to_string(), "Schema error: test");
    }

    #[test]
    fn test_io_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ClassifyError::from(io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(matches!(err, ClassifyError::Io(_)));
    }
}
