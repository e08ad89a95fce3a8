// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Classification configuration.
//!
//! This module defines the [`ClassifyConfig`] struct, which carries the paths
//! to the two external collaborators (the classifier artifact and the
//! frame-feature extractor) plus the extractor execution options. Both paths
//! are injected here rather than hard-coded at the call sites.

use std::path::{Path, PathBuf};

/// Default classifier artifact path, relative to the working directory.
pub const DEFAULT_MODEL: &str = "model.bin";

/// Default frame-feature extractor path, relative to the working directory.
pub const DEFAULT_EXTRACTOR: &str = "rgb_features.onnx";

/// Default extractor input size as (height, width).
///
/// Matches the Inception-style frame-feature extractors the classifier
/// artifacts are trained against.
pub const DEFAULT_INPUT_SIZE: (usize, usize) = (299, 299);

/// Configuration for a classification run.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use scene_inference::ClassifyConfig;
///
/// let config = ClassifyConfig::new()
///     .with_model("runs/train3/model.bin")
///     .with_extractor("rgb_features.onnx")
///     .with_threads(2);
/// ```
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Path to the serialized classifier artifact.
    pub model_path: PathBuf,
    /// Path to the frame-feature extractor ONNX model.
    pub extractor_path: PathBuf,
    /// Extractor input size as (height, width).
    pub input_size: (usize, usize),
    /// Number of intra-op threads for ONNX Runtime.
    /// Setting this to `0` allows ONNX Runtime to choose the optimal number.
    pub num_threads: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL),
            extractor_path: PathBuf::from(DEFAULT_EXTRACTOR),
            input_size: DEFAULT_INPUT_SIZE,
            num_threads: 0,
        }
    }
}

impl ClassifyConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classifier artifact path.
    #[must_use]
    pub fn with_model<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.model_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the frame-feature extractor path.
    #[must_use]
    pub fn with_extractor<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.extractor_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the extractor input size.
    ///
    /// # Arguments
    ///
    /// * `height` - The extractor input height.
    /// * `width` - The extractor input width.
    #[must_use]
    pub const fn with_input_size(mut self, height: usize, width: usize) -> Self {
        self.input_size = (height, width);
        self
    }

    /// Set the number of intra-op threads for the extractor session.
    ///
    /// Set to `0` for auto-configuration.
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }
}
