// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame-feature extraction.
//!
//! This module provides the [`FeatureExtractor`] struct wrapping an ONNX
//! Runtime session for the external frame-feature model. The extractor is an
//! opaque collaborator: an image tensor goes in, a fixed-length feature
//! vector comes out, and the vector length is defined entirely by the model.

use std::path::Path;

use image::DynamicImage;
use ndarray::{Array1, Array4};
use ort::session::Session;
use ort::value::TensorRef;

use crate::config::ClassifyConfig;
use crate::error::{ClassifyError, Result};
use crate::preprocessing::preprocess_image;

/// Frame-feature extractor backed by an ONNX Runtime session.
///
/// # Example
///
/// ```no_run
/// use scene_inference::FeatureExtractor;
///
/// let mut extractor = FeatureExtractor::load("rgb_features.onnx")?;
/// let image = image::open("living_room.jpg").unwrap();
/// let features = extractor.extract(&image)?;
/// println!("{} features", features.len());
/// # Ok::<(), scene_inference::ClassifyError>(())
/// ```
pub struct FeatureExtractor {
    /// ONNX Runtime session.
    session: Session,
    /// Input tensor name.
    input_name: String,
    /// Output tensor name.
    output_name: String,
    /// Expected input size as (height, width).
    input_size: (usize, usize),
}

impl FeatureExtractor {
    /// Load a frame-feature extractor from an ONNX file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or can't be loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_config(path, &ClassifyConfig::default())
    }

    /// Load a frame-feature extractor with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    /// * `config` - Configuration carrying input size and thread count.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or can't be loaded.
    pub fn load_with_config<P: AsRef<Path>>(path: P, config: &ClassifyConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ClassifyError::ExtractorError(format!(
                "Extractor file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                ClassifyError::ExtractorError(format!("Failed to create session builder: {e}"))
            })?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
            .map_err(|e| {
                ClassifyError::ExtractorError(format!("Failed to set optimization level: {e}"))
            })?
            .with_intra_threads(config.num_threads)
            .map_err(|e| {
                ClassifyError::ExtractorError(format!("Failed to set intra-thread count: {e}"))
            })?
            .commit_from_file(path)
            .map_err(|e| ClassifyError::ExtractorError(format!("Failed to load extractor: {e}")))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "image".to_string());

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| {
                ClassifyError::ExtractorError("Extractor model has no outputs".to_string())
            })?;

        Ok(Self {
            session,
            input_name,
            output_name,
            input_size: config.input_size,
        })
    }

    /// Extract a feature vector from a decoded image.
    ///
    /// The image is preprocessed to the extractor's fixed input size and fed
    /// through the session; the output tensor is flattened in order.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError` if inference fails or the model produces an
    /// empty output.
    pub fn extract(&mut self, image: &DynamicImage) -> Result<Array1<f32>> {
        let tensor = preprocess_image(image, self.input_size);
        let features = self.run_session(&tensor)?;

        if features.is_empty() {
            return Err(ClassifyError::ExtractorError(
                "Extractor produced an empty feature vector".to_string(),
            ));
        }

        Ok(Array1::from_vec(features))
    }

    /// Run the ONNX session on a preprocessed tensor.
    fn run_session(&mut self, input: &Array4<f32>) -> Result<Vec<f32>> {
        // Ensure input is contiguous in memory (CowArray)
        let input_contiguous = input.as_standard_layout();

        let input_tensor = TensorRef::from_array_view(&input_contiguous).map_err(|e| {
            ClassifyError::ExtractorError(format!("Failed to create input tensor: {e}"))
        })?;

        let inputs = ort::inputs![&self.input_name => input_tensor];

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| ClassifyError::ExtractorError(format!("Extraction failed: {e}")))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            ClassifyError::ExtractorError(format!("Output '{}' not found", self.output_name))
        })?;

        let (_, data) = output.try_extract_tensor::<f32>().map_err(|e| {
            ClassifyError::ExtractorError(format!("Failed to extract output: {e}"))
        })?;

        Ok(data.to_vec())
    }

    /// The extractor's expected input size as (height, width).
    #[must_use]
    pub const fn input_size(&self) -> (usize, usize) {
        self.input_size
    }
}

impl std::fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("input_size", &self.input_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_not_found() {
        let result = FeatureExtractor::load("nonexistent.onnx");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClassifyError::ExtractorError(_)));
    }
}
