// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Classifier artifact loading and prediction.
//!
//! This module provides the [`SceneClassifier`] struct for loading a
//! pre-trained binary classifier artifact from disk and predicting a
//! [`Scene`] label for a feature row. Training happens offline; this crate
//! only consumes the serialized result.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, Result};
use crate::features::FeatureRow;
use crate::scene::Scene;

/// Pre-trained binary scene classifier.
///
/// The artifact is a linear model over the feature row: per-column
/// coefficients, an intercept, and the two class ids recorded at training
/// time (`classes[0]` for a non-positive decision, `classes[1]` for a
/// positive one).
///
/// # Example
///
/// ```no_run
/// use scene_inference::{FeatureRow, SceneClassifier};
///
/// let classifier = SceneClassifier::load("model.bin")?;
/// let row = FeatureRow::from(vec![0.0; classifier.num_features()]);
/// let scene = classifier.predict(&row)?;
/// println!("{scene}");
/// # Ok::<(), scene_inference::ClassifyError>(())
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct SceneClassifier {
    /// Per-column weights, one per feature row column.
    coefficients: Vec<f32>,
    /// Decision function intercept.
    intercept: f32,
    /// Class ids as stored at training time: [negative, positive].
    classes: [i64; 2],
}

impl SceneClassifier {
    /// Create a classifier from trained parameters.
    ///
    /// Intended for the offline trainer that produces artifacts; inference
    /// callers should use [`SceneClassifier::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if `coefficients` is empty or the two class ids are
    /// not distinct.
    pub fn new(coefficients: Vec<f32>, intercept: f32, classes: [i64; 2]) -> Result<Self> {
        let classifier = Self { coefficients, intercept, classes };
        classifier.validate()?;
        Ok(classifier)
    }

    /// Load a classifier artifact from disk.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the serialized artifact.
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` if the file is missing, unreadable,
    /// corrupted, or fails the artifact sanity checks.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ClassifyError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).map_err(|e| {
            ClassifyError::ModelLoadError(format!("Failed to read {}: {e}", path.display()))
        })?;

        let classifier: Self = bincode::deserialize(&bytes).map_err(|e| {
            ClassifyError::ModelLoadError(format!(
                "Failed to deserialize {}: {e}",
                path.display()
            ))
        })?;

        classifier.validate()?;
        Ok(classifier)
    }

    /// Serialize the classifier to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = bincode::serialize(self).map_err(|e| {
            ClassifyError::ModelLoadError(format!("Failed to serialize model: {e}"))
        })?;
        fs::write(path, bytes)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(ClassifyError::ModelLoadError(
                "Artifact has no coefficients".to_string(),
            ));
        }
        if self.classes[0] == self.classes[1] {
            return Err(ClassifyError::ModelLoadError(format!(
                "Artifact classes must be distinct, got [{}, {}]",
                self.classes[0], self.classes[1]
            )));
        }
        Ok(())
    }

    /// Number of feature columns the classifier was trained on.
    #[must_use]
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    /// The two class ids recorded at training time.
    #[must_use]
    pub const fn classes(&self) -> [i64; 2] {
        self.classes
    }

    /// Evaluate the linear decision function for a feature row.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the row width does not match
    /// [`SceneClassifier::num_features`].
    pub fn decision_function(&self, row: &FeatureRow) -> Result<f32> {
        if row.len() != self.coefficients.len() {
            return Err(ClassifyError::SchemaError(format!(
                "feature row has {} columns, model expects {}",
                row.len(),
                self.coefficients.len()
            )));
        }

        let mut z = self.intercept;
        for (&w, &x) in self.coefficients.iter().zip(row.values()) {
            z += w * x;
        }
        Ok(z)
    }

    /// Predict the scene label for a feature row.
    ///
    /// A positive decision selects `classes[1]`, otherwise `classes[0]`;
    /// the selected id must map to a [`Scene`] or the prediction fails.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` on a row width mismatch and `PredictionError`
    /// if the artifact's class id falls outside the two-valued contract.
    pub fn predict(&self, row: &FeatureRow) -> Result<Scene> {
        let decision = self.decision_function(row)?;
        let raw = if decision > 0.0 { self.classes[1] } else { self.classes[0] };
        Scene::from_class_id(raw)
    }
}

impl std::fmt::Debug for SceneClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneClassifier")
            .field("num_features", &self.num_features())
            .field("intercept", &self.intercept)
            .field("classes", &self.classes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_classifier() -> SceneClassifier {
        // Decision is positive iff the first feature outweighs the second.
        SceneClassifier::new(vec![1.0, -1.0], 0.0, [0, 1]).unwrap()
    }

    #[test]
    fn test_model_not_found() {
        let result = SceneClassifier::load("nonexistent.bin");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClassifyError::ModelLoadError(_)));
    }

    #[test]
    fn test_predict_both_labels() {
        let classifier = toy_classifier();

        let indoor = classifier.predict(&FeatureRow::from(vec![2.0, 1.0])).unwrap();
        assert_eq!(indoor, Scene::Indoor);

        let outdoor = classifier.predict(&FeatureRow::from(vec![1.0, 2.0])).unwrap();
        assert_eq!(outdoor, Scene::Outdoor);
    }

    #[test]
    fn test_predict_rejects_width_mismatch() {
        let classifier = toy_classifier();
        let err = classifier.predict(&FeatureRow::from(vec![1.0])).unwrap_err();
        assert!(matches!(err, ClassifyError::SchemaError(_)));
    }

    #[test]
    fn test_predict_rejects_unknown_class_id() {
        // A valid artifact whose positive class id is outside {0, 1}.
        let classifier = SceneClassifier::new(vec![1.0], 0.0, [0, 7]).unwrap();
        let err = classifier.predict(&FeatureRow::from(vec![1.0])).unwrap_err();
        assert!(matches!(err, ClassifyError::PredictionError(_)));
    }

    #[test]
    fn test_new_rejects_empty_coefficients() {
        let err = SceneClassifier::new(Vec::new(), 0.0, [0, 1]).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelLoadError(_)));
    }

    #[test]
    fn test_new_rejects_duplicate_classes() {
        let err = SceneClassifier::new(vec![1.0], 0.0, [1, 1]).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelLoadError(_)));
    }

    #[test]
    fn test_decision_function() {
        let classifier = SceneClassifier::new(vec![0.5, 0.5], -1.0, [0, 1]).unwrap();
        let z = classifier.decision_function(&FeatureRow::from(vec![1.0, 1.0])).unwrap();
        assert!(z.abs() < f32::EPSILON);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let classifier = toy_classifier();
        let path = std::env::temp_dir().join("scene-inference-test-roundtrip.bin");
        classifier.save(&path).unwrap();

        let loaded = SceneClassifier::load(&path).unwrap();
        assert_eq!(loaded.num_features(), classifier.num_features());
        assert_eq!(loaded.classes(), classifier.classes());

        let row = FeatureRow::from(vec![2.0, 1.0]);
        assert_eq!(loaded.predict(&row).unwrap(), classifier.predict(&row).unwrap());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_corrupted_artifact() {
        let path = std::env::temp_dir().join("scene-inference-test-corrupted.bin");
        std::fs::write(&path, b"not a model artifact").unwrap();

        let result = SceneClassifier::load(&path);
        assert!(matches!(result.unwrap_err(), ClassifyError::ModelLoadError(_)));

        std::fs::remove_file(&path).ok();
    }
}
