// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Scene label definitions.
//!
//! This module defines the two-valued prediction label produced by the
//! classifier, along with the checked mapping from raw class ids.

use std::fmt;
use std::str::FromStr;

use crate::error::{ClassifyError, Result};

/// Class id the classifier assigns to indoor scenes.
pub const INDOOR_CLASS_ID: i64 = 1;

/// Class id the classifier assigns to outdoor scenes.
pub const OUTDOOR_CLASS_ID: i64 = 0;

/// Predicted scene label.
///
/// The classifier is a binary model: every prediction is one of these two
/// variants. Raw class ids outside `{0, 1}` are rejected rather than
/// silently folded into a default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// The image depicts an indoor scene.
    Indoor,
    /// The image depicts an outdoor scene.
    Outdoor,
}

impl Scene {
    /// Returns the label string printed on stdout.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Indoor => "Indoor",
            Self::Outdoor => "Outdoor",
        }
    }

    /// Returns the class id the classifier stores for this label.
    #[must_use]
    pub const fn class_id(&self) -> i64 {
        match self {
            Self::Indoor => INDOOR_CLASS_ID,
            Self::Outdoor => OUTDOOR_CLASS_ID,
        }
    }

    /// Map a raw class id from the classifier to a scene label.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::PredictionError` for any id outside `{0, 1}`.
    pub fn from_class_id(id: i64) -> Result<Self> {
        match id {
            INDOOR_CLASS_ID => Ok(Self::Indoor),
            OUTDOOR_CLASS_ID => Ok(Self::Outdoor),
            other => Err(ClassifyError::PredictionError(format!(
                "unexpected class id {other}, expected 0 (Outdoor) or 1 (Indoor)"
            ))),
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scene {
    type Err = SceneParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "indoor" => Ok(Self::Indoor),
            "outdoor" => Ok(Self::Outdoor),
            _ => Err(SceneParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid scene label string.
#[derive(Debug, Clone)]
pub struct SceneParseError(String);

impl fmt::Display for SceneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid scene '{}', expected one of: indoor, outdoor", self.0)
    }
}

impl std::error::Error for SceneParseError {}
