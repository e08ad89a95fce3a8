// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Scene Inference Library
//!
//! Indoor/Outdoor classification for still images, written in Rust. The
//! crate loads a pre-trained binary classifier artifact from disk, extracts
//! a fixed-size visual feature vector from the input image with an external
//! ONNX frame-feature extractor, reshapes that vector into the single-row
//! tabular format the classifier expects, and produces one of two labels.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use scene_inference::{FeatureExtractor, FeatureRow, SceneClassifier};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = SceneClassifier::load("model.bin")?;
//!     let mut extractor = FeatureExtractor::load("rgb_features.onnx")?;
//!
//!     let image = image::open("living_room.jpg")?;
//!     let features = extractor.extract(&image)?;
//!     let row = FeatureRow::new(features);
//!
//!     let scene = classifier.predict(&row)?;
//!     println!("{scene}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Classify an image (prints exactly one line: Indoor or Outdoor)
//! scene-inference living_room.jpg
//!
//! # With explicit artifact and extractor paths
//! scene-inference beach.png --model runs/train3/model.bin --extractor rgb_features.onnx
//!
//! # With stage timings and model summary on stderr
//! scene-inference hallway.jpg --verbose
//! ```
//!
//! The CLI exits with status 2 on argument errors (usage goes to stderr),
//! status 1 on runtime failures (missing image, corrupted artifact,
//! extractor errors), and status 0 on success. stdout carries only the
//! predicted label.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classifier`] | [`SceneClassifier`] for loading the artifact and predicting labels |
//! | [`extractor`] | [`FeatureExtractor`] wrapping the ONNX frame-feature model |
//! | [`features`] | [`FeatureRow`] single-row tabular structure with the `rgb{i}` schema |
//! | [`scene`] | [`Scene`] label type with the checked class-id mapping |
//! | [`config`] | [`ClassifyConfig`] for injecting artifact/extractor paths |
//! | [`preprocessing`] | Image-to-tensor conversion for the extractor |
//! | [`error`] | Error types ([`ClassifyError`], [`Result`]) |
//!
//! ## License
//!
//! This project is licensed under AGPL-3.0.

// Modules
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod features;
pub mod preprocessing;
pub mod scene;

// Re-export main types for convenience
pub use classifier::SceneClassifier;
pub use config::ClassifyConfig;
pub use error::{ClassifyError, Result};
pub use extractor::FeatureExtractor;
pub use features::{FeatureRow, column_name};
pub use scene::Scene;

// Re-export preprocessing utilities
pub use preprocessing::preprocess_image;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
