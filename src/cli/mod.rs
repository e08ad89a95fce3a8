// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running classification.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the classification command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Classification logic.
pub mod classify;

/// Verbosity flag and diagnostic macros.
pub mod logging;
