// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use crate::config::{DEFAULT_EXTRACTOR, DEFAULT_MODEL};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about = "Classify a still image as Indoor or Outdoor", long_about = None)]
#[command(after_help = r#"Output:
    Exactly one line on stdout: Indoor or Outdoor.

Examples:
    scene-inference living_room.jpg
    scene-inference beach.png --model runs/train3/model.bin
    scene-inference hallway.jpg --extractor rgb_features.onnx --verbose"#)]
pub struct Cli {
    /// Path to the image that you want to classify
    #[arg(value_name = "image")]
    pub image: String,

    /// Path to the trained classifier artifact
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Path to the frame-feature extractor ONNX model
    #[arg(short, long, default_value = DEFAULT_EXTRACTOR)]
    pub extractor: String,

    /// Show verbose output on stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Cli::parse_from(["app", "kitchen.jpg"]);
        assert_eq!(args.image, "kitchen.jpg");
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.extractor, DEFAULT_EXTRACTOR);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_custom() {
        let args = Cli::parse_from([
            "app",
            "park.png",
            "--model",
            "custom.bin",
            "--extractor",
            "features.onnx",
            "--verbose",
        ]);
        assert_eq!(args.image, "park.png");
        assert_eq!(args.model, "custom.bin");
        assert_eq!(args.extractor, "features.onnx");
        assert!(args.verbose);
    }

    #[test]
    fn test_args_missing_image_is_an_error() {
        assert!(Cli::try_parse_from(["app"]).is_err());
    }

    #[test]
    fn test_args_extra_positional_is_an_error() {
        assert!(Cli::try_parse_from(["app", "one.jpg", "two.jpg"]).is_err());
    }
}
