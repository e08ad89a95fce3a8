// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
use std::time::Instant;

use crate::cli::args::Cli;
use crate::config::ClassifyConfig;
use crate::features::FeatureRow;
use crate::{FeatureExtractor, SceneClassifier, VERSION, error, verbose};

/// Run scene classification for a single image.
///
/// Prints exactly one line on stdout (`Indoor` or `Outdoor`). Every failure
/// prints one diagnostic line on stderr and exits with status 1.
pub fn run(args: &Cli) {
    crate::cli::logging::set_verbose(args.verbose);

    let config = ClassifyConfig::new()
        .with_model(&args.model)
        .with_extractor(&args.extractor);

    let classifier = match SceneClassifier::load(&config.model_path) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let mut extractor = match FeatureExtractor::load_with_config(&config.extractor_path, &config) {
        Ok(x) => x,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    verbose!("scene-inference {VERSION} 🚀 Rust ONNX");
    verbose!(
        "{} summary: {} feature columns, classes {:?}",
        config.model_path.display(),
        classifier.num_features(),
        classifier.classes()
    );

    let image = match image::open(&args.image) {
        Ok(img) => img,
        Err(e) => {
            error!("Failed to load image {}: {e}", args.image);
            process::exit(1);
        }
    };

    let start_extract = Instant::now();
    let features = match extractor.extract(&image) {
        Ok(f) => f,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    let extract_time = start_extract.elapsed().as_secs_f64() * 1000.0;

    let row = FeatureRow::new(features);

    let start_predict = Instant::now();
    let scene = match classifier.predict(&row) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    let predict_time = start_predict.elapsed().as_secs_f64() * 1000.0;

    verbose!(
        "image {}: {} features, {extract_time:.1}ms extract, {predict_time:.1}ms predict",
        args.image,
        row.len()
    );

    println!("{scene}");
}
