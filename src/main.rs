// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use scene_inference::cli::args::Cli;
use scene_inference::cli::classify;

fn main() {
    // clap prints usage to stderr and exits with status 2 on argument errors.
    let args = Cli::parse();
    classify::run(&args);
}
