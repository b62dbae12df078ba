use clap::Parser;
use std::path::PathBuf;

use catdog::{Classifier, EngineStatus, ImageSource};

#[derive(Parser)]
#[command(name = "catdog")]
#[command(about = "Classify an image as cat or dog with a pre-trained model")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Path to the model artifact (overrides CATDOG_MODEL)
    #[arg(long, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Resolve the model artifact path: CLI flag, then CATDOG_MODEL, then the
/// well-known default location.
fn model_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.model {
        return path.clone();
    }
    if let Ok(path) = std::env::var("CATDOG_MODEL") {
        return PathBuf::from(path);
    }
    PathBuf::from("models/catdog.rten")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let model = model_path(&args);
    if args.verbose {
        println!("Loading model: {:?}", model);
    }

    // One-time model load; a Failed engine drops every later prediction.
    let classifier = Classifier::new();
    classifier.load_model(&model).await;

    if classifier.status() != EngineStatus::Ready {
        println!("Model unavailable, no prediction.");
        return Ok(());
    }

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }
    let img = ImageSource::File(args.image_path).decode().await?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    match classifier.classify(&img)? {
        Some(prediction) => {
            if args.verbose {
                println!("Score: {:.4}", prediction.score);
            }
            println!("Resultado: {}", prediction.label);
        }
        None => println!("No prediction."),
    }

    Ok(())
}
