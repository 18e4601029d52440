use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use layer_dither::bitmap::save_plane;
use layer_dither::LayerPlane;
use layerstack::models::AppConfig;
use layerstack::services::{run_restore, run_split};

#[derive(Parser)]
#[command(name = "layerstack")]
#[command(about = "Split grayscale images into stackable 1-bit BMP layers and restore them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML config file (falls back to CONFIG_FILE, then defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory with the numbered source images
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Directory for the numbered layer files
    #[arg(long, global = true)]
    layers: Option<PathBuf>,

    /// Directory for restored images
    #[arg(long, global = true)]
    restored: Option<PathBuf>,

    /// Number of source images (numbered from 1)
    #[arg(short = 'n', long, global = true)]
    count: Option<u32>,

    /// Base seed for the layer draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Blur passes applied to restored images
    #[arg(long, global = true)]
    smooth: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split source images into layer files
    Split {
        /// Use only the deterministic part of each level
        #[arg(long)]
        deterministic: bool,

        /// Keep going after a failed image
        #[arg(long)]
        keep_going: bool,
    },
    /// Restore grayscale images from layer files
    Restore {
        /// Keep going after a failed image
        #[arg(long)]
        keep_going: bool,
    },
    /// Write a test layer: left half transparent, right half opaque
    Pattern {
        /// Output BMP file path
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, default_value_t = 500)]
        width: usize,

        #[arg(long, default_value_t = 500)]
        height: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layerstack=info,layer_dither=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli);

    match cli.command {
        Commands::Split {
            deterministic,
            keep_going,
        } => {
            if deterministic {
                config.stochastic = false;
            }
            config.continue_on_error |= keep_going;
            let report = run_split(&config)?;
            println!(
                "Split {} images ({} skipped, {} failed) into {}",
                report.processed,
                report.skipped,
                report.failed,
                config.layers_dir.display()
            );
        }
        Commands::Restore { keep_going } => {
            config.continue_on_error |= keep_going;
            let report = run_restore(&config)?;
            println!(
                "Restored {} images ({} skipped, {} failed) into {}",
                report.processed,
                report.skipped,
                report.failed,
                config.restored_dir.display()
            );
        }
        Commands::Pattern {
            output,
            width,
            height,
        } => {
            let plane = LayerPlane::half_split(width, height);
            save_plane(&plane, &output)?;
            println!("Wrote {}x{} pattern to {}", width, height, output.display());
        }
    }

    Ok(())
}

/// Config file from `--config` or `CONFIG_FILE`, then command-line overrides.
fn load_config(cli: &Cli) -> AppConfig {
    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let mut config = AppConfig::load(config_file.as_deref());

    if let Some(dir) = &cli.input {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = &cli.layers {
        config.layers_dir = dir.clone();
    }
    if let Some(dir) = &cli.restored {
        config.restored_dir = dir.clone();
    }
    if let Some(count) = cli.count {
        config.image_count = count;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(passes) = cli.smooth {
        config.smooth_passes = passes;
    }
    config
}
