//! parallax - seamless space background generation from layer configs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use parallax_render::generate::Generator;
use parallax_render::png::{write_rgba, PngConfig};
use parallax_spec::load_layers;

/// Parallax - tileable space background generator
#[derive(Parser)]
#[command(name = "parallax")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Composite a layer configuration into a PNG image
    Render {
        /// Path to the layer configuration (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Output image width in pixels
        #[arg(long, default_value_t = 1920)]
        width: u32,

        /// Output image height in pixels
        #[arg(long, default_value_t = 1080)]
        height: u32,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Load and validate a layer configuration without rendering
    Validate {
        /// Path to the layer configuration (TOML)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            config,
            width,
            height,
            output,
        } => render(&config, width, height, &output),
        Commands::Validate { config } => validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn render(config: &PathBuf, width: u32, height: u32, output: &PathBuf) -> anyhow::Result<()> {
    let generator = Generator::new(config);
    let image = generator
        .full_reload(width, height)
        .with_context(|| format!("failed to render {}", config.display()))?;

    write_rgba(&image, output, &PngConfig::default())
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} {} ({}x{})",
        "wrote".green().bold(),
        output.display(),
        width,
        height
    );
    Ok(())
}

fn validate(config: &PathBuf) -> anyhow::Result<()> {
    let configs = load_layers(config)
        .with_context(|| format!("failed to load {}", config.display()))?;

    // Surface build-time validation errors (colors, octaves, thresholds)
    // without rendering a single pixel.
    for layer in &configs {
        parallax_render::layer::Layer::build(layer)?;
    }

    println!(
        "{} {} ({} layer{})",
        "ok".green().bold(),
        config.display(),
        configs.len(),
        if configs.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
