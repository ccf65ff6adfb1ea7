// File: crates/atlas-cli/src/main.rs
// Summary: `atlas` command: render a TOML scene to PNG, or probe the tooltip under a pointer position.

mod logger;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atlas_core::{HoverLayer, Scene, Viewport};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Render CSV and GeoJSON charts described by TOML scenes", long_about = None)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to PNG
    Render {
        /// Scene file; data paths inside it are relative to its directory
        scene: PathBuf,
        /// Output PNG (defaults to the scene path with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the tooltip under a pointer position and optionally save the composited frame
    Hover {
        scene: PathBuf,
        /// Pointer x in pixels from the left edge
        #[arg(long)]
        x: f64,
        /// Pointer y in pixels from the top edge
        #[arg(long)]
        y: f64,
        /// Write the frame with the tooltip drawn on it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load(scene_path: &Path) -> Result<(Viewport, HoverLayer)> {
    let scene = Scene::from_path(scene_path)
        .with_context(|| format!("failed to read scene '{}'", scene_path.display()))?;
    let base = scene_path.parent().unwrap_or_else(|| Path::new("."));
    scene
        .render(base)
        .with_context(|| format!("failed to render scene '{}'", scene_path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Render { scene, output } => {
            let (mut vp, hover) = load(&scene)?;
            let out = output.unwrap_or_else(|| scene.with_extension("png"));
            vp.render_to_png(&out)
                .with_context(|| format!("failed to write '{}'", out.display()))?;
            info!(path = %out.display(), targets = hover.len(), "wrote png");
            println!("Wrote {}", out.display());
        }
        Commands::Hover { scene, x, y, output } => {
            let (mut vp, hover) = load(&scene)?;
            match hover.hover(x, y) {
                Some(tooltip) => {
                    println!("{}", tooltip.text());
                    if let Some(out) = output {
                        let bytes = vp.render_with_tooltip_png(&tooltip)?;
                        if let Some(parent) = out.parent() {
                            std::fs::create_dir_all(parent)?;
                        }
                        std::fs::write(&out, bytes)
                            .with_context(|| format!("failed to write '{}'", out.display()))?;
                        println!("Wrote {}", out.display());
                    }
                }
                None => println!("nothing under ({x}, {y})"),
            }
        }
    }
    Ok(())
}
