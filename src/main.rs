use std::{fs, io, path::Path, process};

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridworld_svg::{
    config::RenderOptions,
    engine::{
        board::{Board, Classifier},
        source::GridworldSource,
        Engine,
    },
    preview,
    renderer::Renderer,
    SceneError,
};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const COMPILE_USAGE: &str = "gridworld compile <scene.json> <output.svg>";
const PREVIEW_USAGE: &str = "gridworld preview <scene.json>";
const DEMO_USAGE: &str = "gridworld demo <output.svg>";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let options = RenderOptions::load();

    match args.next().as_deref() {
        Some("compile") => {
            let source_path = args.next().context(COMPILE_USAGE)?;
            let output_path = args.next().context(COMPILE_USAGE)?;
            let source = load_source(&source_path)?;
            write_svg(&source, &output_path, &options)
        }
        Some("preview") => {
            let path = args.next().context(PREVIEW_USAGE)?;
            let source = load_source(&path)?;
            show_preview(&source, &options)
        }
        Some("demo") => {
            let output_path = args.next().context(DEMO_USAGE)?;
            write_svg(&GridworldSource::demo(), &output_path, &options)
        }
        _ => bail!(
            "Gridworld SVG — render terrain grids and agent routes\n\nUsage:\n  {COMPILE_USAGE}\n  {PREVIEW_USAGE}\n  {DEMO_USAGE}"
        ),
    }
}

fn load_source(path: &str) -> Result<GridworldSource> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {path}"))
}

fn write_svg(source: &GridworldSource, output_path: &str, options: &RenderOptions) -> Result<()> {
    let doc = Engine::compile(source).context("Failed to compose scene")?;
    Renderer::save(&doc, Path::new(output_path), options.pretty)?;

    info!(
        size = source.size,
        shapes = doc.shapes.len(),
        "rendered {output_path}"
    );
    Ok(())
}

fn show_preview(source: &GridworldSource, options: &RenderOptions) -> Result<()> {
    if source.size == 0 {
        return Err(SceneError::InvalidGridSize { size: 0 }.into());
    }
    let classifier = source.terrain.as_ref().map(|t| t as &dyn Classifier);
    let board = Board::new(source.size, classifier);
    let agent = source.moves.as_deref().map(|moves| (source.init_pos, moves));
    let mut stdout = io::stdout();
    preview::print_board(&mut stdout, &board, agent, options.preview_cell_width)
}
