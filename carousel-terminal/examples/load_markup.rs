/// Example: Load a slider fragment and show it in the terminal
///
/// Usage: cargo run --example load_markup -- path/to/slider.html [--id my-slider]
use carousel_core::markup::{find_slider, parse_slider};
use carousel_core::CarouselConfig;
use carousel_terminal::{RenderOptions, TerminalApp};
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Args {
    /// File holding the slider container and its <li> slides
    path: PathBuf,

    /// Require the container to carry this id
    #[arg(long)]
    id: Option<String>,

    /// Optional JSON config ({"containerId": ..., "slideWidth": ...})
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CarouselConfig::from_json(&fs::read_to_string(path)?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?,
        None => CarouselConfig::default(),
    };

    let source = fs::read_to_string(&args.path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read slider markup: {}", e),
        )
    })?;

    let markup = match &args.id {
        Some(id) => find_slider(&source, id),
        None => parse_slider(&source),
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    println!("Loaded {} slides", markup.slides.len());

    let carousel = markup
        .into_carousel(config.slide_width)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let mut app = TerminalApp::new(carousel, RenderOptions::default())?;
    app.run()
}
