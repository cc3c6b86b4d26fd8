/// Infinity Carousel Terminal Demo
///
/// Shows a ring of cards with the center card on top.
/// Controls:
///   - Left/Right or h/l: Activate the card beside the center
///   - 1-9: Activate the card in that slot
///   - Mouse click: Activate the topmost card under the cursor
///   - Q/ESC: Quit
use carousel_core::{Carousel, CarouselConfig, DEFAULT_SLIDE_WIDTH};
use carousel_terminal::{RenderOptions, TerminalApp};
use clap::Parser;
use std::io;

#[derive(Debug, Parser)]
#[command(name = "carousel-terminal", about = "Infinity carousel in the terminal")]
struct Args {
    /// Number of slides to show
    #[arg(long, default_value_t = 7)]
    slides: usize,

    /// Spacing between slots, in pixels (0 uses the default)
    #[arg(long, default_value_t = DEFAULT_SLIDE_WIDTH)]
    slide_width: u32,

    /// Pixels represented by one terminal column
    #[arg(long, default_value_t = 10)]
    pixels_per_column: u32,

    /// Width of each card, in columns
    #[arg(long, default_value_t = 16)]
    card_width: usize,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CarouselConfig {
        slide_width: args.slide_width,
        ..CarouselConfig::default()
    };
    let labels = (1..=args.slides).map(|i| format!("Slide {i}"));
    let carousel = Carousel::from_config(labels, &config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let options = RenderOptions {
        pixels_per_column: args.pixels_per_column,
        card_width: args.card_width,
    };

    let mut app = TerminalApp::new(carousel, options)?;
    app.run()
}
