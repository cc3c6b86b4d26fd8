/// Carousel Core Library - Slide rotation and layout logic
///
/// This library provides the front-end independent part of the infinity
/// carousel: ring arithmetic over slide positions, the rotation engine, and
/// the visual attributes (offset, stacking, markers) derived from a position.

pub mod carousel;
pub mod config;
pub mod error;
pub mod layout;
pub mod markup;
pub mod ring;

// Re-export commonly used types
pub use carousel::{Carousel, Slide};
pub use config::{CarouselConfig, DEFAULT_SLIDE_WIDTH};
pub use error::{CarouselError, Result};
pub use layout::{SlideAttributes, CENTER_Z_INDEX};
pub use markup::{parse_slider, SliderMarkup};
pub use ring::Direction;
