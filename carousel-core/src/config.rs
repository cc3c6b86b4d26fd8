/// Carousel configuration
use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Width unit used when none (or zero) is configured
pub const DEFAULT_SLIDE_WIDTH: u32 = 100;

/// Container id the slider looks for when none is configured
pub const DEFAULT_CONTAINER_ID: &str = "my-slider";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Id of the element holding the slides
    pub container_id: String,
    /// Horizontal spacing between neighbouring slots
    pub slide_width: u32,
}

impl CarouselConfig {
    pub fn new(container_id: impl Into<String>, slide_width: u32) -> Self {
        Self {
            container_id: container_id.into(),
            slide_width,
        }
    }

    /// Parse a JSON config document; missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| CarouselError::config(e.to_string()))
    }

    /// Width actually used for layout; zero falls back to the default.
    pub fn effective_slide_width(&self) -> u32 {
        effective_slide_width(self.slide_width)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID, DEFAULT_SLIDE_WIDTH)
    }
}

pub(crate) fn effective_slide_width(width: u32) -> u32 {
    if width == 0 {
        DEFAULT_SLIDE_WIDTH
    } else {
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.container_id, "my-slider");
        assert_eq!(config.effective_slide_width(), 100);
    }

    #[test]
    fn test_zero_width_falls_back() {
        let config = CarouselConfig::new("deck", 0);
        assert_eq!(config.effective_slide_width(), DEFAULT_SLIDE_WIDTH);
    }

    #[test]
    fn test_from_json_partial() {
        let config = CarouselConfig::from_json(r#"{ "slideWidth": 120 }"#).unwrap();
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
        assert_eq!(config.slide_width, 120);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = CarouselConfig::from_json("{ slideWidth: ").unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
    }
}
