/// Error types for carousel construction and rotation
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The center slot is undefined without slides
    #[error("carousel needs at least one slide")]
    Empty,
    #[error("position {position} is outside the carousel (0..{len})")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("invalid carousel configuration: {0}")]
    Config(String),
    #[error("invalid slider markup: {0}")]
    Markup(String),
}

impl CarouselError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }
}

/// Carousel operation result type
pub type Result<T> = std::result::Result<T, CarouselError>;
