/// Slide records and the rotation engine that owns them
use log::{debug, trace};

use crate::config::{effective_slide_width, CarouselConfig};
use crate::error::{CarouselError, Result};
use crate::layout::SlideAttributes;
use crate::ring::{self, Direction};

/// One carousel item: a fixed identity, a movable position, and the
/// caller's payload for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<T> {
    index: usize,
    position: usize,
    pub item: T,
}

impl<T> Slide<T> {
    /// Original document order; never changes.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current ordinal slot.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// A fixed ring of slides with one of them at the center slot
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    slides: Vec<Slide<T>>,
    center: usize,
    slide_width: u32,
}

impl<T> Carousel<T> {
    /// Place every item at the slot matching its original order.
    ///
    /// A zero `slide_width` uses the default width.
    pub fn new(items: impl IntoIterator<Item = T>, slide_width: u32) -> Result<Self> {
        let slides: Vec<Slide<T>> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Slide {
                index,
                position: index,
                item,
            })
            .collect();

        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }

        let center = ring::center_position(slides.len());
        debug!(
            "carousel initialized with {} slides, center slot {}",
            slides.len(),
            center
        );

        Ok(Self {
            slides,
            center,
            slide_width: effective_slide_width(slide_width),
        })
    }

    pub fn from_config(items: impl IntoIterator<Item = T>, config: &CarouselConfig) -> Result<Self> {
        Self::new(items, config.slide_width)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; construction rejects empty carousels.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn center_position(&self) -> usize {
        self.center
    }

    pub fn slide_width(&self) -> u32 {
        self.slide_width
    }

    /// Slides in identity order.
    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    /// Position of every slide, indexed by identity.
    pub fn positions(&self) -> Vec<usize> {
        self.slides.iter().map(|s| s.position).collect()
    }

    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.slides.get(index).map(|s| s.position)
    }

    /// The slide currently occupying `position`.
    pub fn slide_at(&self, position: usize) -> Option<&Slide<T>> {
        self.slides.iter().find(|s| s.position == position)
    }

    pub fn center_slide(&self) -> &Slide<T> {
        // every slot is occupied, so the center always has a slide
        self.slide_at(self.center)
            .unwrap_or_else(|| unreachable!("center slot {} is empty", self.center))
    }

    /// Visual attributes of every slide, in identity order.
    pub fn layout(&self) -> Vec<SlideAttributes> {
        self.slides
            .iter()
            .map(|s| self.attributes_of(s))
            .collect()
    }

    pub fn attributes_of(&self, slide: &Slide<T>) -> SlideAttributes {
        SlideAttributes::compute(
            slide.index,
            slide.position,
            self.center,
            self.slides.len(),
            self.slide_width,
        )
    }

    /// Rotate the ring one step because the slide at `activated` was chosen.
    ///
    /// Returns the direction every slide moved, or `None` when the center
    /// slide was activated and nothing changed.
    pub fn rotate(&mut self, activated: usize) -> Result<Option<Direction>> {
        let n = self.slides.len();
        if activated >= n {
            return Err(CarouselError::PositionOutOfRange {
                position: activated,
                len: n,
            });
        }

        let Some(direction) = ring::direction_for(activated, self.center) else {
            trace!("center slide activated, nothing to rotate");
            return Ok(None);
        };

        for slide in &mut self.slides {
            slide.position = ring::shift(slide.position, direction, n);
        }
        debug!(
            "activated position {} rotated {:?}; center now holds slide {}",
            activated,
            direction,
            self.center_slide().index
        );

        Ok(Some(direction))
    }

    /// Non-mutating form of [`Carousel::rotate`]: returns the rotated
    /// carousel and leaves `self` as it was, also on error.
    pub fn rotated(&self, activated: usize) -> Result<Self>
    where
        T: Clone,
    {
        let mut next = self.clone();
        next.rotate(activated)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CENTER_Z_INDEX;

    fn seven() -> Carousel<char> {
        Carousel::new("ABCDEFG".chars(), 100).unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let carousel = seven();
        assert_eq!(carousel.center_position(), 3);
        assert_eq!(carousel.positions(), vec![0, 1, 2, 3, 4, 5, 6]);

        let layout = carousel.layout();
        let offsets: Vec<u64> = layout.iter().map(|a| a.pixel_offset).collect();
        let z: Vec<u64> = layout.iter().map(|a| a.z_index).collect();
        assert_eq!(offsets, vec![100, 200, 300, 400, 500, 600, 700]);
        assert_eq!(z, vec![1, 2, 3, CENTER_Z_INDEX, 4, 3, 2]);
        assert_eq!(layout.iter().filter(|a| a.is_center).count(), 1);
        assert!(layout[2].is_left_of_center);
        assert!(layout[4].is_right_of_center);
        assert_eq!(carousel.center_slide().item, 'D');
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = Carousel::<u8>::new(Vec::new(), 100).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn test_zero_width_uses_default() {
        let carousel = Carousel::new([1, 2, 3], 0).unwrap();
        assert_eq!(carousel.slide_width(), 100);
    }

    #[test]
    fn test_click_right_of_center_shifts_left() {
        let mut carousel = seven();
        assert_eq!(carousel.rotate(5).unwrap(), Some(Direction::Left));
        assert_eq!(carousel.positions(), vec![6, 0, 1, 2, 3, 4, 5]);
        assert_eq!(carousel.center_slide().item, 'E');
    }

    #[test]
    fn test_click_left_of_center_shifts_right() {
        let mut carousel = seven();
        assert_eq!(carousel.rotate(1).unwrap(), Some(Direction::Right));
        assert_eq!(carousel.positions(), vec![1, 2, 3, 4, 5, 6, 0]);
        assert_eq!(carousel.center_slide().item, 'C');
    }

    #[test]
    fn test_click_center_is_noop() {
        let mut carousel = seven();
        assert_eq!(carousel.rotate(3).unwrap(), None);
        assert_eq!(carousel.positions(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut carousel = seven();
        let err = carousel.rotate(7).unwrap_err();
        assert_eq!(err, CarouselError::PositionOutOfRange { position: 7, len: 7 });
        assert_eq!(carousel.positions(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rotated_leaves_original() {
        let original = seven();
        let carousel = original.rotated(0).unwrap();
        assert_eq!(carousel.slide_at(3).map(|s| s.item), Some('C'));
        assert_eq!(carousel.position_of(6), Some(0));
        assert_eq!(original.positions(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rotated_out_of_range_keeps_carousel() {
        let original = seven().rotated(5).unwrap();
        let err = original.rotated(9).unwrap_err();
        assert_eq!(err, CarouselError::PositionOutOfRange { position: 9, len: 7 });
        assert_eq!(original.positions(), vec![6, 0, 1, 2, 3, 4, 5]);
        assert_eq!(original.center_slide().item, 'E');
    }

    #[test]
    fn test_single_slide() {
        let mut carousel = Carousel::new(["only"], 100).unwrap();
        assert_eq!(carousel.center_position(), 0);
        assert_eq!(carousel.rotate(0).unwrap(), None);
        let layout = carousel.layout();
        assert!(layout[0].is_center);
        assert_eq!(layout[0].z_index, CENTER_Z_INDEX);
        assert!(!layout[0].is_left_of_center && !layout[0].is_right_of_center);
    }
}
