/// Card rasterizer for terminal rendering
use carousel_core::{Carousel, SlideAttributes};
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

/// Rows occupied by one card, borders included
pub const CARD_HEIGHT: usize = 7;

/// How pixel offsets map onto terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub pixels_per_column: u32,
    pub card_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixels_per_column: 10,
            card_width: 16,
        }
    }
}

/// Renders carousel slides as overlapping cards, honouring z-index
pub struct CardRenderer {
    width: usize,
    height: usize,
    options: RenderOptions,
    z_buffer: Vec<u64>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
    owner_buffer: Vec<Option<usize>>,
}

impl CardRenderer {
    pub fn new(width: usize, height: usize, options: RenderOptions) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            options,
            z_buffer: vec![0; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
            owner_buffer: vec![None; size],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height, self.options);
    }

    pub fn clear(&mut self) {
        self.z_buffer.fill(0);
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
        self.owner_buffer.fill(None);
    }

    /// Column where a slide's card starts.
    pub fn column_for(&self, attrs: &SlideAttributes) -> usize {
        let scale = self.options.pixels_per_column.max(1) as u64;
        (attrs.pixel_offset / scale) as usize
    }

    /// First row of every card; cards are centered vertically.
    pub fn top_row(&self) -> usize {
        self.height.saturating_sub(CARD_HEIGHT) / 2
    }

    pub fn render_carousel(&mut self, carousel: &Carousel<String>) {
        for slide in carousel.slides() {
            let attrs = carousel.attributes_of(slide);
            self.render_card(&attrs, &slide.item);
        }
    }

    fn render_card(&mut self, attrs: &SlideAttributes, label: &str) {
        let left = self.column_for(attrs);
        let top = self.top_row();
        let card_width = self.options.card_width.max(2);
        let color = card_color(attrs);

        let inner = card_width - 2;
        let title = fit(label, inner);
        let footer = fit(&format!("#{}", attrs.position), inner);

        for row in 0..CARD_HEIGHT {
            for col in 0..card_width {
                let edge_row = row == 0 || row == CARD_HEIGHT - 1;
                let edge_col = col == 0 || col == card_width - 1;
                let c = match (edge_row, edge_col) {
                    (true, true) => '+',
                    (true, false) => '-',
                    (false, true) => '|',
                    (false, false) => match row {
                        2 => title.get(col - 1).copied().unwrap_or(' '),
                        4 => footer.get(col - 1).copied().unwrap_or(' '),
                        _ => ' ',
                    },
                };
                self.plot(left + col, top + row, attrs, c, color);
            }
        }
    }

    fn plot(&mut self, x: usize, y: usize, attrs: &SlideAttributes, c: char, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        if attrs.z_index > self.z_buffer[idx] {
            self.z_buffer[idx] = attrs.z_index;
            self.char_buffer[idx] = c;
            self.color_buffer[idx] = color;
            self.owner_buffer[idx] = Some(attrs.index);
        }
    }

    /// Identity of the topmost slide drawn at a cell, if any.
    pub fn slide_at(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.owner_buffer[y * self.width + x]
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn card_color(attrs: &SlideAttributes) -> Color {
    if attrs.is_center {
        Color::Cyan
    } else if attrs.is_left_of_center || attrs.is_right_of_center {
        Color::White
    } else {
        Color::DarkGrey
    }
}

/// Center `text` in `width` cells, truncating when it does not fit.
fn fit(text: &str, width: usize) -> Vec<char> {
    let chars: Vec<char> = text.chars().take(width).collect();
    let pad = (width - chars.len()) / 2;
    let mut line = vec![' '; pad];
    line.extend(chars);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Carousel<String> {
        Carousel::new((1..=n).map(|i| format!("Slide {i}")), 100).unwrap()
    }

    #[test]
    fn test_center_card_is_on_top() {
        let mut renderer = CardRenderer::new(120, 20, RenderOptions::default());
        renderer.render_carousel(&deck(7));

        // slot 3 starts at column 40 and slot 2 at 30; where they overlap the center wins
        let row = renderer.top_row() + 3;
        assert_eq!(renderer.slide_at(42, row), Some(3));
        // slot 4 starts at column 50 but lies below the center card through column 55
        assert_eq!(renderer.slide_at(52, row), Some(3));
        assert_eq!(renderer.slide_at(57, row), Some(4));
        assert_eq!(renderer.slide_at(5, row), None);
    }

    #[test]
    fn test_hit_test_follows_rotation() {
        let mut carousel = deck(7);
        carousel.rotate(5).unwrap();

        let mut renderer = CardRenderer::new(120, 20, RenderOptions::default());
        renderer.render_carousel(&carousel);
        let row = renderer.top_row() + 1;
        // slide 4 moved into the center slot
        assert_eq!(renderer.slide_at(45, row), Some(4));
    }

    #[test]
    fn test_cards_outside_the_screen_are_clipped() {
        let mut renderer = CardRenderer::new(30, 10, RenderOptions::default());
        renderer.render_carousel(&deck(7));
        assert_eq!(renderer.slide_at(30, 5), None);
        assert!(renderer.slide_at(12, renderer.top_row()).is_some());
    }

    #[test]
    fn test_fit_truncates_and_centers() {
        assert_eq!(fit("abcdef", 4), vec!['a', 'b', 'c', 'd']);
        assert_eq!(fit("ab", 6), vec![' ', ' ', 'a', 'b']);
    }
}
