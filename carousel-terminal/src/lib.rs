/// Terminal front end for the infinity carousel
use carousel_core::{Carousel, Direction};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{debug, warn};
use std::io::{self, stdout, Write};

pub mod renderer;

pub use renderer::{CardRenderer, RenderOptions};

/// Main application struct for the terminal carousel
pub struct TerminalApp {
    carousel: Carousel<String>,
    renderer: CardRenderer,
    running: bool,
    status: String,
}

impl TerminalApp {
    pub fn new(carousel: Carousel<String>, options: RenderOptions) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            carousel,
            renderer: CardRenderer::new(width as usize, height as usize, options),
            running: true,
            status: String::new(),
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup: leave raw mode even when restoring the screen fails
        let raw_mode = terminal::disable_raw_mode();
        let screen = execute!(
            stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );

        first_error([result, raw_mode, screen])
    }

    /// Redraw only after an event; nothing moves on its own.
    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            self.render()?;
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.running = false;
                } else if let Some(position) = position_for_key(
                    code,
                    self.carousel.center_position(),
                    self.carousel.len(),
                ) {
                    self.activate(position);
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let position = self
                    .renderer
                    .slide_at(column as usize, row as usize)
                    .and_then(|index| self.carousel.position_of(index));
                if let Some(position) = position {
                    self.activate(position);
                }
            }
            Event::Resize(width, height) => {
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn activate(&mut self, position: usize) {
        match self.carousel.rotate(position) {
            Ok(Some(direction)) => {
                debug!("slot {position} activated, rotated {direction:?}");
                self.status = format!(
                    "Rotated {} | center: {}",
                    direction_label(direction),
                    self.carousel.center_slide().item
                );
            }
            Ok(None) => {
                self.status = format!("Already centered: {}", self.carousel.center_slide().item);
            }
            Err(e) => {
                warn!("ignoring activation: {e}");
                self.status = e.to_string();
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render_carousel(&self.carousel);

        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Infinity Carousel | {} slides | Controls: Left/Right or h/l, 1-9=Slot, Click=Activate, Q=Quit",
                self.carousel.len()
            )),
            cursor::MoveTo(0, 1),
            Print(&self.status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Slot a key press activates, if the key names one that exists.
pub fn position_for_key(code: KeyCode, center: usize, len: usize) -> Option<usize> {
    let position = match code {
        KeyCode::Left | KeyCode::Char('h') => center.checked_sub(1)?,
        KeyCode::Right | KeyCode::Char('l') => center + 1,
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10)? as usize - 1,
        _ => return None,
    };
    (position < len).then_some(position)
}

/// The first failure among steps that all ran, or `Ok` if none failed.
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().collect()
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "left",
        Direction::Right => "right",
    }
}
