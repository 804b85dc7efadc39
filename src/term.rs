use std::{io::{Stdout, Write, stdout}, thread, time::{Duration, Instant}};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, read, poll};
use log::{debug, warn};

use crate::backend::{Backend, Scene};
use crate::config::{MIN_TERM_HEIGHT, MIN_TERM_WIDTH};
use crate::error::{GameError, GameResult};
use crate::input::{self, Input};
use crate::render::{self, Canvas, Cell, Viewport};

/// Owns the terminal while the game runs. Frames are painted into `screen`
/// and only the cells that differ from what is already `drawn` get written.
pub struct TermManager {
    stdout: Stdout,
    viewport: Viewport,
    screen: Canvas,
    drawn: Option<Canvas>,
    active: bool,
}

impl TermManager {
    pub fn new() -> GameResult<Self> {
        let (width, height) = terminal::size().map_err(GameError::init)?;
        debug!("Terminal is {}x{}", width, height);

        check_size(width, height)?;

        Ok(TermManager {
            stdout: stdout(),
            viewport: Viewport::new(width, height),
            screen: Canvas::new(width, height),
            drawn: None,
            active: false,
        })
    }

    pub fn setup(&mut self) -> GameResult<()> {
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture).map_err(GameError::init)?;
        self.active = true;
        terminal::enable_raw_mode().map_err(GameError::init)?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).map_err(GameError::init)?;
        Ok(())
    }

    /// Hands the terminal back. Safe to call more than once, or without a
    /// successful `setup`.
    pub fn restore(&mut self) -> GameResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode().map_err(GameError::terminal)?;
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            DisableMouseCapture,
            LeaveAlternateScreen
        ).map_err(GameError::terminal)?;
        Ok(())
    }

    fn read_events_queue(&self) -> GameResult<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).map_err(GameError::terminal)? {
            events.push(read().map_err(GameError::terminal)?);
        }

        Ok(events)
    }

    fn resize(&mut self, width: u16, height: u16) -> GameResult<()> {
        debug!("Terminal resized to {}x{}", width, height);
        if check_size(width, height).is_err() {
            warn!("Terminal shrank below {}x{}, the road will be cramped", MIN_TERM_WIDTH, MIN_TERM_HEIGHT);
        }

        self.viewport = Viewport::new(width, height);
        self.screen = Canvas::new(width, height);
        self.drawn = None;
        execute!(self.stdout, terminal::Clear(ClearType::All)).map_err(GameError::terminal)?;
        Ok(())
    }

    fn flush_changes(&mut self) -> GameResult<()> {
        let (width, height) = self.screen.size();
        let mut colors: Option<(style::Color, style::Color)> = None;

        for row in 0..height {
            for col in 0..width {
                let cell = self.screen.get(col, row);
                if let Some(drawn) = &self.drawn {
                    if drawn.get(col, row) == cell {
                        continue;
                    }
                }

                if colors != Some((cell.fg, cell.bg)) {
                    queue!(
                        self.stdout,
                        style::SetForegroundColor(cell.fg),
                        style::SetBackgroundColor(cell.bg)
                    ).map_err(GameError::terminal)?;
                    colors = Some((cell.fg, cell.bg));
                }

                queue!(self.stdout, cursor::MoveTo(col, row), style::Print(cell.ch))
                    .map_err(GameError::terminal)?;
            }
        }

        self.stdout.flush()?;
        self.drawn = Some(self.screen.clone());
        Ok(())
    }
}

/// The road is unreadable below the minimum size, so refuse to start there.
pub fn check_size(width: u16, height: u16) -> GameResult<()> {
    if width < MIN_TERM_WIDTH || height < MIN_TERM_HEIGHT {
        return Err(GameError::Initialization(format!(
            "terminal is {}x{}, need at least {}x{}",
            width, height, MIN_TERM_WIDTH, MIN_TERM_HEIGHT
        )));
    }

    Ok(())
}

impl Backend for TermManager {
    fn poll_inputs(&mut self) -> GameResult<Vec<Input>> {
        let mut inputs = vec![];

        for event in self.read_events_queue()? {
            match input::translate(event, &self.viewport) {
                Some(Input::Resize(w, h)) => self.resize(w, h)?,
                Some(input) => inputs.push(input),
                None => {},
            }
        }

        Ok(inputs)
    }

    fn present(&mut self, scene: Scene) -> GameResult<()> {
        self.screen.fill(Cell::BLANK);
        render::paint(&mut self.screen, &self.viewport, scene);
        self.flush_changes()
    }

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_size_is_accepted() {
        assert!(check_size(MIN_TERM_WIDTH, MIN_TERM_HEIGHT).is_ok());
        assert!(check_size(80, 24).is_ok());
    }

    #[test]
    fn too_narrow_or_too_short_fails_to_initialize() {
        for &(w, h) in [(MIN_TERM_WIDTH - 1, MIN_TERM_HEIGHT), (MIN_TERM_WIDTH, MIN_TERM_HEIGHT - 1), (0, 0)].iter() {
            let err = check_size(w, h).unwrap_err();
            assert!(matches!(err, GameError::Initialization(_)), "{}x{} gave {:?}", w, h, err);
        }
    }

    #[test]
    fn size_error_names_both_sizes() {
        let msg = check_size(30, 10).unwrap_err().to_string();
        assert!(msg.contains("30x10"));
        assert!(msg.contains("40x20"));
    }
}
