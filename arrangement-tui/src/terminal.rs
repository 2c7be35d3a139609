use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use griddom::Rgb;
use unicode_width::UnicodeWidthChar;

use crate::canvas::{Canvas, DEFAULT_BG, DEFAULT_FG};

/// Raw-mode alternate screen with mouse capture, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current: Canvas,
    previous: Canvas,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Canvas::new(width, height),
            previous: Canvas::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Repaint the frame with `paint` and write only the cells that changed.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Canvas)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}");
            self.current = Canvas::new(width, height);
            // Force a full repaint.
            self.previous = Canvas::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut last_fg = DEFAULT_FG;
        let mut last_bg = DEFAULT_BG;

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(ct_color(last_fg)),
            SetBackgroundColor(ct_color(last_bg))
        )?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if cell.fg != last_fg {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.fg)))?;
                last_fg = cell.fg;
            }
            if cell.bg != last_bg {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.bg)))?;
                last_bg = cell.bg;
            }

            write!(self.stdout, "{}", cell.ch)?;

            let advance = cell.ch.width().unwrap_or(1).max(1) as u16;
            cursor_at = Some((x.saturating_add(advance), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
