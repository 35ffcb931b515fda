//! Display sinks: where finished frames go.
//!
//! The rasterizer only produces a [`ScreenBuffer`]; everything that knows
//! about terminals lives here, so frames can be rendered headless.

use crate::raster::ScreenBuffer;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};

/// Receives frames and paces the loop between them.
pub trait DisplaySink {
    /// Show a finished frame, optionally followed by one status line.
    fn present(&mut self, frame: &ScreenBuffer, status: Option<&str>) -> io::Result<()>;

    /// Wait up to `timeout`. Returns true if the run was interrupted.
    fn idle(&mut self, timeout: Duration) -> io::Result<bool>;
}

/// Interactive terminal session.
///
/// Raw mode, the alternate screen and the hidden cursor are all undone on
/// drop, whichever way the run ends.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            restore(&mut out);
            return Err(e);
        }
        Ok(Self { out })
    }

    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(self.out, SetTitle(title))
    }
}

impl DisplaySink for Terminal {
    fn present(&mut self, frame: &ScreenBuffer, status: Option<&str>) -> io::Result<()> {
        // Raw mode does not return the carriage on '\n', so every row is
        // positioned explicitly.
        queue!(self.out, MoveTo(0, 0))?;
        for (y, line) in frame.rows().enumerate() {
            queue!(self.out, MoveTo(0, y as u16), Print(line))?;
        }
        if let Some(text) = status {
            queue!(
                self.out,
                MoveTo(0, frame.height() as u16),
                Clear(ClearType::CurrentLine),
                Print(text)
            )?;
        }
        self.out.flush()
    }

    fn idle(&mut self, timeout: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !poll(remaining)? {
                return Ok(false);
            }
            // Drain events until the deadline; only an interrupt cuts it short
            if let Event::Key(key) = read()? {
                if is_interrupt(&key) {
                    return Ok(true);
                }
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.out);
    }
}

/// Undo everything `Terminal::new` may have set up; errors are ignored.
fn restore<W: Write>(out: &mut W) {
    let _ = execute!(out, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Ctrl+C arrives as a key event in raw mode; q and Esc also stop the run.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Plain-text sink: rows and status written as lines, no escape codes.
pub struct TextSink<W: Write> {
    out: W,
    sleep: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, sleep: true }
    }

    /// A sink whose idle returns immediately, for headless runs.
    pub fn unpaced(out: W) -> Self {
        Self { out, sleep: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn present(&mut self, frame: &ScreenBuffer, status: Option<&str>) -> io::Result<()> {
        frame.write_text(&mut self.out)?;
        if let Some(text) = status {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()
    }

    fn idle(&mut self, timeout: Duration) -> io::Result<bool> {
        if self.sleep && !timeout.is_zero() {
            std::thread::sleep(timeout);
        }
        Ok(false)
    }
}
