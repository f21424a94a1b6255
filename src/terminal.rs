//! Live preview of the canvas in the terminal.
//!
//! Every character cell shows two vertically stacked pixels using the upper
//! half block: the foreground color paints the top pixel and the background
//! color paints the bottom one. Canvases larger than the terminal are
//! downscaled by an integer factor, sampling the top-left pixel of each block.

use crate::color::Color;
use crate::host::Host;
use crate::sink::{Area, DisplaySink, Mirror};
use anyhow::{Context, Result};
use crossterm::{cursor, event, execute, queue, style, terminal};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::time::Duration;

const HALF_BLOCK: char = '▀';

pub struct TerminalSink {
    mirror: Mirror,
    scale: u32,
    active: bool,
}

impl TerminalSink {
    /// Switch the terminal into the alternate screen and raw mode.
    ///
    /// The terminal is restored by `finish` or, at the latest, on drop.
    pub fn open(width: u32, height: u32) -> Result<Self> {
        let (cols, rows) = terminal::size().context("get terminal size")?;
        let scale = scale_for(width, height, cols, rows);
        log::debug!("terminal is {cols}x{rows}, downscaling by {scale}");
        execute!(io::stdout(), terminal::EnterAlternateScreen).context("enter alt screen")?;
        execute!(io::stdout(), cursor::Hide).context("hide cursor")?;
        terminal::enable_raw_mode().context("enable raw mode")?;
        Ok(Self {
            mirror: Mirror::new(width, height),
            scale,
            active: true,
        })
    }

    fn render(&self, area: Area) -> Result<()> {
        let (cells_x, cells_y) = cells(area, self.scale);
        log::debug!(
            "render {}x{} at ({}, {}) into cells {cells_x:?} x {cells_y:?}",
            area.w,
            area.h,
            area.x,
            area.y
        );
        let mut stdout = io::stdout().lock();
        for cy in cells_y {
            queue!(stdout, cursor::MoveTo(*cells_x.start(), cy))?;
            for cx in cells_x.clone() {
                let x = u32::from(cx) * self.scale;
                let top = u32::from(cy) * 2 * self.scale;
                let bottom = top + self.scale;
                let upper = self.mirror.get(x, top);
                let lower = if bottom < self.mirror.height {
                    self.mirror.get(x, bottom)
                } else {
                    Color::BLACK
                };
                queue!(
                    stdout,
                    style::SetForegroundColor(term_color(upper)),
                    style::SetBackgroundColor(term_color(lower)),
                    style::Print(HALF_BLOCK),
                )?;
            }
        }
        queue!(stdout, style::ResetColor)?;
        stdout.flush().context("flush stdout")
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode().context("disable raw mode")?;
        execute!(io::stdout(), style::ResetColor, cursor::Show).context("show cursor")?;
        execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alt screen")?;
        Ok(())
    }
}

impl DisplaySink for TerminalSink {
    fn write_region(&mut self, area: Area, pixels: &[Color]) -> Result<()> {
        self.mirror.apply(area, pixels)?;
        self.render(area).context("render frame")
    }

    fn finish(&mut self) -> Result<()> {
        self.restore()
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        _ = self.restore();
    }
}

/// Stops the demo when `q`, `c`, or `Esc` is pressed.
pub struct KeyHost;

impl Host for KeyHost {
    fn update(&mut self) -> ControlFlow<()> {
        if should_exit() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Check if the `Q` or `Esc` button is pressed.
fn should_exit() -> bool {
    let timeout = Duration::from_millis(0);
    while event::poll(timeout).unwrap_or_default() {
        let Ok(event) = event::read() else {
            continue;
        };
        let event::Event::Key(event) = event else {
            continue;
        };
        if event.kind != event::KeyEventKind::Press {
            continue;
        }
        match event.code {
            event::KeyCode::Char('q' | 'c') | event::KeyCode::Esc => return true,
            _ => {}
        }
    }
    false
}

/// Smallest integer downscale that makes the canvas fit into the terminal.
fn scale_for(width: u32, height: u32, cols: u16, rows: u16) -> u32 {
    let cols = u32::from(cols.max(1));
    let rows = u32::from(rows.max(1)) * 2;
    width.div_ceil(cols).max(height.div_ceil(rows)).max(1)
}

/// Character cells covering `area` at the given scale.
fn cells(area: Area, scale: u32) -> (std::ops::RangeInclusive<u16>, std::ops::RangeInclusive<u16>) {
    let last_x = area.x + area.w - 1;
    let last_y = area.y + area.h - 1;
    let cell = |v: u32| u16::try_from(v).unwrap_or(u16::MAX);
    (
        cell(area.x / scale)..=cell(last_x / scale),
        cell(area.y / (2 * scale))..=cell(last_y / (2 * scale)),
    )
}

const fn term_color(color: Color) -> style::Color {
    let image::Rgb([r, g, b]) = color.to_rgb();
    style::Color::Rgb { r, g, b }
}
