//! Immediate-mode drawing over a fixed-size RGB565 canvas.
//!
//! Each drawing call validates its arguments, rasterizes the shape into
//! spans, applies the bounds policy, writes the canvas and then forwards
//! the bounding area of the written pixels to the display sink. A call that
//! fails validation or the policy check writes nothing.

use crate::color::{Color, ToColor};
use crate::error::{DrawError, DrawResult};
use crate::font::{GlyphSource, MonoGlyphs};
use crate::raster::{self, Spans};
use crate::sink::{Area, DisplaySink};
use serde::Deserialize;

/// What to do with pixels that fall outside of the canvas.
#[derive(Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Silently drop them and draw the visible part.
    #[default]
    Clip,
    /// Fail the whole call with `OutOfBounds`.
    Reject,
}

/// Text insertion point and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: i64,
    pub y: i64,
    pub color: Color,
    pub size: u32,
    pub wrap: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            color: Color::WHITE,
            size: 1,
            wrap: true,
        }
    }
}

pub struct DrawingSurface<S: DisplaySink> {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    cursor: Cursor,
    policy: BoundsPolicy,
    glyphs: Box<dyn GlyphSource>,
    sink: S,
}

impl<S: DisplaySink> DrawingSurface<S> {
    /// Create a black canvas and push it to the sink.
    pub fn new(width: u32, height: u32, sink: S) -> DrawResult<Self> {
        if width == 0 || height == 0 {
            return Err(DrawError::invalid(format!(
                "canvas must not be empty, got {width}x{height}"
            )));
        }
        let mut surface = Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
            cursor: Cursor::default(),
            policy: BoundsPolicy::default(),
            glyphs: Box::new(MonoGlyphs::default()),
            sink,
        };
        surface.forward(Area::full(width, height))?;
        Ok(surface)
    }

    #[must_use]
    pub fn with_font(mut self, glyphs: impl GlyphSource + 'static) -> Self {
        self.glyphs = Box::new(glyphs);
        self
    }

    pub const fn set_policy(&mut self, policy: BoundsPolicy) {
        self.policy = policy;
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn fill_screen(&mut self, color: impl ToColor) -> DrawResult<()> {
        let color = color.to_color()?;
        log::trace!("fill_screen({color})");
        self.pixels.fill(color);
        self.forward(Area::full(self.width, self.height))
    }

    /// Move the text cursor. Any position is accepted: whatever ends up
    /// outside of the canvas is handled by the bounds policy when printing.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        log::trace!("set_cursor({x}, {y})");
        self.cursor.x = x.into();
        self.cursor.y = y.into();
    }

    pub fn set_text_color(&mut self, color: impl ToColor) -> DrawResult<()> {
        let color = color.to_color()?;
        log::trace!("set_text_color({color})");
        self.cursor.color = color;
        Ok(())
    }

    pub fn set_text_size(&mut self, size: i32) -> DrawResult<()> {
        let Ok(size) = u32::try_from(size) else {
            return Err(DrawError::invalid(format!(
                "text size must be positive, got {size}"
            )));
        };
        if size == 0 {
            return Err(DrawError::invalid("text size must be positive, got 0"));
        }
        log::trace!("set_text_size({size})");
        self.cursor.size = size;
        Ok(())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn set_text_wrap(&mut self, wrap: bool) {
        self.cursor.wrap = wrap;
    }

    /// Render `text` at the cursor and advance it past the last glyph.
    ///
    /// `\n` starts a new line at x = 0, `\r` is ignored. With wrapping on,
    /// a glyph that would cross the right edge moves to the next line first.
    pub fn print_text(&mut self, text: &str) -> DrawResult<()> {
        log::trace!("print_text({text:?}) at ({}, {})", self.cursor.x, self.cursor.y);
        let size = i64::from(self.cursor.size);
        let advance = i64::from(self.glyphs.advance()) * size;
        let line_height = i64::from(self.glyphs.line_height()) * size;
        let width = i64::from(self.width);

        let mut spans = self.spans();
        let (mut x, mut y) = (self.cursor.x, self.cursor.y);
        for ch in text.chars() {
            match ch {
                '\n' => {
                    x = 0;
                    y = y.saturating_add(line_height);
                    continue;
                }
                '\r' => continue,
                _ => {}
            }
            if self.cursor.wrap && x.saturating_add(advance) > width {
                x = 0;
                y = y.saturating_add(line_height);
            }
            for (gx, gy) in self.glyphs.glyph(ch) {
                let px = x.saturating_add(i64::from(gx) * size);
                let py = y.saturating_add(i64::from(gy) * size);
                raster::rect_fill(&mut spans, px, py, size, size);
            }
            x = x.saturating_add(advance);
        }

        self.paint(&spans, self.cursor.color)?;
        self.cursor.x = x;
        self.cursor.y = y;
        Ok(())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: impl ToColor) -> DrawResult<()> {
        let color = color.to_color()?;
        log::trace!("draw_pixel({x}, {y}, {color})");
        let mut spans = self.spans();
        spans.pixel(x.into(), y.into());
        self.paint(&spans, color)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: impl ToColor,
    ) -> DrawResult<()> {
        let color = color.to_color()?;
        log::trace!("draw_line({x0}, {y0}, {x1}, {y1}, {color})");
        let mut spans = self.spans();
        raster::line(&mut spans, x0.into(), y0.into(), x1.into(), y1.into());
        self.paint(&spans, color)
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: impl ToColor) -> DrawResult<()> {
        let color = color.to_color()?;
        check_rect_size(w, h)?;
        log::trace!("draw_rect({x}, {y}, {w}, {h}, {color})");
        let mut spans = self.spans();
        raster::rect_outline(&mut spans, x.into(), y.into(), w.into(), h.into());
        self.paint(&spans, color)
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: impl ToColor) -> DrawResult<()> {
        let color = color.to_color()?;
        check_rect_size(w, h)?;
        log::trace!("fill_rect({x}, {y}, {w}, {h}, {color})");
        let mut spans = self.spans();
        raster::rect_fill(&mut spans, x.into(), y.into(), w.into(), h.into());
        self.paint(&spans, color)
    }

    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: impl ToColor) -> DrawResult<()> {
        let color = color.to_color()?;
        check_radius(r)?;
        log::trace!("draw_circle({cx}, {cy}, {r}, {color})");
        let mut spans = self.spans();
        raster::circle_outline(&mut spans, cx.into(), cy.into(), r.into());
        self.paint(&spans, color)
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: impl ToColor) -> DrawResult<()> {
        let color = color.to_color()?;
        check_radius(r)?;
        log::trace!("fill_circle({cx}, {cy}, {r}, {color})");
        let mut spans = self.spans();
        raster::circle_fill(&mut spans, cx.into(), cy.into(), r.into());
        self.paint(&spans, color)
    }

    /// Outline through the vertices in the given order.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: impl ToColor,
    ) -> DrawResult<()> {
        let color = color.to_color()?;
        log::trace!("draw_triangle({x0}, {y0}, {x1}, {y1}, {x2}, {y2}, {color})");
        let mut spans = self.spans();
        raster::triangle_outline(&mut spans, vertices(x0, y0, x1, y1, x2, y2));
        self.paint(&spans, color)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: impl ToColor,
    ) -> DrawResult<()> {
        let color = color.to_color()?;
        log::trace!("fill_triangle({x0}, {y0}, {x1}, {y1}, {x2}, {y2}, {color})");
        let mut spans = self.spans();
        raster::triangle_fill(&mut spans, vertices(x0, y0, x1, y1, x2, y2));
        self.paint(&spans, color)
    }

    fn spans(&self) -> Spans {
        Spans::new(self.width, self.height)
    }

    /// Apply the bounds policy, write the spans and forward the written area.
    fn paint(&mut self, spans: &Spans, color: Color) -> DrawResult<()> {
        let Some(extent) = spans.extent() else {
            return Ok(());
        };
        if self.policy == BoundsPolicy::Reject
            && let Some((x, y)) = extent.outside(self.width.into(), self.height.into())
        {
            return Err(self.out_of_bounds(x, y));
        }

        let stride = self.width as usize;
        let mut written: Option<(u32, u32, u32, u32)> = None;
        for span in spans.spans() {
            let (y, x0, x1) = (coord(span.y), coord(span.x0), coord(span.x1));
            let row = y as usize * stride;
            self.pixels[row + x0 as usize..=row + x1 as usize].fill(color);
            written = Some(match written {
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x0), min_y.min(y), max_x.max(x1), max_y.max(y))
                }
                None => (x0, y, x1, y),
            });
        }

        let Some((min_x, min_y, max_x, max_y)) = written else {
            return Ok(());
        };
        self.forward(Area {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        })
    }

    /// Send the current content of `area` to the sink.
    fn forward(&mut self, area: Area) -> DrawResult<()> {
        let stride = self.width as usize;
        let start = area.y as usize * stride;
        if area.x == 0 && area.w == self.width {
            let end = start + area.len();
            self.sink.write_region(area, &self.pixels[start..end])?;
            return Ok(());
        }
        let mut buf = Vec::with_capacity(area.len());
        for row in 0..area.h as usize {
            let from = start + row * stride + area.x as usize;
            buf.extend_from_slice(&self.pixels[from..from + area.w as usize]);
        }
        self.sink.write_region(area, &buf)?;
        Ok(())
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> DrawError {
        DrawError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Read access to the canvas state.
#[cfg_attr(not(test), allow(dead_code))]
impl<S: DisplaySink> DrawingSurface<S> {
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The whole canvas, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Sample one pixel of the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> DrawResult<Color> {
        let (Ok(ux), Ok(uy)) = (u32::try_from(x), u32::try_from(y)) else {
            return Err(self.out_of_bounds(x.into(), y.into()));
        };
        if ux >= self.width || uy >= self.height {
            return Err(self.out_of_bounds(x.into(), y.into()));
        }
        Ok(self.pixels[uy as usize * self.width as usize + ux as usize])
    }
}

fn check_rect_size(w: i32, h: i32) -> DrawResult<()> {
    if w <= 0 || h <= 0 {
        return Err(DrawError::invalid(format!(
            "rectangle size must be positive, got {w}x{h}"
        )));
    }
    Ok(())
}

fn check_radius(r: i32) -> DrawResult<()> {
    if r <= 0 {
        return Err(DrawError::invalid(format!(
            "radius must be positive, got {r}"
        )));
    }
    Ok(())
}

fn vertices(x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> [(i64, i64); 3] {
    [
        (x0.into(), y0.into()),
        (x1.into(), y1.into()),
        (x2.into(), y2.into()),
    ]
}

/// Spans are clipped to the canvas, so their coordinates always fit.
fn coord(v: i64) -> u32 {
    u32::try_from(v).unwrap_or_default()
}
