use crate::error::{DrawError, DrawResult};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use std::convert::Infallible;

/// Supplies glyph bitmaps and metrics for text rendering.
///
/// All values are unscaled: the surface multiplies them by the text size.
pub trait GlyphSource {
    /// Horizontal distance between the origins of two glyphs.
    fn advance(&self) -> u32;

    /// Vertical distance between two lines.
    fn line_height(&self) -> u32;

    /// Lit pixels of `ch`, relative to the top-left corner of its cell.
    fn glyph(&self, ch: char) -> Vec<(i32, i32)>;
}

/// Font names accepted by `--font` and `lcd.toml`.
pub static FONT_NAMES: &[&str] = &["5x8", "6x10", "6x13", "8x13", "9x15", "10x20"];

/// Glyphs of an `embedded-graphics` monospace font.
pub struct MonoGlyphs {
    font: &'static MonoFont<'static>,
}

impl MonoGlyphs {
    pub const fn new(font: &'static MonoFont<'static>) -> Self {
        Self { font }
    }

    pub fn by_name(name: &str) -> DrawResult<Self> {
        let font = match name.to_ascii_lowercase().as_str() {
            "5x8" => &ascii::FONT_5X8,
            "6x10" => &ascii::FONT_6X10,
            "6x13" => &ascii::FONT_6X13,
            "8x13" => &ascii::FONT_8X13,
            "9x15" => &ascii::FONT_9X15,
            "10x20" => &ascii::FONT_10X20,
            _ => {
                return Err(DrawError::invalid(format!(
                    "unknown font {name:?}, expected one of: {}",
                    FONT_NAMES.join(", ")
                )));
            }
        };
        Ok(Self::new(font))
    }
}

impl Default for MonoGlyphs {
    fn default() -> Self {
        Self::new(&ascii::FONT_6X10)
    }
}

impl GlyphSource for MonoGlyphs {
    fn advance(&self) -> u32 {
        self.font.character_size.width + self.font.character_spacing
    }

    fn line_height(&self) -> u32 {
        self.font.character_size.height
    }

    fn glyph(&self, ch: char) -> Vec<(i32, i32)> {
        let mut buf = [0u8; 4];
        let text = ch.encode_utf8(&mut buf);
        let style = MonoTextStyle::new(self.font, BinaryColor::On);
        let mut collector = Collector {
            size: self.font.character_size,
            lit: Vec::new(),
        };
        let Ok(_) = Text::with_baseline(text, Point::zero(), style, Baseline::Top)
            .draw(&mut collector);
        collector.lit
    }
}

/// Draw target that only remembers which pixels were lit.
struct Collector {
    size: Size,
    lit: Vec<(i32, i32)>,
}

impl OriginDimensions for Collector {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Collector {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_on() {
                self.lit.push((point.x, point.y));
            }
        }
        Ok(())
    }
}
