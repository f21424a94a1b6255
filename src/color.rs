use crate::error::{DrawError, DrawResult};
use image::Rgb;
use std::fmt::Display;
use std::str::FromStr;

/// A 16-bit RGB565 pixel value, the native format of the M5Stack panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Self = Self(0x0000);
    pub const NAVY: Self = Self(0x000F);
    pub const DARKGREEN: Self = Self(0x03E0);
    pub const DARKCYAN: Self = Self(0x03EF);
    pub const MAROON: Self = Self(0x7800);
    pub const PURPLE: Self = Self(0x780F);
    pub const OLIVE: Self = Self(0x7BE0);
    pub const LIGHTGREY: Self = Self(0xC618);
    pub const DARKGREY: Self = Self(0x7BEF);
    pub const BLUE: Self = Self(0x001F);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x07FF);
    pub const RED: Self = Self(0xF800);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const WHITE: Self = Self(0xFFFF);
    pub const ORANGE: Self = Self(0xFD20);
    pub const GREENYELLOW: Self = Self(0xAFE5);
    pub const PINK: Self = Self(0xFC18);

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Expand to 8-bit channels. The high bits are replicated into the low
    /// ones so that WHITE maps to #FFFFFF.
    pub const fn to_rgb(self) -> Rgb<u8> {
        let r5 = (self.0 >> 11) & 0x1f;
        let g6 = (self.0 >> 5) & 0x3f;
        let b5 = self.0 & 0x1f;
        let r = (r5 << 3) | (r5 >> 2);
        let g = (g6 << 2) | (g6 >> 4);
        let b = (b5 << 3) | (b5 >> 2);
        Rgb([low_byte(r), low_byte(g), low_byte(b)])
    }

    /// Look up a palette color by name.
    ///
    /// Case-insensitive. A leading `:` is accepted so that symbol-style
    /// tokens (`:RED`) resolve too.
    pub fn from_name(name: &str) -> DrawResult<Self> {
        let name = name.trim();
        let name = name.strip_prefix(':').unwrap_or(name);
        for (known, color) in PALETTE {
            if known.eq_ignore_ascii_case(name) {
                return Ok(*color);
            }
        }
        Err(DrawError::invalid(format!("unknown color name: {name:?}")))
    }

    /// Accept a raw pixel value, as long as it fits into 16 bits.
    pub fn from_raw(raw: i64) -> DrawResult<Self> {
        match u16::try_from(raw) {
            Ok(raw) => Ok(Self(raw)),
            Err(_) => Err(DrawError::invalid(format!(
                "raw color must be in 0..=0xFFFF, got {raw}"
            ))),
        }
    }

    /// The palette name of the color, if it has one.
    pub fn name(self) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
    }
}

const fn low_byte(v: u16) -> u8 {
    (v & 0xff) as u8
}

/// The fixed named palette, in the order `colors` lists it.
pub static PALETTE: &[(&str, Color)] = &[
    ("BLACK", Color::BLACK),
    ("NAVY", Color::NAVY),
    ("DARKGREEN", Color::DARKGREEN),
    ("DARKCYAN", Color::DARKCYAN),
    ("MAROON", Color::MAROON),
    ("PURPLE", Color::PURPLE),
    ("OLIVE", Color::OLIVE),
    ("LIGHTGREY", Color::LIGHTGREY),
    ("DARKGREY", Color::DARKGREY),
    ("BLUE", Color::BLUE),
    ("GREEN", Color::GREEN),
    ("CYAN", Color::CYAN),
    ("RED", Color::RED),
    ("MAGENTA", Color::MAGENTA),
    ("YELLOW", Color::YELLOW),
    ("WHITE", Color::WHITE),
    ("ORANGE", Color::ORANGE),
    ("GREENYELLOW", Color::GREENYELLOW),
    ("PINK", Color::PINK),
];

impl FromStr for Color {
    type Err = DrawError;

    /// Parse either a palette name or a number (`63488`, `0xF800`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            let Ok(raw) = i64::from_str_radix(hex, 16) else {
                return Err(DrawError::invalid(format!("invalid hex color: {s:?}")));
            };
            return Self::from_raw(raw);
        }
        if let Ok(raw) = s.parse::<i64>() {
            return Self::from_raw(raw);
        }
        Self::from_name(s)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

/// Anything the drawing surface accepts in a color position.
///
/// Resolution happens before a drawing call writes anything, so a bad
/// token fails the whole call.
pub trait ToColor {
    fn to_color(self) -> DrawResult<Color>;
}

impl ToColor for Color {
    fn to_color(self) -> DrawResult<Color> {
        Ok(self)
    }
}

impl ToColor for &str {
    fn to_color(self) -> DrawResult<Color> {
        self.parse()
    }
}

impl ToColor for String {
    fn to_color(self) -> DrawResult<Color> {
        self.parse()
    }
}

impl ToColor for &String {
    fn to_color(self) -> DrawResult<Color> {
        self.parse()
    }
}

impl ToColor for u16 {
    fn to_color(self) -> DrawResult<Color> {
        Ok(Color(self))
    }
}

impl ToColor for u32 {
    fn to_color(self) -> DrawResult<Color> {
        Color::from_raw(i64::from(self))
    }
}

impl ToColor for i32 {
    fn to_color(self) -> DrawResult<Color> {
        Color::from_raw(i64::from(self))
    }
}

impl ToColor for i64 {
    fn to_color(self) -> DrawResult<Color> {
        Color::from_raw(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Color::from_name("RED").unwrap(), Color::RED);
        assert_eq!(Color::from_name("white").unwrap(), Color::WHITE);
        assert_eq!(Color::from_name(":YELLOW").unwrap(), Color::YELLOW);
        assert_eq!(Color::from_name(" Blue ").unwrap(), Color::BLUE);
        let err = Color::from_name("CHARTREUSE").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(Color::from_raw(0).unwrap(), Color::BLACK);
        assert_eq!(Color::from_raw(0xFFFF).unwrap(), Color::WHITE);
        assert_eq!(Color::from_raw(0xfffe).unwrap(), Color(0xfffe));
        assert!(Color::from_raw(0x1_0000).unwrap_err().is_invalid_argument());
        assert!(Color::from_raw(-1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_parse() {
        assert_eq!("0xF800".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("63488".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("green".parse::<Color>().unwrap(), Color::GREEN);
        assert!("0xZZ".parse::<Color>().is_err());
        assert!("0x10000".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_to_color() {
        assert_eq!("RED".to_color().unwrap(), Color::RED);
        assert_eq!(String::from("BLUE").to_color().unwrap(), Color::BLUE);
        assert_eq!(0x07E0_i32.to_color().unwrap(), Color::GREEN);
        assert_eq!(0x07E0_u16.to_color().unwrap(), Color::GREEN);
        assert_eq!(0x07E0_i64.to_color().unwrap(), Color::GREEN);
        assert!(70_000_u32.to_color().is_err());
        assert!((-5_i32).to_color().is_err());
    }

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(Color::WHITE.to_rgb(), Rgb([0xff, 0xff, 0xff]));
        assert_eq!(Color::BLACK.to_rgb(), Rgb([0, 0, 0]));
        assert_eq!(Color::RED.to_rgb(), Rgb([0xff, 0, 0]));
        assert_eq!(Color::GREEN.to_rgb(), Rgb([0, 0xff, 0]));
        assert_eq!(Color::BLUE.to_rgb(), Rgb([0, 0, 0xff]));
    }

    #[test]
    fn test_palette_is_unique() {
        for (i, (name_a, color_a)) in PALETTE.iter().enumerate() {
            for (name_b, color_b) in &PALETTE[i + 1..] {
                assert_ne!(name_a, name_b);
                assert_ne!(color_a, color_b, "{name_a} and {name_b} share a value");
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::RED.to_string(), "RED");
        assert_eq!(Color(0x1234).to_string(), "0x1234");
        assert_eq!(Color::from_raw(0xFFFF).unwrap().name(), Some("WHITE"));
    }
}
