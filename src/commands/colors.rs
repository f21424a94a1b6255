use crate::color::PALETTE;
use anyhow::Result;
use crossterm::style::{self, Stylize};
use std::io::{self, Write};

/// Show all named colors with their raw and RGB values.
pub fn cmd_colors() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for (name, color) in PALETTE {
        let image::Rgb([r, g, b]) = color.to_rgb();
        let swatch = "  ██  ".with(style::Color::Rgb { r, g, b });
        writeln!(
            stdout,
            "{swatch} {name:<12} 0x{:04X}  #{r:02X}{g:02X}{b:02X}",
            color.raw()
        )?;
    }
    Ok(())
}
