use crate::color::Color;
use anyhow::{Result, bail};

/// A non-empty rectangular region of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Area {
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width,
            h: height,
        }
    }

    /// Number of pixels in the area.
    pub const fn len(&self) -> usize {
        self.w as usize * self.h as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Receives finished pixel writes from the drawing surface.
///
/// The surface calls `write_region` once per completed drawing call with
/// the bounding area of the pixels it changed. `pixels` holds the
/// row-major content of the area and is exactly `area.len()` long.
pub trait DisplaySink {
    fn write_region(&mut self, area: Area, pixels: &[Color]) -> Result<()>;

    /// Called once when the driver is done with the surface.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn write_region(&mut self, area: Area, pixels: &[Color]) -> Result<()> {
        (**self).write_region(area, pixels)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// A full copy of the canvas, kept up to date from forwarded regions.
///
/// Shared by the sinks that need the whole frame to render.
pub struct Mirror {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Mirror {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn apply(&mut self, area: Area, pixels: &[Color]) -> Result<()> {
        if area.is_empty() {
            bail!("empty region");
        }
        if pixels.len() != area.len() {
            bail!(
                "region {}x{} needs {} pixels, got {}",
                area.w,
                area.h,
                area.len(),
                pixels.len()
            );
        }
        if u64::from(area.x) + u64::from(area.w) > u64::from(self.width)
            || u64::from(area.y) + u64::from(area.h) > u64::from(self.height)
        {
            bail!(
                "region at ({}, {}) sized {}x{} does not fit into {}x{}",
                area.x,
                area.y,
                area.w,
                area.h,
                self.width,
                self.height
            );
        }
        let stride = self.width as usize;
        for (row, line) in pixels.chunks(area.w as usize).enumerate() {
            let start = (area.y as usize + row) * stride + area.x as usize;
            self.pixels[start..start + line.len()].copy_from_slice(line);
        }
        Ok(())
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Keeps a mirror of the canvas and the list of forwarded areas.
#[cfg(test)]
pub struct MemorySink {
    pub mirror: Mirror,
    pub writes: Vec<Area>,
    pub finished: bool,
}

#[cfg(test)]
impl MemorySink {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            mirror: Mirror::new(width, height),
            writes: Vec::new(),
            finished: false,
        }
    }
}

#[cfg(test)]
impl DisplaySink for MemorySink {
    fn write_region(&mut self, area: Area, pixels: &[Color]) -> Result<()> {
        self.mirror.apply(area, pixels)?;
        self.writes.push(area);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Takes the first `ok_writes` regions and fails on every later one.
#[cfg(test)]
pub struct FailingSink {
    pub ok_writes: usize,
    pub writes: usize,
    pub finished: bool,
}

#[cfg(test)]
impl FailingSink {
    pub const fn new(ok_writes: usize) -> Self {
        Self {
            ok_writes,
            writes: 0,
            finished: false,
        }
    }
}

#[cfg(test)]
impl DisplaySink for FailingSink {
    fn write_region(&mut self, _area: Area, _pixels: &[Color]) -> Result<()> {
        if self.writes >= self.ok_writes {
            bail!("display unplugged");
        }
        self.writes += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Discards everything.
pub struct NullSink;

impl DisplaySink for NullSink {
    fn write_region(&mut self, _area: Area, _pixels: &[Color]) -> Result<()> {
        Ok(())
    }
}
