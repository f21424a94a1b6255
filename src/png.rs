use crate::color::Color;
use crate::sink::{Area, DisplaySink, Mirror};
use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

/// Keeps the last frame and writes it as a PNG file on finish.
pub struct PngSink {
    path: PathBuf,
    mirror: Mirror,
}

impl PngSink {
    pub fn new(path: &Path, width: u32, height: u32) -> Self {
        Self {
            path: path.to_path_buf(),
            mirror: Mirror::new(width, height),
        }
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.mirror.width, self.mirror.height, |x, y| {
            self.mirror.get(x, y).to_rgb()
        })
    }

    pub fn save(&self) -> Result<()> {
        log::debug!("saving frame into {}", self.path.display());
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context("create output directory")?;
        }
        self.to_image()
            .save_with_format(&self.path, ImageFormat::Png)
            .context("save png file")
    }
}

impl DisplaySink for PngSink {
    fn write_region(&mut self, area: Area, pixels: &[Color]) -> Result<()> {
        self.mirror.apply(area, pixels)
    }

    fn finish(&mut self) -> Result<()> {
        self.save()
    }
}
