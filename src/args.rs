use crate::surface::BoundsPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the M5 Lcd demo.
    Demo(DemoArgs),

    /// Render the scripted part of the demo into a PNG file.
    Shot(ShotArgs),

    /// List the named colors.
    Colors,
}

/// Where the frames of the demo go.
#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Render live in the terminal.
    #[default]
    Terminal,
    /// Save the last frame as a PNG file.
    Png,
    /// Discard all frames.
    Null,
}

impl Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Terminal => "terminal",
            Self::Png => "png",
            Self::Null => "null",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Args, Default)]
pub struct CanvasArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value = None)]
    pub width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long, default_value = None)]
    pub height: Option<u32>,

    /// The mono font for text, like "6x10" or "10x20".
    #[arg(long, default_value = None)]
    pub font: Option<String>,

    /// What to do with shapes that leave the canvas.
    #[arg(long, default_value = None)]
    pub policy: Option<BoundsPolicy>,

    /// Path to the config file. Defaults to "lcd.toml" if it exists.
    #[arg(short, long, default_value = None)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct DemoArgs {
    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Seconds to wait between the scripted steps.
    #[arg(long, default_value = None)]
    pub delay: Option<f64>,

    /// How many random triangles to draw. Endless if not set.
    #[arg(short, long, default_value = None)]
    pub iterations: Option<u64>,

    /// Seed for the random triangles.
    #[arg(long, default_value = None)]
    pub seed: Option<u64>,

    /// Where to draw.
    #[arg(long, default_value = None)]
    pub sink: Option<SinkKind>,

    /// Output path for the png sink.
    #[arg(short, long, default_value = None)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct ShotArgs {
    /// Path to the PNG file to write.
    pub out: PathBuf,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}
