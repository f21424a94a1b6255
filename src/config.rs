use crate::args::{CanvasArgs, DemoArgs, SinkKind};
use crate::surface::BoundsPolicy;
use anyhow::{Context, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The config file picked up from the working directory.
pub const CONFIG_FILE: &str = "lcd.toml";

const DEFAULT_WIDTH: u32 = 320;
const DEFAULT_HEIGHT: u32 = 240;
const DEFAULT_FONT: &str = "6x10";
const DEFAULT_DELAY: f64 = 1.0;
const DEFAULT_OUT: &str = "lcd.png";

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Canvas width in pixels.
    pub width: Option<u32>,

    /// Canvas height in pixels.
    pub height: Option<u32>,

    /// The mono font used for text.
    pub font: Option<String>,

    /// What to do with shapes that leave the canvas.
    pub policy: Option<BoundsPolicy>,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Seconds between the scripted steps.
    pub delay: Option<f64>,

    /// How many random triangles to draw. Endless if not set.
    pub iterations: Option<u64>,

    pub seed: Option<u64>,

    pub sink: Option<SinkKind>,

    /// Where the png sink saves the frame.
    pub out: Option<PathBuf>,
}

impl Config {
    /// Load the config from the given path or, if not given, from
    /// `lcd.toml` in the current directory if there is one.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }
        let path = Path::new(CONFIG_FILE);
        if path.is_file() {
            return Self::read(path);
        }
        Ok(Self::default())
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        log::debug!("reading config from {}", path.display());
        let raw = fs::read_to_string(path).context("read config file")?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("parse config file")
    }
}

/// Canvas setup after merging flags, the config file, and the defaults.
#[derive(Debug, PartialEq, Eq)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub font: String,
    pub policy: BoundsPolicy,
}

impl CanvasSettings {
    pub fn resolve(config: &Config, args: &CanvasArgs) -> Self {
        Self {
            width: args.width.or(config.width).unwrap_or(DEFAULT_WIDTH),
            height: args.height.or(config.height).unwrap_or(DEFAULT_HEIGHT),
            font: args
                .font
                .clone()
                .or_else(|| config.font.clone())
                .unwrap_or_else(|| DEFAULT_FONT.to_string()),
            policy: args.policy.or(config.policy).unwrap_or_default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct DemoSettings {
    pub canvas: CanvasSettings,
    pub delay: Duration,
    pub iterations: Option<u64>,
    pub seed: Option<u64>,
    pub sink: SinkKind,
    pub out: PathBuf,
}

impl DemoSettings {
    pub fn resolve(config: &Config, args: &DemoArgs) -> anyhow::Result<Self> {
        let demo = &config.demo;
        let delay = args.delay.or(demo.delay).unwrap_or(DEFAULT_DELAY);
        let Ok(delay) = Duration::try_from_secs_f64(delay) else {
            bail!("delay must be a non-negative number of seconds, got {delay}");
        };
        let settings = Self {
            canvas: CanvasSettings::resolve(config, &args.canvas),
            delay,
            iterations: args.iterations.or(demo.iterations),
            seed: args.seed.or(demo.seed),
            sink: args.sink.or(demo.sink).unwrap_or_default(),
            out: args
                .out
                .clone()
                .or_else(|| demo.out.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT)),
        };
        if settings.iterations.is_none() && settings.sink != SinkKind::Terminal {
            bail!(
                "an endless demo can only run on the terminal sink, pass --iterations to use the {} sink",
                settings.sink
            );
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_tmp_dir;
    use pretty_assertions::assert_eq;

    fn demo_args() -> DemoArgs {
        DemoArgs {
            canvas: CanvasArgs::default(),
            delay: None,
            iterations: None,
            seed: None,
            sink: None,
            out: None,
        }
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            width = 160
            height = 128
            font = "10x20"
            policy = "reject"

            [demo]
            delay = 0.5
            iterations = 500
            seed = 42
            sink = "png"
            out = "frame.png"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                width: Some(160),
                height: Some(128),
                font: Some("10x20".to_string()),
                policy: Some(BoundsPolicy::Reject),
                demo: DemoConfig {
                    delay: Some(0.5),
                    iterations: Some(500),
                    seed: Some(42),
                    sink: Some(SinkKind::Png),
                    out: Some(PathBuf::from("frame.png")),
                },
            }
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        assert!(Config::parse("colour = 1").is_err());
        assert!(Config::parse("[demo]\nspeed = 2").is_err());
        assert!(Config::parse("policy = \"wrap\"").is_err());
    }

    #[test]
    fn test_load_from_path() {
        let dir = make_tmp_dir();
        let path = dir.join("custom.toml");
        fs::write(&path, "width = 64\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.width, Some(64));
        assert!(Config::load(Some(&dir.join("missing.toml"))).is_err());
    }

    #[test]
    fn test_canvas_defaults() {
        let settings = CanvasSettings::resolve(&Config::default(), &CanvasArgs::default());
        assert_eq!(
            settings,
            CanvasSettings {
                width: 320,
                height: 240,
                font: "6x10".to_string(),
                policy: BoundsPolicy::Clip,
            }
        );
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::parse("width = 100\nheight = 50\n[demo]\nseed = 1\niterations = 3").unwrap();
        let mut args = demo_args();
        args.canvas.width = Some(200);
        args.seed = Some(9);
        let settings = DemoSettings::resolve(&config, &args).unwrap();
        assert_eq!(settings.canvas.width, 200);
        assert_eq!(settings.canvas.height, 50);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.iterations, Some(3));
        assert_eq!(settings.delay, Duration::from_secs(1));
        assert_eq!(settings.sink, SinkKind::Terminal);
        assert_eq!(settings.out, PathBuf::from("lcd.png"));
    }

    #[test]
    fn test_endless_needs_terminal() {
        let mut args = demo_args();
        args.sink = Some(SinkKind::Null);
        assert!(DemoSettings::resolve(&Config::default(), &args).is_err());
        args.iterations = Some(10);
        assert!(DemoSettings::resolve(&Config::default(), &args).is_ok());
        args.sink = Some(SinkKind::Terminal);
        args.iterations = None;
        assert!(DemoSettings::resolve(&Config::default(), &args).is_ok());
    }

    #[test]
    fn test_negative_delay() {
        let mut args = demo_args();
        args.delay = Some(-1.0);
        assert!(DemoSettings::resolve(&Config::default(), &args).is_err());
    }
}
