use crate::args::{DemoArgs, SinkKind};
use crate::config::{CanvasSettings, Config, DemoSettings};
use crate::demo::{run_loop, run_script};
use crate::font::MonoGlyphs;
use crate::host::{Headless, Host, RngSource, SystemClock};
use crate::png::PngSink;
use crate::sink::{DisplaySink, NullSink};
use crate::surface::DrawingSurface;
use crate::terminal::{KeyHost, TerminalSink};
use anyhow::{Context, Result};
use crossterm::style::Stylize;

pub fn cmd_demo(args: &DemoArgs) -> Result<()> {
    let config = Config::load(args.canvas.config.as_deref())?;
    let settings = DemoSettings::resolve(&config, args)?;
    let (width, height) = (settings.canvas.width, settings.canvas.height);
    let live = settings.sink == SinkKind::Terminal;

    let sink: Box<dyn DisplaySink> = match settings.sink {
        SinkKind::Terminal => Box::new(TerminalSink::open(width, height)?),
        SinkKind::Png => Box::new(PngSink::new(&settings.out, width, height)),
        SinkKind::Null => Box::new(NullSink),
    };
    let mut host: Box<dyn Host> = if live {
        Box::new(KeyHost)
    } else {
        Box::new(Headless)
    };
    let mut announce = |line: &str| {
        if live {
            log::info!("{line}");
        } else {
            println!("⌛ {line}...");
        }
    };

    let mut lcd = make_surface(&settings.canvas, sink)?;
    let done = run_and_finish(&mut lcd, &settings, host.as_mut(), &mut announce)?;

    if live {
        println!("{} drew {done} triangles", "✅".green());
    } else if settings.sink == SinkKind::Png {
        println!("{} saved to {}", "✅".green(), settings.out.display());
    } else {
        println!("✅ done");
    }
    Ok(())
}

/// Run the demo, then finish the sink even if drawing failed.
fn run_and_finish<S: DisplaySink>(
    lcd: &mut DrawingSurface<S>,
    settings: &DemoSettings,
    host: &mut dyn Host,
    announce: &mut dyn FnMut(&str),
) -> Result<u64> {
    let res = run_demo(lcd, settings, host, announce);
    // the terminal must be restored before the error is printed
    let finished = lcd.sink_mut().finish().context("finish drawing");
    let done = res?;
    finished?;
    Ok(done)
}

fn run_demo<S: DisplaySink>(
    lcd: &mut DrawingSurface<S>,
    settings: &DemoSettings,
    host: &mut dyn Host,
    announce: &mut dyn FnMut(&str),
) -> Result<u64> {
    run_script(lcd, &mut SystemClock, settings.delay, announce).context("run the scripted part")?;
    let mut random = RngSource::new(settings.seed);
    let done = run_loop(lcd, &mut random, host, settings.iterations, announce)
        .context("run the triangle loop")?;
    Ok(done)
}

/// Create a surface with the font and bounds policy from the settings.
pub(super) fn make_surface<S: DisplaySink>(
    canvas: &CanvasSettings,
    sink: S,
) -> Result<DrawingSurface<S>> {
    let glyphs = MonoGlyphs::by_name(&canvas.font)?;
    let mut lcd = DrawingSurface::new(canvas.width, canvas.height, sink)
        .context("create drawing surface")?
        .with_font(glyphs);
    lcd.set_policy(canvas.policy);
    log::info!(
        "canvas {}x{} with font {} and {:?} policy",
        canvas.width,
        canvas.height,
        canvas.font,
        canvas.policy
    );
    Ok(lcd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CanvasArgs;
    use crate::color::Color;
    use crate::sink::{FailingSink, MemorySink};

    #[test]
    fn test_make_surface() {
        let canvas = CanvasSettings {
            width: 64,
            height: 48,
            font: "10x20".to_string(),
            policy: crate::surface::BoundsPolicy::Reject,
        };
        let mut lcd = make_surface(&canvas, MemorySink::new(64, 48)).unwrap();
        assert_eq!(lcd.width(), 64);
        assert!(lcd.fill_rect(60, 0, 10, 10, Color::RED).is_err());
        lcd.print_text("a").unwrap();
        assert_eq!(lcd.cursor().x, 10);
    }

    #[test]
    fn test_make_surface_unknown_font() {
        let canvas = CanvasSettings {
            font: "7x7".to_string(),
            ..CanvasSettings::resolve(&Config::default(), &CanvasArgs::default())
        };
        assert!(make_surface(&canvas, MemorySink::new(320, 240)).is_err());
    }

    #[test]
    fn test_run_demo_null_sink() {
        let args = DemoArgs {
            canvas: CanvasArgs::default(),
            delay: Some(0.0),
            iterations: Some(20),
            seed: Some(3),
            sink: Some(SinkKind::Null),
            out: None,
        };
        let settings = DemoSettings::resolve(&Config::default(), &args).unwrap();
        let mut lcd = make_surface(&settings.canvas, MemorySink::new(320, 240)).unwrap();
        let mut host = Headless;
        let done = run_demo(&mut lcd, &settings, &mut host, &mut |_: &str| {}).unwrap();
        assert_eq!(done, 20);
        assert_eq!(lcd.sink().mirror.pixels, lcd.pixels());
    }

    #[test]
    fn test_failed_drawing_still_finishes() {
        let args = DemoArgs {
            canvas: CanvasArgs::default(),
            delay: Some(0.0),
            iterations: Some(5),
            seed: Some(3),
            sink: Some(SinkKind::Null),
            out: None,
        };
        let settings = DemoSettings::resolve(&Config::default(), &args).unwrap();
        // the canvas push and two fills go through
        let mut lcd = make_surface(&settings.canvas, FailingSink::new(3)).unwrap();
        let mut host = Headless;
        let err = run_and_finish(&mut lcd, &settings, &mut host, &mut |_: &str| {}).unwrap_err();
        assert_eq!(err.to_string(), "run the scripted part");
        assert!(err.chain().any(|e| e.to_string() == "display unplugged"));
        assert_eq!(lcd.sink().writes, 3);
        assert!(lcd.sink().finished);
    }

    #[test]
    fn test_run_and_finish_finishes_on_success() {
        let args = DemoArgs {
            canvas: CanvasArgs::default(),
            delay: Some(0.0),
            iterations: Some(2),
            seed: None,
            sink: Some(SinkKind::Null),
            out: None,
        };
        let settings = DemoSettings::resolve(&Config::default(), &args).unwrap();
        let mut lcd = make_surface(&settings.canvas, MemorySink::new(320, 240)).unwrap();
        let done = run_and_finish(&mut lcd, &settings, &mut Headless, &mut |_: &str| {}).unwrap();
        assert_eq!(done, 2);
        assert!(lcd.sink().finished);
    }
}
