use super::demo::make_surface;
use crate::args::ShotArgs;
use crate::config::{CanvasSettings, Config};
use crate::demo::run_script;
use crate::host::NoDelay;
use crate::png::PngSink;
use crate::sink::DisplaySink;
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::time::Duration;

/// Render the scripted part of the demo and save the final frame.
pub fn cmd_shot(args: &ShotArgs) -> Result<()> {
    let config = Config::load(args.canvas.config.as_deref())?;
    let canvas = CanvasSettings::resolve(&config, &args.canvas);
    let sink = PngSink::new(&args.out, canvas.width, canvas.height);
    let mut lcd = make_surface(&canvas, sink)?;
    println!("⏳️ drawing...");
    run_script(&mut lcd, &mut NoDelay, Duration::ZERO, &mut |line: &str| {
        log::info!("{line}");
    })
    .context("run the scripted part")?;
    lcd.sink_mut().finish()?;
    println!("{} saved to {}", "✅".green(), args.out.display());
    Ok(())
}
