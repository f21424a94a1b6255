//! The M5 Lcd demo: a scripted sequence of screens followed by an endless
//! stream of random filled triangles.

use crate::color::Color;
use crate::error::DrawResult;
use crate::host::{Clock, Host, RandomSource};
use crate::sink::DisplaySink;
use crate::surface::DrawingSurface;
use std::time::Duration;

pub const BANNER: &str = "M5 Lcd";
pub const BANNER_TEXT: &str = "M5 Lcd text print";
pub const BANNER_GRAPHIC: &str = "M5 Lcd draw graphic";
pub const BANNER_LOOP: &str = "M5 Lcd loop";

/// Colors of the opening full-screen fills, in order.
const OPENING: [Color; 5] = [Color::WHITE, Color::RED, Color::GREEN, Color::BLUE, Color::BLACK];

/// Run the scripted part. `delay` is passed to the clock between steps.
pub fn run_script<S: DisplaySink>(
    lcd: &mut DrawingSurface<S>,
    clock: &mut dyn Clock,
    delay: Duration,
    announce: &mut dyn FnMut(&str),
) -> DrawResult<()> {
    announce(BANNER);
    for color in OPENING {
        lcd.fill_screen(color)?;
        clock.sleep(delay);
    }

    announce(BANNER_TEXT);
    lcd.fill_screen(Color::BLACK)?;
    lcd.set_cursor(10, 10);
    lcd.set_text_color(Color::WHITE)?;
    lcd.set_text_size(1)?;
    let (w, h) = (lcd.width(), lcd.height());
    lcd.print_text(&format!("Display Test! width={w} height={h}"))?;

    announce(BANNER_GRAPHIC);
    clock.sleep(delay);
    lcd.draw_rect(100, 100, 50, 50, Color::BLUE)?;
    clock.sleep(delay);
    lcd.fill_rect(100, 100, 50, 50, Color::BLUE)?;
    clock.sleep(delay);
    lcd.draw_circle(100, 100, 50, Color::RED)?;
    clock.sleep(delay);
    lcd.fill_circle(100, 100, 50, Color::RED)?;
    clock.sleep(delay);
    lcd.draw_triangle(30, 30, 180, 100, 80, 150, Color::YELLOW)?;
    clock.sleep(delay);
    lcd.fill_triangle(30, 30, 180, 100, 80, 150, Color::YELLOW)?;
    Ok(())
}

/// Draw random filled triangles until `iterations` is reached or the host
/// hook asks to stop. Returns how many triangles were drawn.
pub fn run_loop<S: DisplaySink>(
    lcd: &mut DrawingSurface<S>,
    random: &mut dyn RandomSource,
    host: &mut dyn Host,
    iterations: Option<u64>,
    announce: &mut dyn FnMut(&str),
) -> DrawResult<u64> {
    announce(BANNER_LOOP);
    let max_x = i32::try_from(lcd.width()).unwrap_or(i32::MAX) - 1;
    let max_y = i32::try_from(lcd.height()).unwrap_or(i32::MAX) - 1;
    let mut done = 0;
    while iterations.is_none_or(|limit| done < limit) {
        lcd.fill_triangle(
            random.random(max_x),
            random.random(max_y),
            random.random(max_x),
            random.random(max_y),
            random.random(max_x),
            random.random(max_y),
            random.random(0xfffe),
        )?;
        done += 1;
        if host.update().is_break() {
            log::info!("host asked to stop after {done} iterations");
            break;
        }
    }
    Ok(done)
}
