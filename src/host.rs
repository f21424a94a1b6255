//! Collaborators the demo loop needs from its environment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::ControlFlow;
use std::time::Duration;

pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Returns immediately. Used when only the final frame matters.
pub struct NoDelay;

impl Clock for NoDelay {
    fn sleep(&mut self, _duration: Duration) {}
}

pub trait RandomSource {
    /// A value in `0..max`, or 0 when `max` is not positive.
    fn random(&mut self, max: i32) -> i32;
}

pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// Seeded sources produce the same sequence on every run.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl RandomSource for RngSource {
    fn random(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        self.rng.random_range(0..max)
    }
}

/// Per-iteration hook of the demo loop.
///
/// Stands for the board's button and event polling. Returning `Break`
/// ends the loop after the current iteration.
pub trait Host {
    fn update(&mut self) -> ControlFlow<()>;
}

/// Never asks to stop.
pub struct Headless;

impl Host for Headless {
    fn update(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
