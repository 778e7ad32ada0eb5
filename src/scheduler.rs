//! Tick cadence

use crate::error::{LifeError, Result};
use std::time::{Duration, Instant};

/// What the tick callback wants next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Invokes a tick callback sequentially until it asks to stop
pub trait Scheduler {
    fn drive(&mut self, tick: &mut dyn FnMut(&mut Self) -> Result<Flow>) -> Result<()>;
}

/// Ticks at a target frame rate, sleeping out the rest of each frame
pub struct FixedRate {
    interval: Duration,
}

impl FixedRate {
    pub fn new(fps: u32) -> Result<Self> {
        Ok(Self { interval: Self::interval_for(fps)? })
    }

    pub fn set_fps(&mut self, fps: u32) -> Result<()> {
        self.interval = Self::interval_for(fps)?;
        Ok(())
    }

    pub fn fps(&self) -> u32 {
        (1.0 / self.interval.as_secs_f64()).round() as u32
    }

    fn interval_for(fps: u32) -> Result<Duration> {
        if fps == 0 {
            return Err(LifeError::InvalidFrameRate(fps));
        }
        Ok(Duration::from_secs_f64(1.0 / fps as f64))
    }
}

impl Scheduler for FixedRate {
    fn drive(&mut self, tick: &mut dyn FnMut(&mut Self) -> Result<Flow>) -> Result<()> {
        loop {
            let started = Instant::now();
            if tick(self)? == Flow::Stop {
                return Ok(());
            }
            // a tick may have changed the interval
            if let Some(rest) = self.interval.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }
}

/// Ticks exactly `n` times back to back
pub struct Frames {
    remaining: u64,
}

impl Frames {
    pub fn new(n: u64) -> Self {
        Self { remaining: n }
    }
}

impl Scheduler for Frames {
    fn drive(&mut self, tick: &mut dyn FnMut(&mut Self) -> Result<Flow>) -> Result<()> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if tick(self)? == Flow::Stop {
                break;
            }
        }
        Ok(())
    }
}
