//! Native (headless) collaborators
//!
//! There is no native window: frames are rendered to the log instead.

use std::time::Instant;

use glam::DVec2;

use super::{Clock, EventSource, PlatformEvent, Renderer};
use crate::sim::Particle;

/// Wall-clock milliseconds since construction
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&mut self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock that advances a fixed step on every read (reproducible runs)
pub struct FixedStepClock {
    now: u64,
    step_ms: u64,
}

impl FixedStepClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now: 0, step_ms }
    }
}

impl Clock for FixedStepClock {
    fn ticks_ms(&mut self) -> u64 {
        let now = self.now;
        self.now += self.step_ms;
        now
    }
}

/// Raises a single `Quit` after a fixed number of frames; `None` never quits
pub struct FrameBudget {
    remaining: Option<u64>,
    sent: bool,
}

impl FrameBudget {
    pub fn new(frames: Option<u64>) -> Self {
        Self {
            remaining: frames,
            sent: false,
        }
    }
}

impl EventSource for FrameBudget {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        match self.remaining {
            Some(0) if !self.sent => {
                self.sent = true;
                Some(PlatformEvent::Quit)
            }
            Some(0) | None => None,
            Some(ref mut n) => {
                // Called once per frame with an empty queue
                *n -= 1;
                None
            }
        }
    }
}

/// Logs a summary of the particle collection every `every` frames
pub struct LogRenderer {
    every: u32,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u32) -> Self {
        Self { every, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Mean position of the finite particles, `None` if there are none
pub fn centroid(particles: &[Particle]) -> Option<(f64, f64)> {
    let finite: Vec<_> = particles.iter().filter(|p| p.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let sum: DVec2 = finite.iter().map(|p| p.pos.as_dvec2()).sum();
    let mean = sum / finite.len() as f64;
    Some((mean.x, mean.y))
}

impl Renderer for LogRenderer {
    fn render(&mut self, particles: &[Particle]) {
        self.frames += 1;
        if self.every == 0 || self.frames % self.every as u64 != 0 {
            return;
        }

        let finite = particles.iter().filter(|p| p.is_finite()).count();
        match centroid(particles) {
            Some((cx, cy)) => log::debug!(
                "frame {}: {}/{} finite, centroid ({:.2}, {:.2})",
                self.frames,
                finite,
                particles.len(),
                cx,
                cy
            ),
            None => log::debug!("frame {}: no finite particles", self.frames),
        }
        for (i, p) in particles.iter().enumerate() {
            let fp = p.footprint();
            log::trace!(
                "  #{} at {} r={:.2} rect=({:.1}, {:.1}, {:.1}, {:.1})",
                i,
                p.pos,
                p.radius(),
                fp.x,
                fp.y,
                fp.w,
                fp.h
            );
        }
    }
}
