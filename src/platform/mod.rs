//! Platform abstraction layer
//!
//! The simulation only sees three collaborators:
//! - a millisecond clock
//! - an event source that can ask the loop to stop
//! - a renderer that reads particle positions and radii
//!
//! [`FrameLoop`] wires them together: poll events, update by the elapsed
//! time, render, in that order, one frame at a time.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use crate::sim::{Particle, SimState, tick};

/// Monotonic millisecond tick source
pub trait Clock {
    fn ticks_ms(&mut self) -> u64;
}

/// Events the frame loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Stop after the current event drain; no further frames run
    Quit,
    /// Anything else the platform delivers
    Other,
}

/// Pending-event queue, drained once per frame
pub trait EventSource {
    fn poll_event(&mut self) -> Option<PlatformEvent>;
}

/// Draws the particle collection; never mutates it
pub trait Renderer {
    fn render(&mut self, particles: &[Particle]);
}

/// Owns the simulation state and the running flag
pub struct FrameLoop {
    pub state: SimState,
    last_ms: u64,
    running: bool,
    nonfinite_reported: Vec<bool>,
}

impl FrameLoop {
    pub fn new(state: SimState) -> Self {
        let count = state.particles.len();
        Self {
            state,
            last_ms: 0,
            running: false,
            nonfinite_reported: vec![false; count],
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mark the loop running with `now_ms` as the previous frame time
    pub fn start(&mut self, now_ms: u64) {
        self.last_ms = now_ms;
        self.running = true;
    }

    pub fn handle_event(&mut self, event: PlatformEvent) {
        if event == PlatformEvent::Quit {
            log::info!("Quit requested after {} frames", self.state.frame);
            self.running = false;
        }
    }

    /// Run a single frame at `now_ms`.
    ///
    /// Returns whether the loop is still running. A quit seen while draining
    /// events stops the frame before update and render.
    pub fn frame<E, R>(&mut self, now_ms: u64, events: &mut E, renderer: &mut R) -> bool
    where
        E: EventSource + ?Sized,
        R: Renderer + ?Sized,
    {
        if !self.running {
            return false;
        }

        while let Some(event) = events.poll_event() {
            self.handle_event(event);
        }
        if !self.running {
            return false;
        }

        let dt = now_ms.saturating_sub(self.last_ms) as f64 / 1000.0;
        tick(&mut self.state, dt);
        self.report_nonfinite();

        renderer.render(&self.state.particles);
        self.last_ms = now_ms;
        true
    }

    /// Blocking loop: run frames until an event stops it
    pub fn run<C, E, R>(&mut self, clock: &mut C, events: &mut E, renderer: &mut R) -> u64
    where
        C: Clock + ?Sized,
        E: EventSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let start_frame = self.state.frame;
        let now = clock.ticks_ms();
        self.start(now);

        while self.running {
            let now = clock.ticks_ms();
            self.frame(now, events, renderer);
        }

        self.state.frame - start_frame
    }

    /// Warn once per particle when its state stops being a finite number
    fn report_nonfinite(&mut self) {
        self.nonfinite_reported.resize(self.state.particles.len(), false);
        for (i, p) in self.state.particles.iter().enumerate() {
            if !p.is_finite() && !self.nonfinite_reported[i] {
                log::warn!(
                    "Particle {} left finite space at frame {}: pos {} vel {}",
                    i,
                    self.state.frame,
                    p.pos,
                    p.vel
                );
                self.nonfinite_reported[i] = true;
            }
        }
    }
}
