//! Per-frame simulation step
//!
//! Advances every particle once, strictly in collection order and in place:
//!
//! 1. For every other particle `j`, apply the pull on `i` toward `j`, then the
//!    pull on `j` toward `i` (seeing `i`'s shifted position). Pulls are added
//!    straight onto positions; they never touch velocity. Because the outer
//!    loop visits `j` later as well, each unordered pair is applied twice per
//!    frame.
//! 2. Free flight: `x += vx * dt`, `y -= vy * dt` (screen y grows downward).
//! 3. Reflect off the window edges using the position from step 2:
//!    `x` on or past `[0, width]` mirrors the heading to `180 - θ`, `y` on or
//!    past `[0, height]` mirrors it to `-θ`. Both may fire in one frame.
//!
//! Later pairs observe positions already perturbed by earlier pairs in the
//! same frame; a parallel snapshot-based variant would give different results.

use super::gravitation::Gravitation;
use super::particle::Particle;
use super::state::SimState;

/// Advance the simulation by `dt` seconds
pub fn tick(state: &mut SimState, dt: f64) {
    step_particles(&mut state.particles, state.width, state.height, dt);
    state.frame += 1;
}

/// Frame step over a bare particle slice with the given reflection bounds
pub fn step_particles(particles: &mut [Particle], width: f64, height: f64, dt: f64) {
    let count = particles.len();

    for i in 0..count {
        for j in 0..count {
            if i != j {
                Gravitation::new(i, j).apply(particles);
            }
        }

        let p = &mut particles[i];

        // Free flight
        p.pos.x += p.vel.x_component() * dt;
        p.pos.y -= p.vel.y_component() * dt;

        reflect(p, width, height);
    }
}

/// Mirror the heading of a particle that reached a window edge
fn reflect(p: &mut Particle, width: f64, height: f64) {
    if p.pos.x >= width || p.pos.x <= 0.0 {
        let angle = p.vel.angle();
        p.vel.set_angle(180.0 - angle);
    }
    if p.pos.y >= height || p.pos.y <= 0.0 {
        let angle = p.vel.angle();
        p.vel.set_angle(-angle);
    }
}
