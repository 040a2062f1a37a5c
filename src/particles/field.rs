//! Particle state and per-frame simulation.
//!
//! Everything here is plain data and arithmetic so it can be exercised without
//! a canvas. [`super::render`] is the only consumer that draws it.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::consts::{
    LINK_DISTANCE, LINK_MAX_ALPHA, MAX_DEVICE_PIXEL_RATIO, PARTICLE_MAX_COUNT, PARTICLE_MIN_COUNT,
    PARTICLE_SPACING_PX, PARTICLE_WRAP_MARGIN,
};
use crate::geometry::{Point, Viewport};

/// Spawn ranges (`min`, `max`) for particle attributes.
pub const RADIUS_RANGE: (f64, f64) = (1.0, 2.4);
pub const VX_RANGE: (f64, f64) = (-0.2, 0.2);
pub const VY_RANGE: (f64, f64) = (-0.18, 0.18);
pub const ALPHA_RANGE: (f64, f64) = (0.06, 0.14);

/// One drifting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Radius in CSS pixels.
    pub r: f64,
    /// Velocity per frame.
    pub vx: f64,
    pub vy: f64,
    /// Fill opacity.
    pub alpha: f64,
}

impl Particle {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance by one frame and wrap around a viewport of `w` × `h`.
    ///
    /// Leaving past the margin on one side re-enters just outside the
    /// opposite side.
    pub fn advance(&mut self, w: f64, h: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.x = wrap(self.x, w);
        self.y = wrap(self.y, h);
    }
}

fn wrap(pos: f64, extent: f64) -> f64 {
    let mut pos = pos;
    if pos < -PARTICLE_WRAP_MARGIN {
        pos = extent + PARTICLE_WRAP_MARGIN;
    }
    if pos > extent + PARTICLE_WRAP_MARGIN {
        pos = -PARTICLE_WRAP_MARGIN;
    }
    pos
}

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub alpha: f64,
}

/// Number of particles for a viewport `width` CSS pixels wide.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(width: f64) -> usize {
    let raw = (width / PARTICLE_SPACING_PX).floor().max(0.0) as usize;
    raw.clamp(PARTICLE_MIN_COUNT, PARTICLE_MAX_COUNT)
}

/// Line opacity for two particles `distance` apart, or `None` when they are
/// too far apart to be linked. Falls off linearly to zero at the threshold.
#[must_use]
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < LINK_DISTANCE { Some((1.0 - distance / LINK_DISTANCE) * LINK_MAX_ALPHA) } else { None }
}

/// Device pixel ratio capped for the backing buffer. A missing or zero ratio
/// counts as 1.
#[must_use]
pub fn capped_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 { raw.min(MAX_DEVICE_PIXEL_RATIO) } else { 1.0 }
}

/// Backing-buffer size in device pixels for `viewport` at `dpr`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn backing_size(viewport: Viewport, dpr: f64) -> (u32, u32) {
    let w = (viewport.width * dpr).floor().max(0.0) as u32;
    let h = (viewport.height * dpr).floor().max(0.0) as u32;
    (w, h)
}

fn sample<R: Rng>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    min + rng.random::<f64>() * (max - min)
}

/// The full set of particles plus the viewport they wrap within.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub viewport: Viewport,
}

impl ParticleField {
    /// Scatter [`particle_count`] particles uniformly over `viewport`.
    pub fn spawn<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        let particles = (0..particle_count(viewport.width))
            .map(|_| Particle {
                x: sample(rng, (0.0, viewport.width)),
                y: sample(rng, (0.0, viewport.height)),
                r: sample(rng, RADIUS_RANGE),
                vx: sample(rng, VX_RANGE),
                vy: sample(rng, VY_RANGE),
                alpha: sample(rng, ALPHA_RANGE),
            })
            .collect();
        Self { particles, viewport }
    }

    /// Adopt a new viewport. Particles are kept where they are; any left
    /// outside the new bounds drift back in through the wrap rule.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let Viewport { width, height } = self.viewport;
        for p in &mut self.particles {
            p.advance(width, height);
        }
    }

    /// Lines between every unordered pair closer than the link distance.
    ///
    /// Quadratic in the particle count, which is capped at 70.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let (from, to) = (a.position(), b.position());
                link_alpha(from.distance(to)).map(|alpha| Link { from, to, alpha })
            })
        })
    }
}
