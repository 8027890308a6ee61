//! Field state and core simulation types

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::tick::advance_particle;

/// An RGBA color with byte channels and a fractional alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One simulated moving point
///
/// Radius and color are fixed at creation. Velocity signs flip only at
/// viewport edge crossings; position moves by velocity once per tick plus
/// any pointer repulsion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }
}

/// Latest known pointer location and its influence radius
///
/// Shared between the input layer and the tick: move events set the
/// position, leave events clear it. Single-threaded, so no locking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// `None` while the pointer is outside the viewport
    pub pos: Option<Vec2>,
    /// Repulsion reach, derived from the viewport dimensions
    pub radius: f32,
}

impl Pointer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: None,
            radius: Self::influence_radius(width, height),
        }
    }

    fn influence_radius(width: f32, height: f32) -> f32 {
        (height / INFLUENCE_DIVISOR) * (width / INFLUENCE_DIVISOR)
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Some(Vec2::new(x, y));
    }

    pub fn clear(&mut self) {
        self.pos = None;
    }

    /// Recompute the influence radius for new viewport dimensions
    pub fn resize(&mut self, width: f32, height: f32) {
        self.radius = Self::influence_radius(width, height);
    }
}

/// Exclusive owner of the particle set and the viewport dimensions
#[derive(Debug, Clone)]
pub struct Field {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl Field {
    /// Create a field and populate it from viewport area
    ///
    /// Count is `floor(width * height / 9000)`; a degenerate viewport yields
    /// an empty, inert field.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replace the particle set from fresh random draws
    fn populate(&mut self) {
        let count = (self.width * self.height / PARTICLE_DENSITY_DIVISOR).floor() as usize;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let radius = self.rng.random::<f32>() * RADIUS_SPAN + MIN_RADIUS;
            // Spawn inside a 2-radius margin on each edge. The literal
            // formula is kept even when the margin exceeds the viewport.
            let x = self.rng.random::<f32>() * (self.width - radius * 4.0) + radius * 2.0;
            let y = self.rng.random::<f32>() * (self.height - radius * 4.0) + radius * 2.0;
            let vx = self.rng.random::<f32>() * (MAX_DRIFT * 2.0) - MAX_DRIFT;
            let vy = self.rng.random::<f32>() * (MAX_DRIFT * 2.0) - MAX_DRIFT;
            self.particles.push(Particle::new(
                Vec2::new(x, y),
                Vec2::new(vx, vy),
                radius,
                PARTICLE_COLOR,
            ));
        }
    }

    /// Advance every particle by one tick
    pub fn advance(&mut self, pointer: &Pointer) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            advance_particle(particle, pointer, width, height);
        }
    }

    /// Connective line segments for the current particle positions
    pub fn links(&self) -> Vec<super::Link> {
        super::link_segments(&self.particles, self.width, self.height)
    }

    /// Adopt new viewport dimensions and rebuild the particle set
    ///
    /// Prior positions and velocities are discarded; the set is resized to
    /// the new viewport area.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    #[cfg(test)]
    pub(crate) fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }
}
