//! Per-tick particle update
//!
//! Pure position/velocity math, no drawing. The renderer consumes the
//! resulting state separately so this stays unit-testable.

use crate::consts::{REPEL_EDGE_FACTOR, REPEL_STEP};

use super::state::{Particle, Pointer};

/// Advance one particle by one tick
///
/// Order matches the frame semantics: edge reflection first, then pointer
/// repulsion, then drift by velocity.
pub fn advance_particle(particle: &mut Particle, pointer: &Pointer, width: f32, height: f32) {
    reflect_at_edges(particle, width, height);
    repel_from_pointer(particle, pointer, width, height);
    particle.pos += particle.vel;
}

/// Flip a velocity component when the particle has crossed that edge
fn reflect_at_edges(particle: &mut Particle, width: f32, height: f32) {
    if particle.pos.x > width || particle.pos.x < 0.0 {
        particle.vel.x = -particle.vel.x;
    }
    if particle.pos.y > height || particle.pos.y < 0.0 {
        particle.vel.y = -particle.vel.y;
    }
}

/// Push the particle away from a nearby pointer, one axis at a time
///
/// Each axis moves by a fixed step, gated so the particle is not pushed
/// past a `radius * 10` margin from the edge it is heading toward. The
/// margin comparisons are kept literally as-is; near small viewports they
/// clamp asymmetrically.
fn repel_from_pointer(particle: &mut Particle, pointer: &Pointer, width: f32, height: f32) {
    let Some(at) = pointer.pos else {
        return;
    };
    let delta = at - particle.pos;
    if delta.length() >= pointer.radius + particle.radius {
        return;
    }
    let margin = particle.radius * REPEL_EDGE_FACTOR;
    if at.x < particle.pos.x && particle.pos.x < width - margin {
        particle.pos.x += REPEL_STEP;
    }
    if at.x > particle.pos.x && particle.pos.x > margin {
        particle.pos.x -= REPEL_STEP;
    }
    if at.y < particle.pos.y && particle.pos.y < height - margin {
        particle.pos.y += REPEL_STEP;
    }
    if at.y > particle.pos.y && particle.pos.y > margin {
        particle.pos.y -= REPEL_STEP;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::consts::{MAX_DRIFT, PARTICLE_COLOR};
    use crate::field::{Field, Pointer};

    fn particle(pos: Vec2, vel: Vec2, radius: f32) -> Particle {
        Particle::new(pos, vel, radius, PARTICLE_COLOR)
    }

    #[test]
    fn reflection_flips_outward_velocity_once() {
        let mut p = particle(Vec2::new(800.5, 300.0), Vec2::new(0.15, 0.0), 2.0);
        advance_particle(&mut p, &Pointer::new(800.0, 600.0), 800.0, 600.0);
        assert_eq!(p.vel.x, -0.15);
        assert_eq!(p.pos.x, 800.5 - 0.15);
    }

    #[test]
    fn reflection_at_negative_edge() {
        let mut p = particle(Vec2::new(400.0, -0.1), Vec2::new(0.0, -0.2), 2.0);
        advance_particle(&mut p, &Pointer::new(800.0, 600.0), 800.0, 600.0);
        assert_eq!(p.vel.y, 0.2);
    }

    #[test]
    fn interior_particle_keeps_velocity() {
        let mut p = particle(Vec2::new(100.0, 100.0), Vec2::new(0.1, -0.05), 2.0);
        advance_particle(&mut p, &Pointer::new(800.0, 600.0), 800.0, 600.0);
        assert_eq!(p.vel, Vec2::new(0.1, -0.05));
    }

    #[test]
    fn absent_pointer_means_pure_drift() {
        let pointer = Pointer::new(800.0, 600.0);
        let start = Vec2::new(123.25, 456.5);
        let vel = Vec2::new(0.125, -0.0625);
        let mut p = particle(start, vel, 2.0);
        advance_particle(&mut p, &pointer, 800.0, 600.0);
        assert_eq!(p.pos, start + vel);
    }

    #[test]
    fn nearby_pointer_pushes_particle_away() {
        let mut pointer = Pointer::new(800.0, 600.0);
        pointer.set(400.0, 300.0);
        // Pointer is up-left of the particle, so the push is down-right
        let mut p = particle(Vec2::new(410.0, 310.0), Vec2::ZERO, 2.0);
        advance_particle(&mut p, &pointer, 800.0, 600.0);
        assert_eq!(p.pos, Vec2::new(415.0, 315.0));
    }

    #[test]
    fn pointer_outside_influence_radius_is_ignored() {
        let mut pointer = Pointer::new(800.0, 600.0);
        pointer.radius = 30.0;
        pointer.set(400.0, 300.0);
        let mut p = particle(Vec2::new(450.0, 300.0), Vec2::ZERO, 2.0);
        advance_particle(&mut p, &pointer, 800.0, 600.0);
        assert_eq!(p.pos, Vec2::new(450.0, 300.0));
    }

    #[test]
    fn repulsion_clamps_at_edge_margin() {
        let mut pointer = Pointer::new(800.0, 600.0);
        pointer.set(30.0, 300.0);
        // Particle sits exactly at the radius*10 margin; the leftward push
        // is suppressed
        let mut p = particle(Vec2::new(20.0, 300.0), Vec2::ZERO, 2.0);
        advance_particle(&mut p, &pointer, 800.0, 600.0);
        assert_eq!(p.pos.x, 20.0);
    }

    proptest! {
        #[test]
        fn drifting_particles_stay_near_viewport(seed in any::<u64>(), ticks in 0usize..400) {
            let mut field = Field::new(400.0, 300.0, seed);
            let pointer = Pointer::new(400.0, 300.0);
            for _ in 0..ticks {
                field.advance(&pointer);
            }
            let eps = MAX_DRIFT + 1e-3;
            for p in field.particles() {
                prop_assert!(p.pos.x >= -eps && p.pos.x <= 400.0 + eps);
                prop_assert!(p.pos.y >= -eps && p.pos.y <= 300.0 + eps);
            }
        }
    }
}
