//! Connective lines between nearby particles
//!
//! O(n^2) pairwise pass. Fine at this density (tens to low hundreds of
//! particles); a spatial grid would only change performance, not output.

use glam::Vec2;

use crate::consts::{LINK_FADE_DIVISOR, LINK_RANGE_DIVISOR};

use super::state::Particle;

/// A rendered segment between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    /// `1 - d2 / 20000`, unclamped. Values at or below zero are not drawn.
    pub opacity: f32,
}

/// Segments for every unordered particle pair within link range
///
/// The squared-distance threshold scales with viewport area:
/// `(width / 7) * (height / 7)`.
pub fn link_segments(particles: &[Particle], width: f32, height: f32) -> Vec<Link> {
    let threshold = (width / LINK_RANGE_DIVISOR) * (height / LINK_RANGE_DIVISOR);
    let mut links = Vec::new();
    for (a, pa) in particles.iter().enumerate() {
        for pb in &particles[a + 1..] {
            let d = pa.pos - pb.pos;
            let d2 = d.x * d.x + d.y * d.y;
            if d2 < threshold {
                links.push(Link {
                    from: pa.pos,
                    to: pb.pos,
                    opacity: 1.0 - d2 / LINK_FADE_DIVISOR,
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARTICLE_COLOR;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, PARTICLE_COLOR)
    }

    #[test]
    fn opacity_follows_fade_formula() {
        // 700x700 viewport: threshold = 100 * 100 = 10000.
        // Squared distance 5000 -> opacity 1 - 5000/20000 = 0.75.
        let d = 5000.0_f32.sqrt();
        let links = link_segments(&[at(100.0, 100.0), at(100.0 + d, 100.0)], 700.0, 700.0);
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.75).abs() < 1e-4);
    }

    #[test]
    fn pairs_beyond_threshold_are_not_linked() {
        // Squared distance 10000 == threshold, excluded by the strict test
        let links = link_segments(&[at(0.0, 0.0), at(100.0, 0.0)], 700.0, 700.0);
        assert!(links.is_empty());
    }

    #[test]
    fn opacity_may_go_negative_for_large_viewports() {
        // 1400x1400: threshold = 40000, so a pair at d2 = 30000 links with
        // opacity below zero; the renderer skips it.
        let d = 30000.0_f32.sqrt();
        let links = link_segments(&[at(0.0, 0.0), at(d, 0.0)], 1400.0, 1400.0);
        assert_eq!(links.len(), 1);
        assert!(links[0].opacity < 0.0);
    }

    #[test]
    fn every_unordered_pair_is_considered_once() {
        let particles = [at(0.0, 0.0), at(1.0, 0.0), at(0.0, 1.0)];
        let links = link_segments(&particles, 700.0, 700.0);
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn empty_field_yields_no_links() {
        assert!(link_segments(&[], 0.0, 0.0).is_empty());
    }
}
