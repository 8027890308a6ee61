//! Frame rendering over an abstract drawing surface
//!
//! The simulation never draws; this module walks the field state and issues
//! clear / circle / line calls against a [`DrawSurface`]. The browser
//! backend lives in [`canvas`]; tests use a recording surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::consts::{LINK_COLOR, LINK_WIDTH};
use crate::field::{Field, Link, Particle, Rgba};

/// Minimal drawing surface the renderer needs
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &Rgba, width: f32);
}

/// Draw one frame: clear, particles, then connective links
pub fn render_frame<S: DrawSurface>(surface: &mut S, field: &Field) {
    surface.clear(field.width(), field.height());
    draw_particles(surface, field.particles());
    draw_links(surface, &field.links());
}

fn draw_particles<S: DrawSurface>(surface: &mut S, particles: &[Particle]) {
    for p in particles {
        surface.fill_circle(p.pos, p.radius, &p.color);
    }
}

fn draw_links<S: DrawSurface>(surface: &mut S, links: &[Link]) {
    for link in links {
        // The fade formula is unclamped; fully transparent links are skipped
        if link.opacity <= 0.0 {
            continue;
        }
        let color = LINK_COLOR.with_alpha(link.opacity);
        surface.stroke_line(link.from, link.to, &color, LINK_WIDTH);
    }
}
