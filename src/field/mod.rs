//! Deterministic particle field simulation
//!
//! All simulation logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host owns a [`Field`] and a [`Pointer`], advances the field once per
//! animation frame, and hands the results to the renderer.

pub mod links;
pub mod state;
pub mod tick;

pub use links::{Link, link_segments};
pub use state::{Field, Particle, Pointer, Rgba};
pub use tick::advance_particle;
