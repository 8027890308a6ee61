//! Launch Field - interactive landing page engine
//!
//! Core modules:
//! - `field`: Deterministic particle simulation (drift, boundary reflection,
//!   pointer repulsion, connective links)
//! - `renderer`: Drawing abstraction and the canvas-2d backend
//! - `countdown`: Launch countdown formatter
//! - `form`: Email subscription validation
//! - `api`: Generative-text skill suggestion client

pub mod api;
pub mod countdown;
pub mod field;
pub mod form;
pub mod renderer;

pub use field::{Field, Pointer};

/// Engine tuning constants
pub mod consts {
    use crate::field::Rgba;

    /// Viewport area per particle (count = area / divisor)
    pub const PARTICLE_DENSITY_DIVISOR: f32 = 9000.0;
    /// Particle radius is uniform in [MIN_RADIUS, MIN_RADIUS + RADIUS_SPAN)
    pub const MIN_RADIUS: f32 = 1.0;
    pub const RADIUS_SPAN: f32 = 2.0;
    /// Velocity components are uniform in [-MAX_DRIFT, MAX_DRIFT)
    pub const MAX_DRIFT: f32 = 0.2;

    /// Each viewport dimension is divided by this to derive the pointer
    /// influence radius
    pub const INFLUENCE_DIVISOR: f32 = 110.0;
    /// Per-axis push applied to a particle inside the influence radius
    pub const REPEL_STEP: f32 = 5.0;
    /// Repulsion stops moving a particle once it is within
    /// `radius * REPEL_EDGE_FACTOR` of the edge it is pushed toward
    pub const REPEL_EDGE_FACTOR: f32 = 10.0;

    /// Each viewport dimension is divided by this before forming the
    /// squared-distance link threshold
    pub const LINK_RANGE_DIVISOR: f32 = 7.0;
    /// Link opacity is `1 - d2 / LINK_FADE_DIVISOR` (unclamped)
    pub const LINK_FADE_DIVISOR: f32 = 20000.0;
    pub const LINK_WIDTH: f32 = 1.0;

    /// Particle fill (orange)
    pub const PARTICLE_COLOR: Rgba = Rgba::new(249, 115, 22, 0.8);
    /// Link stroke base color (amber); alpha comes from the fade formula
    pub const LINK_COLOR: Rgba = Rgba::new(251, 191, 36, 1.0);

    /// Days until launch, measured from first page load
    pub const LAUNCH_OFFSET_DAYS: u64 = 90;
    /// Countdown refresh period
    pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;

    /// How long the thank-you message stays visible
    pub const FORM_OK_CLEAR_MS: i32 = 5000;
    /// How long the validation-error message stays visible
    pub const FORM_ERR_CLEAR_MS: i32 = 3000;
}
