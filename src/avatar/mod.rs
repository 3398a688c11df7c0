//! Orb avatar: turns theme, mood and the chat's processing flag into scene
//! parameters, animates them over time, and projects the result to 2D.
//!
//! # Architecture
//!
//! - `params` - pure mapping from app state to rendering parameters, per-frame orb pose
//! - `particles` - the particle field surrounding the orb
//! - `scene` - camera, projection and the per-frame drawable snapshot
//!
//! Nothing here owns app state; the view layer feeds in the current stores and
//! an elapsed-time counter and draws what comes back.
mod params;
mod particles;
mod scene;

pub use params::{AvatarParams, OrbFrame, Pulse};
pub use particles::{DEFAULT_EXCLUSION_RADIUS, DEFAULT_RANGE, ParticleField, Point3};
pub use scene::{Camera, Ellipse, OrbSprite, ParticleSprite, Scene, SceneFrame, Viewport};

pub const FALLBACK_MESSAGE: &str = "Failed to load sphere visualization";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("viewport has no area ({width}x{height})")]
    EmptyViewport { width: f32, height: f32 },

    #[error("particle range must be positive and finite, got {0}")]
    InvalidRange(f32),

    #[error("no room for particles: a cube of side {range} fits inside the exclusion radius {exclusion_radius}")]
    UnplaceableParticles { range: f32, exclusion_radius: f32 },
}
