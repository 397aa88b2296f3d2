//! Read-only queries the simulation makes of the surrounding scene.
//!
//! Both are polled every step rather than subscribed to; they must be cheap.

use glam::Vec3;

use crate::components::obstacle::Obstacle;

/// The static obstacle registry built by the scene.
pub trait ObstacleSource {
    /// All obstacles, pre-built. Called once per falling body per step.
    fn obstacles(&self) -> &[Obstacle];
}

impl ObstacleSource for [Obstacle] {
    fn obstacles(&self) -> &[Obstacle] {
        self
    }
}

impl ObstacleSource for Vec<Obstacle> {
    fn obstacles(&self) -> &[Obstacle] {
        self
    }
}

/// The moving object gifts are released from.
pub trait Emitter {
    /// Current world-space release point, or `None` while the emitter is not
    /// yet in the scene. Nothing spawns while this is `None`.
    fn release_point(&self) -> Option<Vec3>;
}

impl Emitter for Option<Vec3> {
    fn release_point(&self) -> Option<Vec3> {
        *self
    }
}

impl Emitter for Vec3 {
    fn release_point(&self) -> Option<Vec3> {
        Some(*self)
    }
}
