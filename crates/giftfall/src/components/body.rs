use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;

/// Lifecycle of a pooled body. Transitions only move forward:
/// `Dormant -> Falling -> Grounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    /// Not yet released. Invisible, skipped by physics and collisions.
    Dormant,
    /// In flight or bouncing. Integrates gravity and collides with everything.
    Falling,
    /// At rest on the ground. Frozen, but still pushes falling bodies away.
    Grounded,
}

/// Presentation metadata for a gift (shown in tooltips and the list view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl GiftInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price: None,
            url: None,
            color: None,
        }
    }
}

/// What the pool needs to create one body.
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub info: GiftInfo,
    /// Full edge lengths of the gift box.
    pub size: Vec3,
}

impl BodySpec {
    pub fn new(info: GiftInfo, size: Vec3) -> Self {
        Self { info, size }
    }
}

/// One simulated gift.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub info: GiftInfo,
    pub state: BodyState,
    pub position: Vec3,
    /// Euler angles in radians, advanced by `angular_velocity` each tick.
    pub rotation: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    /// Full edge lengths; the ground rest height is half of `size.y`.
    pub size: Vec3,
    /// Current uniform render scale.
    pub hover_scale: f32,
    /// Scale that `hover_scale` eases toward.
    pub target_scale: f32,
    pub hovered: bool,
}

impl Body {
    /// A dormant body at the origin.
    pub fn new(id: BodyId, spec: BodySpec) -> Self {
        Self {
            id,
            info: spec.info,
            state: BodyState::Dormant,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            size: spec.size,
            hover_scale: 1.0,
            target_scale: 1.0,
            hovered: false,
        }
    }

    // -- Builder pattern --

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Visible iff released.
    pub fn is_visible(&self) -> bool {
        self.state != BodyState::Dormant
    }

    pub fn is_falling(&self) -> bool {
        self.state == BodyState::Falling
    }

    /// Height of the body's center when resting on the ground.
    pub fn rest_height(&self, ground_y: f32) -> f32 {
        ground_y + self.size.y / 2.0
    }

    /// Put a dormant body into play.
    pub fn release(&mut self, position: Vec3, velocity: Vec3, angular_velocity: Vec3) {
        self.state = BodyState::Falling;
        self.position = position;
        self.velocity = velocity;
        self.angular_velocity = angular_velocity;
    }

    /// Freeze in place. Velocities become exactly zero.
    pub fn settle(&mut self) {
        self.state = BodyState::Grounded;
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }
}
