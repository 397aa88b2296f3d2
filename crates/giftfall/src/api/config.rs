use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Tuning constants for the simulation, supplied once at construction.
///
/// Velocities and accelerations are in world units per tick: the integrator
/// does not scale by frame time, so the host is expected to call `step` at a
/// steady rate (`fixed_dt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // -- Host loop --
    /// Fixed tick length in seconds (default: 1/30).
    pub fixed_dt: f32,

    // -- Pool & spawning --
    /// Maximum number of gifts the pool accepts.
    pub pool_capacity: usize,
    /// Seconds between two releases.
    pub spawn_interval: f32,
    /// Simulation time of the first release (lets the emitter fly into view).
    pub initial_spawn_delay: f32,

    // -- Gravity & ground --
    pub gravity: f32,
    pub ground_y: f32,
    pub bounce_damping: f32,
    /// Horizontal velocity retention per tick of ground contact.
    pub friction: f32,
    /// Vertical speed at or below which a ground contact settles instead of bouncing.
    pub rest_threshold: f32,
    pub bounce_spin_damping: f32,
    pub settle_spin_damping: f32,
    /// Angular speed below which a settling body is declared grounded.
    pub settle_epsilon: f32,

    // -- Inter-body repulsion --
    pub collision_radius: f32,
    pub push_force: f32,
    /// Span of the random spin kick applied per contact.
    pub contact_spin: f32,

    // -- Obstacles --
    /// Planar radius of a gift when tested against obstacles.
    pub body_radius: f32,
    /// Bodies lower than this skip obstacle checks (they are resting at the base).
    pub min_obstacle_y: f32,
    pub cylinder_bounce_speed: f32,
    pub cylinder_vertical_damping: f32,
    pub cylinder_spin_boost: f32,
    pub box_bounce_speed: f32,
    pub box_vertical_damping: f32,
    pub box_spin_boost: f32,

    // -- World bounds --
    pub world_bound: f32,
    pub wall_damping: f32,

    // -- Release jitter --
    pub release_drop: f32,
    pub release_jitter: f32,
    pub launch_speed: f32,
    pub launch_speed_jitter: f32,
    pub launch_spread: f32,
    pub launch_spin: f32,

    // -- Presentation --
    pub hover_scale: f32,
    pub scale_smoothing: f32,

    /// Seed for all jitter.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 30.0,
            pool_capacity: 32,
            spawn_interval: 2.5,
            initial_spawn_delay: 5.0,
            gravity: 0.015,
            ground_y: 0.5,
            bounce_damping: 0.4,
            friction: 0.95,
            rest_threshold: 0.012,
            bounce_spin_damping: 0.7,
            settle_spin_damping: 0.9,
            settle_epsilon: 0.001,
            collision_radius: 1.2,
            push_force: 0.04,
            contact_spin: 0.01,
            body_radius: 0.6,
            min_obstacle_y: 0.5,
            cylinder_bounce_speed: 0.1,
            cylinder_vertical_damping: 0.5,
            cylinder_spin_boost: 1.2,
            box_bounce_speed: 0.15,
            box_vertical_damping: 0.6,
            box_spin_boost: 1.3,
            world_bound: 25.0,
            wall_damping: 0.5,
            release_drop: 0.5,
            release_jitter: 0.5,
            launch_speed: 0.08,
            launch_speed_jitter: 0.04,
            launch_spread: 0.1,
            launch_spin: 0.06,
            hover_scale: 1.15,
            scale_smoothing: 0.1,
            seed: 0x5EED,
        }
    }
}

fn check(
    field: &'static str,
    value: f32,
    ok: bool,
    expected: &'static str,
) -> Result<(), SimError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, value, expected })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SimError> {
    check(field, value, value > 0.0, "> 0")
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SimError> {
    check(field, value, value >= 0.0, ">= 0")
}

fn unit(field: &'static str, value: f32) -> Result<(), SimError> {
    check(field, value, (0.0..=1.0).contains(&value), "within [0, 1]")
}

impl SimConfig {
    /// Parse a config from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.pool_capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }

        positive("fixed_dt", self.fixed_dt)?;
        positive("spawn_interval", self.spawn_interval)?;
        positive("world_bound", self.world_bound)?;
        positive("settle_epsilon", self.settle_epsilon)?;

        non_negative("initial_spawn_delay", self.initial_spawn_delay)?;
        non_negative("gravity", self.gravity)?;
        non_negative("rest_threshold", self.rest_threshold)?;
        non_negative("collision_radius", self.collision_radius)?;
        non_negative("push_force", self.push_force)?;
        non_negative("body_radius", self.body_radius)?;
        non_negative("hover_scale", self.hover_scale)?;
        check("ground_y", self.ground_y, true, "a finite number")?;
        check("min_obstacle_y", self.min_obstacle_y, true, "a finite number")?;

        unit("bounce_damping", self.bounce_damping)?;
        unit("friction", self.friction)?;
        unit("wall_damping", self.wall_damping)?;
        unit("bounce_spin_damping", self.bounce_spin_damping)?;
        unit("settle_spin_damping", self.settle_spin_damping)?;
        unit("cylinder_vertical_damping", self.cylinder_vertical_damping)?;
        unit("box_vertical_damping", self.box_vertical_damping)?;
        check(
            "scale_smoothing",
            self.scale_smoothing,
            self.scale_smoothing > 0.0 && self.scale_smoothing <= 1.0,
            "within (0, 1]",
        )?;

        // A one-tick hop off the ground lands at gravity / (1 + damping) in the limit;
        // at or under the rest threshold that hop repeats forever.
        if self.rest_threshold <= self.gravity / (1.0 + self.bounce_damping) {
            log::warn!(
                "rest_threshold {} <= gravity / (1 + bounce_damping); bodies may never settle",
                self.rest_threshold
            );
        }

        Ok(())
    }
}
