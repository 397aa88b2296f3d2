use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A static collidable shape contributed by the scene (trees, houses).
/// Positioned on the ground plane; `x`/`z` is the footprint center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Obstacle {
    /// Upright cylinder (tree trunk plus canopy).
    Cylinder {
        x: f32,
        z: f32,
        radius: f32,
        height: f32,
    },
    /// Oriented box (house). `yaw` is recorded but collision treats the box
    /// as axis-aligned.
    Box {
        x: f32,
        z: f32,
        #[serde(default = "default_footprint")]
        width: f32,
        #[serde(default = "default_footprint")]
        depth: f32,
        #[serde(default = "default_height")]
        height: f32,
        #[serde(default)]
        yaw: f32,
    },
}

fn default_footprint() -> f32 {
    4.0
}

fn default_height() -> f32 {
    10.0
}

impl Obstacle {
    pub fn cylinder(center: Vec2, radius: f32, height: f32) -> Self {
        Obstacle::Cylinder {
            x: center.x,
            z: center.y,
            radius,
            height,
        }
    }

    pub fn aabb(center: Vec2, width: f32, depth: f32, height: f32) -> Self {
        Obstacle::Box {
            x: center.x,
            z: center.y,
            width,
            depth,
            height,
            yaw: 0.0,
        }
    }

    pub fn with_yaw(self, yaw: f32) -> Self {
        match self {
            Obstacle::Box { x, z, width, depth, height, .. } => Obstacle::Box {
                x,
                z,
                width,
                depth,
                height,
                yaw,
            },
            other => other,
        }
    }

    /// Footprint center on the ground plane as (x, z).
    pub fn center(&self) -> Vec2 {
        match *self {
            Obstacle::Cylinder { x, z, .. } | Obstacle::Box { x, z, .. } => Vec2::new(x, z),
        }
    }

    /// Top of the obstacle; bodies above it pass over.
    pub fn height(&self) -> f32 {
        match *self {
            Obstacle::Cylinder { height, .. } | Obstacle::Box { height, .. } => height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tagged_shapes() {
        let json = r#"[
            { "type": "cylinder", "x": 1.0, "z": 2.0, "radius": 2.0, "height": 6.5 },
            { "type": "box", "x": -5.0, "z": 0.0, "width": 5.0, "depth": 4.5, "height": 7.0, "yaw": 0.1 }
        ]"#;
        let shapes: Vec<Obstacle> = serde_json::from_str(json).unwrap();
        assert_eq!(shapes[0], Obstacle::cylinder(Vec2::new(1.0, 2.0), 2.0, 6.5));
        match shapes[1] {
            Obstacle::Box { width, yaw, .. } => {
                assert_eq!(width, 5.0);
                assert_eq!(yaw, 0.1);
            }
            _ => panic!("expected box"),
        }
    }

    #[test]
    fn box_defaults_fill_missing_dimensions() {
        let shape: Obstacle = serde_json::from_str(r#"{ "type": "box", "x": 0.0, "z": 0.0 }"#).unwrap();
        assert_eq!(shape, Obstacle::aabb(Vec2::ZERO, 4.0, 4.0, 10.0));
    }

    #[test]
    fn with_yaw_leaves_cylinders_alone() {
        let c = Obstacle::cylinder(Vec2::ZERO, 1.0, 3.0);
        assert_eq!(c.with_yaw(0.5), c);
    }
}
