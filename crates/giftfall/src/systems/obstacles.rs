//! Collision of falling gifts against static scene obstacles.
//!
//! Boxes are tested axis-aligned: an obstacle's `yaw` does not rotate its
//! footprint. Houses in the scene are only slightly turned, so gifts may
//! clip a rotated corner by a fraction of a unit.

use glam::Vec2;

use crate::api::config::SimConfig;
use crate::components::body::Body;
use crate::components::obstacle::Obstacle;

/// Resolve `body` against every obstacle in turn. Returns how many it touched.
pub fn resolve_obstacles(body: &mut Body, obstacles: &[Obstacle], config: &SimConfig) -> usize {
    let mut hits = 0;
    for obstacle in obstacles {
        let y = body.position.y;
        if y < config.min_obstacle_y || y > obstacle.height() {
            continue;
        }
        let center = obstacle.center();
        let hit = match *obstacle {
            Obstacle::Cylinder { radius, .. } => resolve_cylinder(body, center, radius, config),
            Obstacle::Box { width, depth, .. } => resolve_box(body, center, width, depth, config),
        };
        if hit {
            hits += 1;
        }
    }
    hits
}

fn resolve_cylinder(body: &mut Body, center: Vec2, radius: f32, config: &SimConfig) -> bool {
    let offset = Vec2::new(body.position.x, body.position.z) - center;
    let dist = offset.length();
    let reach = radius + config.body_radius;
    if dist >= reach {
        return false;
    }

    // A body dead on the axis is pushed out along +x.
    let angle = offset.y.atan2(offset.x);
    let normal = Vec2::new(angle.cos(), angle.sin());
    let depth = reach - dist;

    body.position.x += normal.x * depth;
    body.position.z += normal.y * depth;
    body.velocity.x = normal.x * config.cylinder_bounce_speed;
    body.velocity.z = normal.y * config.cylinder_bounce_speed;
    body.velocity.y *= config.cylinder_vertical_damping;
    body.angular_velocity *= config.cylinder_spin_boost;
    true
}

fn resolve_box(body: &mut Body, center: Vec2, width: f32, depth: f32, config: &SimConfig) -> bool {
    let half_w = width / 2.0 + config.body_radius;
    let half_d = depth / 2.0 + config.body_radius;
    let dx = (body.position.x - center.x).abs();
    let dz = (body.position.z - center.y).abs();
    if dx >= half_w || dz >= half_d {
        return false;
    }

    let overlap_x = half_w - dx;
    let overlap_z = half_d - dz;
    if overlap_x < overlap_z {
        let side = if body.position.x > center.x { 1.0 } else { -1.0 };
        body.position.x += side * overlap_x;
        body.velocity.x = side * config.box_bounce_speed;
    } else {
        let side = if body.position.z > center.y { 1.0 } else { -1.0 };
        body.position.z += side * overlap_z;
        body.velocity.z = side * config.box_bounce_speed;
    }
    body.velocity.y *= config.box_vertical_damping;
    body.angular_velocity *= config.box_spin_boost;
    true
}
