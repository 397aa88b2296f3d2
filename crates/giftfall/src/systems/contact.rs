//! Soft repulsion between gifts.
//!
//! A penalty push, not an impulse solve: each falling body is nudged away
//! from every released neighbour inside `collision_radius`. Bodies are
//! resolved one at a time in pool order, so later bodies see the already
//! moved earlier ones.

use crate::api::config::SimConfig;
use crate::components::body::{Body, BodyState};
use crate::core::rng::Rng;

/// Push `bodies[index]` away from its neighbours and its falling neighbours away from it.
pub fn repel(bodies: &mut [Body], index: usize, config: &SimConfig, rng: &mut Rng) {
    if bodies[index].state != BodyState::Falling {
        return;
    }

    for other in 0..bodies.len() {
        if other == index || !bodies[other].is_visible() {
            continue;
        }

        let delta = bodies[index].position - bodies[other].position;
        let dist = delta.length();
        // Coincident centers have no direction to push along.
        if dist >= config.collision_radius || dist <= 0.0 {
            continue;
        }

        let dir = delta / dist;
        let push_x = dir.x * config.push_force;
        let push_y = dir.y * config.push_force * 0.5;
        let push_z = dir.z * config.push_force;

        let body = &mut bodies[index];
        body.velocity.x += push_x;
        body.velocity.z += push_z;
        // Only the upper body of the pair is lifted, never the lower one pushed down.
        if delta.y > 0.0 {
            body.velocity.y += push_y.abs();
        }
        body.angular_velocity.x += rng.centered(config.contact_spin);
        body.angular_velocity.z += rng.centered(config.contact_spin);

        let neighbour = &mut bodies[other];
        if neighbour.state == BodyState::Falling {
            neighbour.velocity.x -= push_x;
            neighbour.velocity.z -= push_z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::components::body::{BodySpec, GiftInfo};
    use glam::Vec3;

    fn body(i: u32, pos: Vec3) -> Body {
        let mut b = Body::new(BodyId(i), BodySpec::new(GiftInfo::new(format!("g-{}", i), "G"), Vec3::ONE));
        b.release(pos, Vec3::ZERO, Vec3::ZERO);
        b
    }

    #[test]
    fn overlapping_pair_is_pushed_apart() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(0, Vec3::new(0.5, 5.0, 0.0)), body(1, Vec3::new(0.0, 5.0, 0.0))];
        repel(&mut bodies, 0, &cfg, &mut Rng::new(1));
        assert!(bodies[0].velocity.x > 0.0);
        assert!(bodies[1].velocity.x < 0.0);
        assert_eq!(bodies[0].velocity.x, -bodies[1].velocity.x);
    }

    #[test]
    fn upper_body_is_lifted_lower_is_not() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(0, Vec3::new(0.0, 6.0, 0.0)), body(1, Vec3::new(0.0, 5.0, 0.0))];
        repel(&mut bodies, 0, &cfg, &mut Rng::new(1));
        assert!(bodies[0].velocity.y > 0.0);
        assert_eq!(bodies[1].velocity.y, 0.0);

        let mut bodies = vec![body(0, Vec3::new(0.0, 5.0, 0.0)), body(1, Vec3::new(0.0, 6.0, 0.0))];
        repel(&mut bodies, 0, &cfg, &mut Rng::new(1));
        assert_eq!(bodies[0].velocity.y, 0.0);
    }

    #[test]
    fn grounded_neighbour_does_not_move() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(0, Vec3::new(0.5, 1.0, 0.0)), body(1, Vec3::new(0.0, 1.0, 0.0))];
        bodies[1].settle();
        repel(&mut bodies, 0, &cfg, &mut Rng::new(1));
        assert!(bodies[0].velocity.x > 0.0);
        assert_eq!(bodies[1].velocity, Vec3::ZERO);
    }

    #[test]
    fn coincident_and_distant_pairs_ignored() {
        let cfg = SimConfig::default();
        let mut bodies = vec![
            body(0, Vec3::new(0.0, 5.0, 0.0)),
            body(1, Vec3::new(0.0, 5.0, 0.0)),
            body(2, Vec3::new(10.0, 5.0, 0.0)),
        ];
        repel(&mut bodies, 0, &cfg, &mut Rng::new(1));
        assert!(bodies.iter().all(|b| b.velocity == Vec3::ZERO));
        assert!(bodies.iter().all(|b| b.angular_velocity == Vec3::ZERO));
    }

    #[test]
    fn dormant_neighbours_ignored() {
        let cfg = SimConfig::default();
        let mut bodies = vec![body(0, Vec3::new(0.5, 5.0, 0.0))];
        bodies.push(Body::new(BodyId(1), BodySpec::new(GiftInfo::new("g-1", "G"), Vec3::ONE)));
        bodies[1].position = Vec3::new(0.0, 5.0, 0.0);
        repel(&mut bodies, 0, &cfg, &mut Rng::new(1));
        assert_eq!(bodies[0].velocity, Vec3::ZERO);
    }
}
