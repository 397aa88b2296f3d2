use crate::api::config::SimConfig;
use crate::components::body::Body;

/// What happened at the ground this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    /// Still airborne.
    None,
    /// Bounced; carries the vertical speed at impact.
    Bounced(f32),
    /// Too slow to bounce, spinning down.
    Settling,
    /// Came to rest this tick and is now grounded.
    Settled,
}

/// Ground plane contact: clamp, then bounce or settle, then friction.
pub fn ground_contact(body: &mut Body, config: &SimConfig) -> GroundContact {
    let rest = body.rest_height(config.ground_y);
    if body.position.y > rest {
        return GroundContact::None;
    }
    body.position.y = rest;

    let impact = body.velocity.y.abs();
    let contact = if impact > config.rest_threshold {
        body.velocity.y *= -config.bounce_damping;
        body.angular_velocity *= config.bounce_spin_damping;
        GroundContact::Bounced(impact)
    } else {
        body.velocity = glam::Vec3::ZERO;
        body.angular_velocity *= config.settle_spin_damping;
        if body.angular_velocity.length() < config.settle_epsilon {
            body.settle();
            return GroundContact::Settled;
        }
        GroundContact::Settling
    };

    body.velocity.x *= config.friction;
    body.velocity.z *= config.friction;
    contact
}

/// Soft square wall at `±world_bound` on x and z: clamp and reflect with damping.
pub fn clamp_to_bounds(body: &mut Body, config: &SimConfig) {
    let bound = config.world_bound;
    if body.position.x.abs() > bound {
        body.position.x = bound.copysign(body.position.x);
        body.velocity.x *= -config.wall_damping;
    }
    if body.position.z.abs() > bound {
        body.position.z = bound.copysign(body.position.z);
        body.velocity.z *= -config.wall_damping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::components::body::{BodySpec, BodyState, GiftInfo};
    use glam::Vec3;

    fn body_at(pos: Vec3, vel: Vec3) -> Body {
        let mut b = Body::new(BodyId(0), BodySpec::new(GiftInfo::new("g", "G"), Vec3::ONE));
        b.release(pos, vel, Vec3::new(0.01, 0.0, 0.0));
        b
    }

    #[test]
    fn airborne_untouched() {
        let cfg = SimConfig::default();
        let mut b = body_at(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.1, -0.3, 0.0));
        assert_eq!(ground_contact(&mut b, &cfg), GroundContact::None);
        assert_eq!(b.velocity, Vec3::new(0.1, -0.3, 0.0));
    }

    #[test]
    fn fast_impact_bounces_with_friction() {
        let cfg = SimConfig::default();
        let mut b = body_at(Vec3::new(0.0, 0.8, 0.0), Vec3::new(0.1, -0.5, 0.0));
        assert_eq!(ground_contact(&mut b, &cfg), GroundContact::Bounced(0.5));
        assert_eq!(b.position.y, 1.0);
        assert!((b.velocity.y - 0.2).abs() < 1e-6);
        assert!((b.velocity.x - 0.1 * cfg.friction).abs() < 1e-6);
        assert!((b.angular_velocity.x - 0.007).abs() < 1e-6);
        assert_eq!(b.state, BodyState::Falling);
    }

    #[test]
    fn slow_contact_settles_eventually() {
        let cfg = SimConfig::default();
        let mut b = body_at(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -0.005, 0.0));
        assert_eq!(ground_contact(&mut b, &cfg), GroundContact::Settling);
        assert_eq!(b.velocity, Vec3::ZERO);

        let mut ticks = 0;
        while ground_contact(&mut b, &cfg) != GroundContact::Settled {
            ticks += 1;
            assert!(ticks < 100, "never settled");
        }
        assert_eq!(b.state, BodyState::Grounded);
        assert_eq!(b.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn bound_clamps_and_reflects() {
        let cfg = SimConfig::default();
        let mut b = body_at(Vec3::new(26.0, 5.0, -30.0), Vec3::new(0.4, 0.0, -0.2));
        clamp_to_bounds(&mut b, &cfg);
        assert_eq!(b.position.x, 25.0);
        assert_eq!(b.position.z, -25.0);
        assert!((b.velocity.x - -0.2).abs() < 1e-6);
        assert!((b.velocity.z - 0.1).abs() < 1e-6);
    }
}
