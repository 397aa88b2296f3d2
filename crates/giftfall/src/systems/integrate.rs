use crate::components::body::Body;

/// Explicit Euler step in per-tick units: gravity into velocity, velocity into
/// position, spin into the Euler angles.
#[inline]
pub fn integrate(body: &mut Body, gravity: f32) {
    body.velocity.y -= gravity;
    body.position += body.velocity;
    body.rotation += body.angular_velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::components::body::{BodySpec, GiftInfo};
    use glam::Vec3;

    #[test]
    fn gravity_then_translate() {
        let mut b = Body::new(BodyId(0), BodySpec::new(GiftInfo::new("a", "A"), Vec3::ONE));
        b.release(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.25, 0.0));
        let start_rot = b.rotation;
        integrate(&mut b, 0.25);
        assert_eq!(b.velocity, Vec3::new(0.5, -0.25, 0.0));
        assert_eq!(b.position, Vec3::new(0.5, 9.75, 0.0));
        assert_eq!(b.rotation, start_rot + Vec3::new(0.0, 0.25, 0.0));
    }
}
