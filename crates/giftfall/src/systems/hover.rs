use crate::components::body::Body;

/// Ease the render scale toward its target. Runs every step, paused or not.
#[inline]
pub fn ease_scale(body: &mut Body, smoothing: f32) {
    body.hover_scale += (body.target_scale - body.hover_scale) * smoothing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::components::body::{BodySpec, GiftInfo};
    use glam::Vec3;

    #[test]
    fn approaches_target_monotonically() {
        let mut b = Body::new(BodyId(0), BodySpec::new(GiftInfo::new("g", "G"), Vec3::ONE));
        b.target_scale = 1.15;
        let mut last = b.hover_scale;
        for _ in 0..60 {
            ease_scale(&mut b, 0.1);
            assert!(b.hover_scale > last);
            assert!(b.hover_scale <= 1.15);
            last = b.hover_scale;
        }
        assert!((b.hover_scale - 1.15).abs() < 0.001);
    }
}
