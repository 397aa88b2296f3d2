use std::f32::consts::PI;

use glam::Vec3;

use crate::api::types::BodyId;
use crate::components::body::{Body, BodySpec, BodyState};
use crate::core::rng::Rng;

/// Fixed-size arena of bodies. Created once; bodies are never added or
/// removed afterwards, only their state changes. A body's id is its index.
pub struct BodyPool {
    bodies: Vec<Body>,
}

impl BodyPool {
    /// One dormant body per spec, in order, each with a random orientation.
    pub fn new(specs: Vec<BodySpec>, rng: &mut Rng) -> Self {
        let bodies = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                let rotation = Vec3::new(
                    rng.range(0.0, PI),
                    rng.range(0.0, PI),
                    rng.range(0.0, PI),
                );
                Body::new(BodyId(i as u32), spec).with_rotation(rotation)
            })
            .collect();
        Self { bodies }
    }

    /// First dormant body in creation order. This order is the release order.
    pub fn first_dormant(&self) -> Option<BodyId> {
        self.bodies
            .iter()
            .find(|b| b.state == BodyState::Dormant)
            .map(|b| b.id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    /// Find a body by its gift key.
    pub fn find_by_key(&self, key: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.info.id == key)
    }

    pub fn find_by_key_mut(&mut self, key: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.info.id == key)
    }

    /// All bodies in pool order, dormant ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Released bodies (falling or grounded) in pool order.
    pub fn active(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_visible())
    }

    /// Index-addressed view for systems that touch pairs of bodies.
    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of bodies in the given state.
    pub fn count(&self, state: BodyState) -> usize {
        self.bodies.iter().filter(|b| b.state == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::GiftInfo;

    fn specs(n: usize) -> Vec<BodySpec> {
        (0..n)
            .map(|i| BodySpec::new(GiftInfo::new(format!("g-{}", i), "Gift"), Vec3::ONE))
            .collect()
    }

    #[test]
    fn pool_starts_all_dormant() {
        let pool = BodyPool::new(specs(4), &mut Rng::new(1));
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.count(BodyState::Dormant), 4);
        assert_eq!(pool.active().count(), 0);
        assert!(pool.iter().all(|b| b.velocity == Vec3::ZERO));
    }

    #[test]
    fn ids_match_indices() {
        let pool = BodyPool::new(specs(3), &mut Rng::new(1));
        for (i, b) in pool.iter().enumerate() {
            assert_eq!(b.id, BodyId(i as u32));
        }
    }

    #[test]
    fn first_dormant_follows_creation_order() {
        let mut pool = BodyPool::new(specs(3), &mut Rng::new(1));
        assert_eq!(pool.first_dormant(), Some(BodyId(0)));
        pool.get_mut(BodyId(0)).unwrap().release(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(pool.first_dormant(), Some(BodyId(1)));
    }

    #[test]
    fn exhausted_pool_has_no_dormant() {
        let mut pool = BodyPool::new(specs(2), &mut Rng::new(1));
        for i in 0..2 {
            pool.get_mut(BodyId(i)).unwrap().release(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        }
        assert_eq!(pool.first_dormant(), None);
    }

    #[test]
    fn find_by_key() {
        let pool = BodyPool::new(specs(3), &mut Rng::new(1));
        assert_eq!(pool.find_by_key("g-2").map(|b| b.id), Some(BodyId(2)));
        assert!(pool.find_by_key("missing").is_none());
    }

    #[test]
    fn unknown_id_is_none() {
        let pool = BodyPool::new(specs(1), &mut Rng::new(1));
        assert!(pool.get(BodyId(5)).is_none());
    }
}
