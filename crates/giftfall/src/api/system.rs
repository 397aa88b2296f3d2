use crate::api::collaborators::{Emitter, ObstacleSource};
use crate::api::config::SimConfig;
use crate::api::types::{BodyId, SimEvent};
use crate::assets::manifest::GiftManifest;
use crate::components::body::{Body, BodySpec, BodyState, GiftInfo};
use crate::core::pool::BodyPool;
use crate::core::rng::Rng;
use crate::core::time::SimulationClock;
use crate::error::SimError;
use crate::systems::contact::repel;
use crate::systems::ground::{clamp_to_bounds, ground_contact, GroundContact};
use crate::systems::hover::ease_scale;
use crate::systems::integrate::integrate;
use crate::systems::obstacles::resolve_obstacles;
use crate::systems::spawner::SpawnScheduler;

/// The gift drop simulation.
///
/// Owns every body. The host calls [`GiftSystem::step`] once per tick and
/// reads transforms between steps; nothing outside `step` and the hover gate
/// changes body state.
pub struct GiftSystem {
    config: SimConfig,
    pool: BodyPool,
    scheduler: SpawnScheduler,
    clock: SimulationClock,
    rng: Rng,
    events: Vec<SimEvent>,
}

impl GiftSystem {
    /// Build a simulation with one dormant body per spec.
    pub fn new(config: SimConfig, specs: Vec<BodySpec>) -> Result<Self, SimError> {
        let rng = Rng::new(config.seed);
        Self::build(config, specs, rng)
    }

    /// Build from a gift manifest, drawing box sizes from the seeded generator.
    pub fn from_manifest(config: SimConfig, manifest: &GiftManifest) -> Result<Self, SimError> {
        let mut rng = Rng::new(config.seed);
        let specs = manifest.to_specs(&mut rng);
        Self::build(config, specs, rng)
    }

    fn build(config: SimConfig, specs: Vec<BodySpec>, mut rng: Rng) -> Result<Self, SimError> {
        config.validate()?;
        if specs.len() > config.pool_capacity {
            return Err(SimError::PoolOverflow {
                requested: specs.len(),
                capacity: config.pool_capacity,
            });
        }

        let pool = BodyPool::new(specs, &mut rng);
        let scheduler = SpawnScheduler::new(config.initial_spawn_delay, config.spawn_interval);
        log::info!(
            "gift system ready: {} gifts, first drop at {:.1}s, then every {:.1}s",
            pool.len(),
            config.initial_spawn_delay,
            config.spawn_interval
        );

        Ok(Self {
            config,
            pool,
            scheduler,
            clock: SimulationClock::new(),
            rng,
            events: Vec::new(),
        })
    }

    /// Advance one tick.
    ///
    /// Unless paused: advances the clock by `dt`, lets the scheduler release
    /// a gift, then for each falling body in pool order applies gravity,
    /// inter-body repulsion, obstacle collision, ground contact and the world
    /// bounds. Hover scale eases on every call, paused or not.
    pub fn step<E, O>(&mut self, dt: f32, emitter: &E, obstacles: &O)
    where
        E: Emitter + ?Sized,
        O: ObstacleSource + ?Sized,
    {
        self.events.clear();
        let paused = self.clock.is_paused();

        if !paused {
            self.clock.advance(dt);
            if let Some(id) = self.scheduler.tick(
                self.clock.elapsed(),
                &mut self.pool,
                emitter,
                &mut self.rng,
                &self.config,
            ) {
                self.events.push(SimEvent::Spawned(id));
            }
        }

        let obstacles = obstacles.obstacles();
        let config = &self.config;
        let bodies = self.pool.as_mut_slice();

        for i in 0..bodies.len() {
            if !paused && bodies[i].is_falling() {
                integrate(&mut bodies[i], config.gravity);
                repel(bodies, i, config, &mut self.rng);

                let body = &mut bodies[i];
                resolve_obstacles(body, obstacles, config);
                match ground_contact(body, config) {
                    GroundContact::Bounced(impact) => {
                        self.events.push(SimEvent::Bounced { id: body.id, impact });
                    }
                    GroundContact::Settled => {
                        log::debug!("gift {} settled at ({:.2}, {:.2})", body.id.0, body.position.x, body.position.z);
                        self.events.push(SimEvent::Settled(body.id));
                    }
                    GroundContact::None | GroundContact::Settling => {}
                }
                clamp_to_bounds(body, config);
            }

            if bodies[i].is_visible() {
                ease_scale(&mut bodies[i], config.scale_smoothing);
            }
        }
    }

    /// Hover gate. Hovering a gift pauses the whole simulation and grows that
    /// gift; un-hovering resumes. Returns `false` (and changes nothing) for an
    /// unknown id.
    pub fn set_paused(&mut self, id: BodyId, paused: bool) -> bool {
        let hover_scale = self.config.hover_scale;
        let Some(body) = self.pool.get_mut(id) else {
            log::warn!("hover on unknown gift {}", id.0);
            return false;
        };
        body.hovered = paused;
        body.target_scale = if paused { hover_scale } else { 1.0 };
        self.clock.set_paused(paused);
        true
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Seconds of unpaused simulation.
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn next_spawn_time(&self) -> f32 {
        self.scheduler.next_spawn_time()
    }

    /// Released gifts (falling or grounded), for rendering and picking.
    pub fn active_bodies(&self) -> impl Iterator<Item = &Body> {
        self.pool.active()
    }

    /// Every pooled gift, dormant ones included.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.pool.iter()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.pool.get(id)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&Body> {
        self.pool.find_by_key(key)
    }

    /// Edit a gift's presentation metadata. Kinematics are out of reach.
    pub fn update_gift_info(&mut self, key: &str, edit: impl FnOnce(&mut GiftInfo)) -> bool {
        match self.pool.find_by_key_mut(key) {
            Some(body) => {
                edit(&mut body.info);
                true
            }
            None => false,
        }
    }

    /// Events raised by the most recent `step`.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Number of gifts not yet released.
    pub fn remaining(&self) -> usize {
        self.pool.count(BodyState::Dormant)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
