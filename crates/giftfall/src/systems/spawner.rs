use glam::Vec3;

use crate::api::collaborators::Emitter;
use crate::api::config::SimConfig;
use crate::api::types::BodyId;
use crate::core::pool::BodyPool;
use crate::core::rng::Rng;

/// Releases one dormant body per interval from the emitter.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    /// Simulation time at which the next release is allowed.
    next_spawn_time: f32,
    interval: f32,
    /// Whether the "all delivered" message has been logged.
    exhausted: bool,
}

impl SpawnScheduler {
    pub fn new(initial_delay: f32, interval: f32) -> Self {
        Self {
            next_spawn_time: initial_delay,
            interval,
            exhausted: false,
        }
    }

    pub fn next_spawn_time(&self) -> f32 {
        self.next_spawn_time
    }

    /// Evaluate once per unpaused step. Returns the released body, if any.
    ///
    /// Does nothing before `next_spawn_time`, while the emitter has no release
    /// point, or once every body has been released.
    pub fn tick<E: Emitter + ?Sized>(
        &mut self,
        elapsed: f32,
        pool: &mut BodyPool,
        emitter: &E,
        rng: &mut Rng,
        config: &SimConfig,
    ) -> Option<BodyId> {
        if elapsed < self.next_spawn_time {
            return None;
        }
        let origin = emitter.release_point()?;
        let id = match pool.first_dormant() {
            Some(id) => id,
            None => {
                if !self.exhausted {
                    self.exhausted = true;
                    log::info!("all {} gifts delivered", pool.len());
                }
                return None;
            }
        };

        let position = origin
            + Vec3::new(
                rng.centered(config.release_jitter),
                -config.release_drop,
                rng.centered(config.release_jitter),
            );
        let velocity = Vec3::new(
            rng.centered(config.launch_spread),
            -config.launch_speed - rng.next_f32() * config.launch_speed_jitter,
            rng.centered(config.launch_spread),
        );
        let spin = Vec3::new(
            rng.centered(config.launch_spin),
            rng.centered(config.launch_spin),
            rng.centered(config.launch_spin),
        );

        let body = pool.get_mut(id)?;
        body.release(position, velocity, spin);
        self.next_spawn_time = elapsed + self.interval;
        log::debug!("released gift {} ({}) at t={:.2}", id.0, body.info.id, elapsed);
        Some(id)
    }
}
