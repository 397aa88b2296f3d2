/// Simulation time and the pause gate.
/// Advanced once per step by the host-supplied delta; frozen while paused.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    elapsed: f32,
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds unless paused. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if self.paused || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
    }

    /// Seconds of unpaused simulation so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

/// Fixed timestep accumulator.
/// Turns variable host frame times into a whole number of simulation ticks.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Most ticks run for one frame; a stalled tab resumes without a catch-up burst.
    pub const MAX_TICKS_PER_FRAME: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self
            .accumulator
            .min(self.dt * Self::MAX_TICKS_PER_FRAME as f32);
        let ticks = (self.accumulator / self.dt) as u32;
        self.accumulator -= ticks as f32 * self.dt;
        ticks
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_advances_when_running() {
        let mut clock = SimulationClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.elapsed(), 0.75);
    }

    #[test]
    fn clock_frozen_while_paused() {
        let mut clock = SimulationClock::new();
        clock.advance(1.0);
        clock.set_paused(true);
        clock.advance(1.0);
        assert_eq!(clock.elapsed(), 1.0);
        clock.set_paused(false);
        clock.advance(1.0);
        assert_eq!(clock.elapsed(), 2.0);
    }

    #[test]
    fn clock_ignores_bad_deltas() {
        let mut clock = SimulationClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn one_tick_exact() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.25), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.125), 0);
        assert_eq!(ts.accumulate(0.25), 1);
        assert!((ts.alpha() - 0.5).abs() < 1e-6, "alpha was {}", ts.alpha());
    }

    #[test]
    fn caps_ticks_per_frame() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(60.0), FixedTimestep::MAX_TICKS_PER_FRAME);
    }
}
