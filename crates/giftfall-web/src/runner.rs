use giftfall::{
    build_render_buffer, BodyId, EventRecord, FixedTimestep, GiftManifest, GiftSystem,
    RenderBuffer, SceneManifest, SimConfig, SimError,
};
use glam::Vec3;

/// Wires the simulation to a browser frame loop.
///
/// The page owns one `SimRunner` in a `thread_local!` and calls `tick` from
/// `requestAnimationFrame` with the raw frame delta. Variable frame times are
/// folded into fixed simulation ticks, and after each frame the render and
/// event buffers are rebuilt for zero-copy reads from JS.
pub struct SimRunner {
    system: GiftSystem,
    scene: SceneManifest,
    /// Where gifts drop from. `None` until the sleigh is on screen.
    emitter: Option<Vec3>,
    timestep: FixedTimestep,
    render_buffer: RenderBuffer,
    /// Events from every tick of the last frame.
    event_buffer: Vec<EventRecord>,
}

impl SimRunner {
    pub fn new(system: GiftSystem, scene: SceneManifest) -> Self {
        let timestep = FixedTimestep::new(system.config().fixed_dt);
        let render_buffer = RenderBuffer::with_capacity(system.len());
        Self {
            system,
            scene,
            emitter: None,
            timestep,
            render_buffer,
            event_buffer: Vec::new(),
        }
    }

    /// Build from the three JSON documents the page ships with.
    /// An empty `config_json` means all defaults.
    pub fn from_json(config_json: &str, gifts_json: &str, scene_json: &str) -> Result<Self, SimError> {
        let config = if config_json.trim().is_empty() {
            SimConfig::default()
        } else {
            SimConfig::from_json(config_json)?
        };
        let gifts = GiftManifest::from_json(gifts_json)?;
        let scene = SceneManifest::from_json(scene_json)?;
        let system = GiftSystem::from_manifest(config, &gifts)?;
        Ok(Self::new(system, scene))
    }

    /// Run one host frame.
    pub fn tick(&mut self, dt: f32) {
        self.event_buffer.clear();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.system.step(self.timestep.dt(), &self.emitter, &self.scene);
            self.event_buffer
                .extend(self.system.events().iter().map(|e| e.to_record()));
        }

        build_render_buffer(self.system.bodies(), &mut self.render_buffer);
    }

    pub fn set_emitter(&mut self, point: Vec3) {
        self.emitter = Some(point);
    }

    pub fn clear_emitter(&mut self) {
        self.emitter = None;
    }

    pub fn set_hovered(&mut self, id: u32, hovered: bool) -> bool {
        self.system.set_paused(BodyId(id), hovered)
    }

    pub fn is_paused(&self) -> bool {
        self.system.is_paused()
    }

    pub fn system(&self) -> &GiftSystem {
        &self.system
    }

    /// Gift keys in pool order, so JS can map a picked body id to its entry.
    pub fn gift_keys(&self) -> Vec<String> {
        self.system.bodies().map(|b| b.info.id.clone()).collect()
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn event_records(&self) -> &[EventRecord] {
        &self.event_buffer
    }
}
