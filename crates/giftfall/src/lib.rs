pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::collaborators::{Emitter, ObstacleSource};
pub use api::config::SimConfig;
pub use api::system::GiftSystem;
pub use api::types::{BodyId, EventRecord, SimEvent};
pub use assets::manifest::{GiftManifest, SceneManifest};
pub use components::body::{Body, BodySpec, BodyState, GiftInfo};
pub use components::obstacle::Obstacle;
pub use core::pool::BodyPool;
pub use core::rng::Rng;
pub use core::time::{FixedTimestep, SimulationClock};
pub use error::SimError;
pub use renderer::instance::{build_render_buffer, RenderBuffer, RenderInstance};
