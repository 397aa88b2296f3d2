use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::collaborators::ObstacleSource;
use crate::components::body::{BodySpec, GiftInfo};
use crate::components::obstacle::Obstacle;
use crate::core::rng::Rng;
use crate::error::SimError;

/// The gift list, loaded from JSON at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GiftManifest {
    pub gifts: Vec<GiftInfo>,
}

impl GiftManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// One body spec per gift, in list order. Keys become `"{id}-{index}"`
    /// so duplicate entries stay distinguishable, and each gift gets one of
    /// three box proportions by position in the list.
    pub fn to_specs(&self, rng: &mut Rng) -> Vec<BodySpec> {
        self.gifts
            .iter()
            .enumerate()
            .map(|(index, gift)| {
                let mut info = gift.clone();
                info.id = format!("{}-{}", gift.id, index);
                BodySpec::new(info, box_size(index, rng))
            })
            .collect()
    }
}

/// Box proportions cycle cube-ish, tall, flat.
fn box_size(index: usize, rng: &mut Rng) -> Vec3 {
    match index % 3 {
        0 => Vec3::new(rng.range(0.8, 1.2), rng.range(0.8, 1.2), rng.range(0.8, 1.2)),
        1 => Vec3::new(rng.range(0.6, 0.9), rng.range(1.0, 1.4), rng.range(0.6, 0.9)),
        _ => Vec3::new(rng.range(1.0, 1.4), rng.range(0.6, 0.9), rng.range(0.8, 1.1)),
    }
}

/// Static scene layout: the obstacle registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl SceneManifest {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ObstacleSource for SceneManifest {
    fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
