use bytemuck::{Pod, Zeroable};

use crate::components::body::{Body, BodyState};

/// Per-gift render data written to shared memory for the JS renderer.
/// Must match the JS protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler angles in radians (XYZ order).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Box edge lengths.
    pub size_x: f32,
    pub size_y: f32,
    pub size_z: f32,
    /// Uniform hover scale.
    pub scale: f32,
    /// Body id, for mapping a picked instance back to its gift.
    pub body: f32,
    /// 1.0 while falling, 2.0 once grounded.
    pub state: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_body(body: &Body) -> Self {
        Self {
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
            rot_x: body.rotation.x,
            rot_y: body.rotation.y,
            rot_z: body.rotation.z,
            size_x: body.size.x,
            size_y: body.size.y,
            size_z: body.size.z,
            scale: body.hover_scale,
            body: body.id.0 as f32,
            state: match body.state {
                BodyState::Dormant => 0.0,
                BodyState::Falling => 1.0,
                BodyState::Grounded => 2.0,
            },
        }
    }
}

/// Render buffer holding one instance per visible gift.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// The instances as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild `buffer` from the pool. Dormant bodies are invisible and skipped.
pub fn build_render_buffer<'a>(bodies: impl Iterator<Item = &'a Body>, buffer: &mut RenderBuffer) {
    buffer.clear();
    for body in bodies {
        if body.is_visible() {
            buffer.push(RenderInstance::from_body(body));
        }
    }
}
