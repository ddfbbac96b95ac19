use wgpu::util::DeviceExt;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};
use crate::scene::Quad;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl From<&Quad> for InstanceData {
    fn from(quad: &Quad) -> Self {
        let r = quad.rect;
        Self {
            transform: [
                r.pos.x as f32,
                r.pos.y as f32,
                r.size.x as f32,
                r.size.y as f32,
            ],
            tint: quad.color,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub capacity: usize,
}

const INITIAL_INSTANCES: usize = 1024;

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCES),
        capacity: INITIAL_INSTANCES,
    }
}

fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Quad Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl GameBuffers {
    /// Grow the instance buffer (by doubling) until it holds `count` quads
    pub fn ensure_capacity(&mut self, device: &Device, count: usize) {
        if count <= self.capacity {
            return;
        }
        let mut capacity = self.capacity.max(1);
        while capacity < count {
            capacity *= 2;
        }
        log::debug!("growing instance buffer to {} quads", capacity);
        self.instances = create_instance_buffer(device, capacity);
        self.capacity = capacity;
    }
}
