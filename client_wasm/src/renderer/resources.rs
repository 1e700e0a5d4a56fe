use crate::camera::{Camera, CameraUniform};
use crate::scene::InstanceData;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Paddles occupy instances 0..2, the ball instance 2
pub const PADDLE_INSTANCES: std::ops::Range<u32> = 0..2;
pub const BALL_INSTANCES: std::ops::Range<u32> = 2..3;

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Scene Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * BALL_INSTANCES.end as usize) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
    }
}
