//! Mesh generation for Pong
//!
//! Unit rectangle (paddles) and unit circle (ball)

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Rectangle spanning (0, 0) to (1, 1)
pub fn create_rectangle() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [0.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 1.0, 0.0],
        },
        Vertex {
            position: [0.0, 1.0, 0.0],
        },
    ];

    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

/// Triangle fan circle of radius 1 around the origin
pub fn create_circle(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    // Centre
    vertices.push(Vertex {
        position: [0.0, 0.0, 0.0],
    });

    for i in 0..segments {
        let angle = 2.0 * std::f32::consts::PI * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [angle.cos(), angle.sin(), 0.0],
        });
    }

    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        indices.push(0);
        indices.push(current);
        indices.push(next);
    }

    (vertices, indices)
}

#[cfg(target_arch = "wasm32")]
pub use gpu::Mesh;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::Vertex;
    use wgpu::util::DeviceExt;
    use wgpu::*;

    /// Mesh data with GPU buffers
    pub struct Mesh {
        pub vertex_buffer: Buffer,
        pub index_buffer: Buffer,
        pub index_count: u32,
    }

    impl Mesh {
        pub fn new(device: &Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
            let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some(format!("{label} Vertex Buffer").as_str()),
                contents: bytemuck::cast_slice(vertices),
                usage: BufferUsages::VERTEX,
            });

            let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some(format!("{label} Index Buffer").as_str()),
                contents: bytemuck::cast_slice(indices),
                usage: BufferUsages::INDEX,
            });

            Self {
                vertex_buffer,
                index_buffer,
                index_count: indices.len() as u32,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_is_unit_square() {
        let (vertices, indices) = create_rectangle();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        for v in &vertices {
            assert!((0.0..=1.0).contains(&v.position[0]));
            assert!((0.0..=1.0).contains(&v.position[1]));
        }
    }

    #[test]
    fn test_circle_fan_closes() {
        let (vertices, indices) = create_circle(32);
        assert_eq!(vertices.len(), 33);
        assert_eq!(indices.len(), 96);

        // Last triangle wraps back to the first rim vertex
        assert_eq!(&indices[93..], &[0, 32, 1]);

        for v in &vertices[1..] {
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
        }
    }
}
