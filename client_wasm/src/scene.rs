//! Snapshot to GPU instance conversion

use game_core::{Paddle, Snapshot};

pub const BACKGROUND: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
pub const FOREGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

/// Per-frame instances: left paddle, right paddle, ball
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneInstances {
    pub left_paddle: InstanceData,
    pub right_paddle: InstanceData,
    pub ball: InstanceData,
}

fn paddle_instance(paddle: &Paddle) -> InstanceData {
    // Rect mesh spans 0..1, so the paddle origin is its top-left corner
    InstanceData {
        transform: [paddle.x, paddle.y, paddle.width, paddle.height],
        tint: FOREGROUND,
    }
}

impl SceneInstances {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let ball = &snapshot.ball;
        Self {
            left_paddle: paddle_instance(&snapshot.player_paddle),
            right_paddle: paddle_instance(&snapshot.computer_paddle),
            // Circle mesh has unit radius around the origin
            ball: InstanceData {
                transform: [ball.pos.x, ball.pos.y, ball.radius, ball.radius],
                tint: FOREGROUND,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameState;

    #[test]
    fn test_instances_follow_snapshot() {
        let snapshot = GameState::default().snapshot();

        let scene = SceneInstances::from_snapshot(&snapshot);

        assert_eq!(scene.left_paddle.transform, [20.0, 250.0, 10.0, 100.0]);
        assert_eq!(scene.right_paddle.transform, [770.0, 250.0, 10.0, 100.0]);
        assert_eq!(scene.ball.transform, [400.0, 300.0, 10.0, 10.0]);
        assert_eq!(scene.ball.tint, FOREGROUND);
    }

    #[test]
    fn test_instance_layout_matches_vertex_attributes() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }
}
