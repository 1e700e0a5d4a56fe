use hecs::World;

use crate::components::*;
use crate::PaddleInput;

/// Copy the latched keyboard input onto every keyboard-controlled paddle
pub fn ingest_input(world: &mut World, input: PaddleInput) {
    for (_entity, (intent, control)) in world.query_mut::<(&mut PaddleIntent, &Control)>() {
        if *control == Control::Keyboard {
            intent.up = input.up;
            intent.down = input.down;
        }
    }
}
