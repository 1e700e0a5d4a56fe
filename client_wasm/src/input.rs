//! Keyboard input handling

use game_core::InputLatch;

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Pause,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(KeyAction::Up),
        "ArrowDown" | "s" | "S" => Some(KeyAction::Down),
        "p" | "P" => Some(KeyAction::Pause),
        _ => None,
    }
}

/// Write a movement key into the latch. Returns the action so the caller can
/// handle pause and suppress the browser default.
pub fn apply_key(latch: &InputLatch, key: &str, pressed: bool) -> Option<KeyAction> {
    let action = key_action(key)?;
    match action {
        KeyAction::Up => latch.set_up(pressed),
        KeyAction::Down => latch.set_down(pressed),
        KeyAction::Pause => {}
    }
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::PaddleInput;

    #[test]
    fn test_arrow_and_letter_keys_map_to_moves() {
        assert_eq!(key_action("ArrowUp"), Some(KeyAction::Up));
        assert_eq!(key_action("w"), Some(KeyAction::Up));
        assert_eq!(key_action("ArrowDown"), Some(KeyAction::Down));
        assert_eq!(key_action("S"), Some(KeyAction::Down));
        assert_eq!(key_action("p"), Some(KeyAction::Pause));
        assert_eq!(key_action("Enter"), None);
    }

    #[test]
    fn test_press_and_release_update_latch() {
        let latch = InputLatch::new();

        apply_key(&latch, "ArrowUp", true);
        apply_key(&latch, "s", true);
        assert_eq!(latch.read(), PaddleInput::new(true, true));

        apply_key(&latch, "ArrowUp", false);
        assert_eq!(latch.read(), PaddleInput::new(false, true));
    }

    #[test]
    fn test_other_keys_leave_latch_alone() {
        let latch = InputLatch::new();
        latch.set_down(true);

        assert_eq!(apply_key(&latch, "p", true), Some(KeyAction::Pause));
        assert_eq!(apply_key(&latch, "x", true), None);

        assert_eq!(latch.read(), PaddleInput::new(false, true));
    }
}
