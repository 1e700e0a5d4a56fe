//! Input latch for the keyboard paddle
//!
//! Key events write, the tick driver reads. Each flag is a single atomic so a
//! read never observes a half-applied write, whichever thread the events come from.

use std::sync::atomic::{AtomicBool, Ordering};

/// Copy of the latch taken at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }
}

/// Up/down intent held by key presses. Last write wins.
#[derive(Debug, Default)]
pub struct InputLatch {
    up: AtomicBool,
    down: AtomicBool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_up(&self, held: bool) {
        self.up.store(held, Ordering::Release);
    }

    pub fn set_down(&self, held: bool) {
        self.down.store(held, Ordering::Release);
    }

    /// Release both directions (focus loss, pause)
    pub fn release_all(&self) {
        self.set_up(false);
        self.set_down(false);
    }

    pub fn read(&self) -> PaddleInput {
        PaddleInput {
            up: self.up.load(Ordering::Acquire),
            down: self.down.load(Ordering::Acquire),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_latch_starts_released() {
        let latch = InputLatch::new();
        assert_eq!(latch.read(), PaddleInput::default());
    }

    #[test]
    fn test_press_and_release() {
        let latch = InputLatch::new();
        latch.set_up(true);
        assert_eq!(latch.read(), PaddleInput::new(true, false));

        latch.set_down(true);
        assert_eq!(latch.read(), PaddleInput::new(true, true));

        latch.set_up(false);
        assert_eq!(latch.read(), PaddleInput::new(false, true));
    }

    #[test]
    fn test_repeated_press_is_not_queued() {
        let latch = InputLatch::new();
        latch.set_down(true);
        latch.set_down(true);
        latch.set_down(false);
        assert!(!latch.read().down, "Last physical state wins");
    }

    #[test]
    fn test_release_all() {
        let latch = InputLatch::new();
        latch.set_up(true);
        latch.set_down(true);
        latch.release_all();
        assert_eq!(latch.read(), PaddleInput::default());
    }

    #[test]
    fn test_writes_from_another_thread_are_visible() {
        let latch = Arc::new(InputLatch::new());
        let writer = Arc::clone(&latch);
        thread::spawn(move || writer.set_up(true))
            .join()
            .expect("writer thread panicked");
        assert!(latch.read().up);
    }
}
