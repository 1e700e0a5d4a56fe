//! DOM scoreboard

use game_core::Score;

pub const PLAYER_SCORE_ID: &str = "player-score";
pub const COMPUTER_SCORE_ID: &str = "computer-score";

/// Scoreboard labels, player first
pub fn score_labels(score: Score) -> (String, String) {
    (
        format!("Player: {}", score.player),
        format!("Computer: {}", score.computer),
    )
}

#[cfg(target_arch = "wasm32")]
pub use dom::Hud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::*;
    use web_sys::Element;

    /// Writes the score into the page. Missing elements are skipped.
    pub struct Hud {
        player: Option<Element>,
        computer: Option<Element>,
        shown: Option<Score>,
    }

    impl Hud {
        pub fn from_document() -> Self {
            let document = web_sys::window().and_then(|w| w.document());
            let find = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));

            let player = find(PLAYER_SCORE_ID);
            let computer = find(COMPUTER_SCORE_ID);
            if player.is_none() || computer.is_none() {
                log::warn!("Scoreboard elements missing, score will not be shown");
            }

            Self {
                player,
                computer,
                shown: None,
            }
        }

        pub fn show(&mut self, score: Score) {
            if self.shown == Some(score) {
                return;
            }

            let (player, computer) = score_labels(score);
            if let Some(el) = &self.player {
                el.set_text_content(Some(&player));
            }
            if let Some(el) = &self.computer {
                el.set_text_content(Some(&computer));
            }
            self.shown = Some(score);
        }
    }
}
