//! WebGPU client for Pong
//!
//! Runs the simulation locally in the page, draws it with wgpu and reports
//! score changes to the score API. The page owns the tick source: each
//! `requestAnimationFrame` callback calls [`PongClient::frame`] once.

pub mod camera;
pub mod hud;
pub mod input;
pub mod mesh;
pub mod network;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::PongClient;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::hud::Hud;
    use crate::input::{apply_key, KeyAction};
    use crate::network::HttpScoreSync;
    use crate::renderer::Renderer;
    use game_core::{Config, LocalGame};
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("Logger already set: {e}")));
        }
    }

    /// One game on one canvas
    #[wasm_bindgen]
    pub struct PongClient {
        game: LocalGame<HttpScoreSync>,
        renderer: Renderer,
        hud: Hud,
    }

    #[wasm_bindgen]
    impl PongClient {
        /// Initialize WebGPU on `canvas`. An empty `api_base` posts scores to
        /// the page origin.
        pub async fn create(canvas: HtmlCanvasElement, api_base: String) -> Result<PongClient, JsValue> {
            let config = Config::with_board(canvas.width() as f32, canvas.height() as f32);
            let board = config.board;

            let renderer = Renderer::new(canvas, board)
                .await
                .map_err(|e| JsValue::from_str(&e))?;

            let game = LocalGame::new(config, HttpScoreSync::new(&api_base));
            let mut hud = Hud::from_document();
            hud.show(game.score());

            Ok(PongClient {
                game,
                renderer,
                hud,
            })
        }

        /// Returns true when the key belongs to the game
        pub fn key_down(&mut self, key: String) -> bool {
            match apply_key(self.game.latch(), &key, true) {
                Some(KeyAction::Pause) => {
                    self.game.toggle_pause();
                    true
                }
                Some(_) => true,
                None => false,
            }
        }

        pub fn key_up(&mut self, key: String) -> bool {
            apply_key(self.game.latch(), &key, false).is_some()
        }

        /// Drop held keys, e.g. when the window loses focus
        pub fn release_keys(&mut self) {
            self.game.latch().release_all();
        }

        pub fn toggle_pause(&mut self) -> bool {
            self.game.toggle_pause()
        }

        pub fn is_paused(&self) -> bool {
            self.game.is_paused()
        }

        /// Step once and draw
        pub fn frame(&mut self) -> Result<(), JsValue> {
            let result = self.game.frame(&mut self.renderer);
            self.hud.show(self.game.score());

            result.map_err(|e| {
                log::warn!("Render failed: {e}");
                JsValue::from_str(&e)
            })
        }
    }
}
