//! Score reporting to the score API

use game_core::Score;
use proto::{ScoreUpdate, UPDATE_SCORE_PATH};

/// Wire form of a local score. Player 1 is the keyboard paddle.
pub fn score_update(score: Score) -> ScoreUpdate {
    ScoreUpdate::new(score.player, score.computer)
}

/// Join an API base (possibly empty, possibly with a trailing slash) and a path
pub fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

pub fn update_score_url(api_base: &str) -> String {
    endpoint(api_base, UPDATE_SCORE_PATH)
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpScoreSync;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::*;
    use game_core::{ScoreSync, SyncError};
    use proto::JSON_CONTENT_TYPE;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    fn transport(e: JsValue) -> SyncError {
        SyncError::Transport(format!("{e:?}"))
    }

    /// POSTs each score change without waiting for the reply
    pub struct HttpScoreSync {
        url: String,
    }

    impl HttpScoreSync {
        pub fn new(api_base: &str) -> Self {
            Self {
                url: update_score_url(api_base),
            }
        }
    }

    impl ScoreSync for HttpScoreSync {
        fn report(&mut self, score: Score) -> Result<(), SyncError> {
            let body = score_update(score)
                .to_json()
                .map_err(|e| SyncError::Encode(e.to_string()))?;

            let window =
                web_sys::window().ok_or_else(|| SyncError::Transport("no window".to_string()))?;

            let headers = Headers::new().map_err(transport)?;
            headers
                .set("Content-Type", JSON_CONTENT_TYPE)
                .map_err(transport)?;

            let init = RequestInit::new();
            init.set_method("POST");
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(&body));

            let request = Request::new_with_str_and_init(&self.url, &init).map_err(transport)?;
            let pending = JsFuture::from(window.fetch_with_request(&request));

            // Fire and forget: failures after this point are only logged
            wasm_bindgen_futures::spawn_local(async move {
                match pending.await {
                    Ok(resp) => {
                        let resp: Response = resp.unchecked_into();
                        if !resp.ok() {
                            log::warn!("Score sync rejected: HTTP {}", resp.status());
                        }
                    }
                    Err(e) => log::warn!("Score sync failed: {:?}", e),
                }
            });

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_maps_to_player1() {
        let update = score_update(Score {
            player: 2,
            computer: 7,
        });
        assert_eq!(update, ScoreUpdate::new(2, 7));
        assert_eq!(
            update.to_json().unwrap(),
            r#"{"player1Score":2,"player2Score":7}"#
        );
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        assert_eq!(update_score_url(""), "/api/game/updateScore");
        assert_eq!(
            update_score_url("https://pong.example.com/"),
            "https://pong.example.com/api/game/updateScore"
        );
        assert_eq!(
            endpoint("http://localhost:8787", proto::SCORE_PATH),
            "http://localhost:8787/api/game/score"
        );
    }
}
