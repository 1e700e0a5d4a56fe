//! Score API wire format for Pong
//!
//! JSON over HTTP between the browser client and the score service

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score read endpoint
pub const SCORE_PATH: &str = "/api/game/score";

/// Score update endpoint
pub const UPDATE_SCORE_PATH: &str = "/api/game/updateScore";

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("invalid score json: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Client to Server
// ============================================================================

/// Body of `POST /api/game/updateScore`. Player 1 is the keyboard side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    #[serde(alias = "Player1Score")]
    pub player1_score: u32,
    #[serde(alias = "Player2Score")]
    pub player2_score: u32,
}

// ============================================================================
// Server to Client
// ============================================================================

/// Body of `GET /api/game/score`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub player1: u32,
    pub player2: u32,
}

impl From<ScoreUpdate> for ScoreSnapshot {
    fn from(update: ScoreUpdate) -> Self {
        Self {
            player1: update.player1_score,
            player2: update.player2_score,
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl ScoreUpdate {
    pub fn new(player1_score: u32, player2_score: u32) -> Self {
        Self {
            player1_score,
            player2_score,
        }
    }

    pub fn to_json(&self) -> Result<String, ProtoError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ProtoError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ScoreSnapshot {
    pub fn to_json(&self) -> Result<String, ProtoError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ProtoError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_uses_camel_case_keys() {
        let json = ScoreUpdate::new(3, 1).to_json().unwrap();
        assert_eq!(json, r#"{"player1Score":3,"player2Score":1}"#);
    }

    #[test]
    fn test_update_accepts_pascal_case_keys() {
        let update = ScoreUpdate::from_json(r#"{"Player1Score":7,"Player2Score":2}"#).unwrap();
        assert_eq!(update, ScoreUpdate::new(7, 2));
    }

    #[test]
    fn test_update_rejects_malformed_body() {
        assert!(ScoreUpdate::from_json("not json").is_err());
        assert!(ScoreUpdate::from_json(r#"{"player1Score":-1,"player2Score":0}"#).is_err());
        assert!(ScoreUpdate::from_json(r#"{"player1Score":1}"#).is_err());
    }

    #[test]
    fn test_snapshot_shape() {
        let snapshot = ScoreSnapshot::from(ScoreUpdate::new(4, 5));
        assert_eq!(snapshot.to_json().unwrap(), r#"{"player1":4,"player2":5}"#);
        assert_eq!(
            ScoreSnapshot::from_json(r#"{"player1":0,"player2":0}"#).unwrap(),
            ScoreSnapshot::default()
        );
    }

    #[test]
    fn test_error_message_names_json() {
        let err = ScoreSnapshot::from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("invalid score json"));
    }
}
