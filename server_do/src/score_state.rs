use js_sys::Date;
use proto::*;
use worker::*;

// Abstract environment (Time, Logging)
pub trait Environment {
    fn now(&self) -> u64; // ms
    fn log(&self, msg: String);
}

pub struct WasmEnv;

impl Environment for WasmEnv {
    fn now(&self) -> u64 {
        Date::now() as u64
    }

    fn log(&self, msg: String) {
        console_log!("{}", msg);
    }
}

/// What the Durable Object should answer, before it becomes a `Response`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreReply {
    /// 200 with a JSON body
    Json(String),
    /// 200 with no body
    Empty,
    /// 400 with a reason
    BadRequest(String),
    /// 404
    NotFound,
    /// 500
    Internal(String),
}

/// Points in a record, widened so client-sent maxima cannot overflow
fn total(score: &ScoreSnapshot) -> u64 {
    u64::from(score.player1) + u64::from(score.player2)
}

/// Server-owned score record. Last write wins; no validation against the
/// previous value.
pub struct ScoreStore {
    pub env: Box<dyn Environment>,
    pub record: ScoreSnapshot,
    pub updated_at_ms: Option<u64>,
    pub updates: u64,
}

impl ScoreStore {
    pub fn new(env: Box<dyn Environment>) -> Self {
        Self {
            env,
            record: ScoreSnapshot::default(),
            updated_at_ms: None,
            updates: 0,
        }
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        self.record
    }

    /// Overwrite the record with a client report
    pub fn apply(&mut self, update: ScoreUpdate) -> ScoreSnapshot {
        let next = ScoreSnapshot::from(update);
        if total(&next) < total(&self.record) {
            self.env.log(format!(
                "DO: Score went backwards ({} - {} -> {} - {}), assuming a new session",
                self.record.player1, self.record.player2, next.player1, next.player2
            ));
        }

        self.record = next;
        self.updates += 1;
        self.updated_at_ms = Some(self.env.now());

        self.env.log(format!(
            "DO: Score now {} - {} (update #{})",
            next.player1, next.player2, self.updates
        ));
        next
    }

    /// Route one request. `body` is only read for the update endpoint.
    pub fn handle(&mut self, method: &Method, path: &str, body: &str) -> ScoreReply {
        match (method, path) {
            (Method::Get, SCORE_PATH) => match self.snapshot().to_json() {
                Ok(json) => ScoreReply::Json(json),
                Err(e) => ScoreReply::Internal(e.to_string()),
            },
            (Method::Post, UPDATE_SCORE_PATH) => match ScoreUpdate::from_json(body) {
                Ok(update) => {
                    self.apply(update);
                    ScoreReply::Empty
                }
                Err(e) => {
                    self.env.log(format!("DO: Rejecting score update: {e}"));
                    ScoreReply::BadRequest(e.to_string())
                }
            },
            _ => ScoreReply::NotFound,
        }
    }
}
