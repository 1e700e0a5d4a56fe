use std::cell::RefCell;
use worker::*;

pub mod score_state;
use score_state::{ScoreReply, ScoreStore, WasmEnv};


/// Owns the one score record the game reports into and the page reads back
#[durable_object]
pub struct ScoreDO {
    #[allow(dead_code)]
    state: State,
    #[allow(dead_code)]
    env: Env,
    store: RefCell<ScoreStore>,
}

impl DurableObject for ScoreDO {
    fn new(state: State, env: Env) -> Self {
        Self {
            state,
            env,
            store: RefCell::new(ScoreStore::new(Box::new(WasmEnv))),
        }
    }

    async fn fetch(&self, mut req: Request) -> Result<Response> {
        let method = req.method();
        let path = req.path();

        let body = if method == Method::Post {
            match req.text().await {
                Ok(body) => body,
                Err(err) => {
                    console_error!("DO: Failed to read request body: {:?}", err);
                    return Response::error("Failed to read request body", 400);
                }
            }
        } else {
            String::new()
        };

        // Borrow only after the await
        let reply = self.store.borrow_mut().handle(&method, &path, &body);

        match reply {
            ScoreReply::Json(json) => {
                let mut resp = Response::ok(json)?;
                resp.headers_mut()
                    .set("Content-Type", proto::JSON_CONTENT_TYPE)?;
                Ok(resp)
            }
            ScoreReply::Empty => Response::empty(),
            ScoreReply::BadRequest(reason) => Response::error(reason, 400),
            ScoreReply::NotFound => Response::error("Not found", 404),
            ScoreReply::Internal(reason) => {
                console_error!("DO: {}", reason);
                Response::error(reason, 500)
            }
        }
    }
}
