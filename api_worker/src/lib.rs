use proto::{SCORE_PATH, UPDATE_SCORE_PATH};
use worker::*;

// Export the Durable Object from server_do
pub use server_do::ScoreDO;

/// Durable Object namespace binding
pub const SCORES_BINDING: &str = "SCORES";

/// Every client reports into the same record
pub const SCORES_OBJECT_NAME: &str = "global";

#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    let router = Router::new();

    router
        .get_async("/", handle_index)
        .get_async(SCORE_PATH, forward_to_scores)
        .post_async(UPDATE_SCORE_PATH, forward_to_scores)
        .run(req, env)
        .await
}

async fn handle_index(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::from_html(INDEX_HTML)
}

/// Hand the request to the score Durable Object unchanged
async fn forward_to_scores(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let scores = ctx.env.durable_object(SCORES_BINDING)?;

    // Get DO stub by name (creates if doesn't exist)
    let stub = scores.get_by_name(SCORES_OBJECT_NAME)?;

    stub.fetch_with_request(req).await
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pong</title>
    <style>
        body { margin: 0; padding: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; background: #1a1a1a; color: #fff; font-family: monospace; }
        #canvas { border: 2px solid #444; background: #fff; }
        #score { margin: 10px 0; font-size: 20px; }
        #score span { margin: 0 20px; }
        #status { margin: 10px 0; padding: 10px; background: #333; border-radius: 4px; }
    </style>
</head>
<body>
    <div id="score"><span id="player-score">Player: 0</span><span id="computer-score">Computer: 0</span></div>
    <canvas id="canvas" width="800" height="600"></canvas>
    <div id="status">Loading WASM...</div>
    <div style="margin-top: 10px; font-size: 12px; color: #888;">
        Controls: Arrow Up/Down or W/S (move), P (pause)
    </div>
    <script type="module">
        import init, { PongClient } from './pkg/client_wasm.js';

        async function main() {
            try {
                await init();
                updateStatus('WASM loaded');
                showLastReported();
                const canvas = document.getElementById('canvas');
                if (!canvas) throw new Error('Canvas not found');
                const client = await PongClient.create(canvas, '');
                updateStatus('Playing');
                setupInputHandlers(client);
                startRenderLoop(client);
            } catch (error) {
                console.error('Error:', error);
                updateStatus('Error: ' + error.message);
            }
        }

        function updateStatus(msg) {
            const el = document.getElementById('status');
            if (el) el.textContent = msg;
            console.log('Status:', msg);
        }

        async function showLastReported() {
            try {
                const resp = await fetch('/api/game/score');
                if (!resp.ok) return;
                const score = await resp.json();
                updateStatus('Last reported score: ' + score.player1 + ' - ' + score.player2);
            } catch (e) {
                console.error('Score read error:', e);
            }
        }

        function setupInputHandlers(client) {
            window.addEventListener('keydown', (e) => {
                if (e.repeat && (e.key === 'p' || e.key === 'P')) return;
                if (client.key_down(e.key)) e.preventDefault();
                if (e.key === 'p' || e.key === 'P') {
                    updateStatus(client.is_paused() ? 'Paused' : 'Playing');
                }
            });
            window.addEventListener('keyup', (e) => { client.key_up(e.key); });
            window.addEventListener('blur', () => client.release_keys());
        }

        function startRenderLoop(client) {
            function render() {
                try { client.frame(); } catch (e) { console.error('Render error:', e); }
                requestAnimationFrame(render);
            }
            requestAnimationFrame(render);
        }

        main();
    </script>
</body>
</html>"#;
