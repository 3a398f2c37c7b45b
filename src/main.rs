use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use cellarena::config::{self, GameConfig, SERVER_PORT};
use cellarena::game::engine;
use cellarena::server::ws;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/config.json".to_string());
    let config = GameConfig::load(&config_path);

    // Create game world
    let world = engine::create_world(config.clone());
    println!(
        "✅ Game world created ({}x{})",
        config.map_width, config.map_height
    );

    // Start game loop
    let world_clone = world.clone();
    tokio::spawn(async move {
        engine::game_loop(world_clone).await;
    });
    println!("✅ Game loop running at {} TPS", config::TICK_RATE);

    // WebSocket state
    let ws_state = ws::WsState { world };

    // Build router
    let app = Router::new()
        .route("/ws", get(ws::ws_handler).with_state(ws_state))
        .fallback_service(ServeDir::new("static"));

    let addr = format!("0.0.0.0:{}", SERVER_PORT);
    println!("🎮 Arena running at http://localhost:{}", SERVER_PORT);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
