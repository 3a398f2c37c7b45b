use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::time::{interval, Duration};
use tracing::debug;

use crate::config::*;
use crate::game::engine::{build_snapshot, SharedWorld};
use crate::game::world::CommandOutcome;
use crate::protocol::messages::{ClientMessage, ServerMessage};

#[derive(Clone)]
pub struct WsState {
    pub world: SharedWorld,
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WsState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: WsState) {
    let (mut sender, mut receiver) = socket.split();

    // Greet with the fixed world geometry so the renderer can size itself.
    let welcome = {
        let world = state.world.read().await;
        serde_json::to_string(&ServerMessage::Welcome {
            map_width: world.config.map_width,
            map_height: world.config.map_height,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        })
        .unwrap()
    };
    if sender.send(Message::Text(welcome.into())).await.is_err() {
        return;
    }

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();

    // Task: push one state snapshot per tick
    let world_clone = state.world.clone();
    let tx_clone = tx.clone();
    let send_task = tokio::spawn(async move {
        let mut tick = interval(Duration::from_millis(TICK_DURATION_MS));
        loop {
            tick.tick().await;
            let world = world_clone.read().await;
            let json = serde_json::to_string(&build_snapshot(&world)).unwrap();
            if tx_clone.send(json).is_err() {
                break;
            }
        }
    });

    // Task: forward messages from channel to websocket
    let forward_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Main loop: receive input from the client
    let world_clone = state.world.clone();
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    if let Ok(client_msg) = serde_json::from_str::<ClientMessage>(&text) {
                        match client_msg {
                            ClientMessage::Move { x, y } => {
                                let mut world = world_clone.write().await;
                                world.set_target(x, y);
                            }
                            ClientMessage::Split => {
                                let mut world = world_clone.write().await;
                                if world.split() == CommandOutcome::NotImplemented {
                                    debug!("split requested, acknowledged as a no-op");
                                }
                            }
                            ClientMessage::Eject => {
                                let mut world = world_clone.write().await;
                                if world.eject_mass() == CommandOutcome::NotImplemented {
                                    debug!("eject requested, acknowledged as a no-op");
                                }
                            }
                            ClientMessage::Restart => {
                                let mut world = world_clone.write().await;
                                world.restart();
                            }
                        }
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    // Wait for any task to finish
    tokio::select! {
        _ = send_task => {},
        _ = forward_task => {},
        _ = recv_task => {},
    }
}
