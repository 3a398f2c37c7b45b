use serde::{Deserialize, Serialize};

// ── Input collaborator → core ──

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Pointer target in world coordinates, already translated by the input
    /// collaborator; direction is taken relative to the viewport center.
    Move { x: f64, y: f64 },
    Split,
    Eject,
    Restart,
}

// ── Core → renderer ──

#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        map_width: f64,
        map_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    },
    State {
        player: Option<PlayerView>,
        bots: Vec<BotView>,
        food: Vec<FoodView>,
        viruses: Vec<VirusView>,
        viewport_x: f64,
        viewport_y: f64,
        game_over: bool,
        score: u64,
    },
}

#[derive(Debug, Serialize, Clone)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub mass: f64,
    pub color: String,
    pub glow: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct BotView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub glow: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct FoodView {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct VirusView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}
