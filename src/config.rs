use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// Simulation clock
pub const TICK_RATE: u64 = 60; // ticks per second, matched to the display refresh signal
pub const TICK_DURATION_MS: u64 = 1000 / TICK_RATE;

// Player constants
pub const STARTING_MASS: f64 = 20.0;
pub const BASE_SPEED: f64 = 300.0; // pixels per second before the mass curve
pub const MIN_SPEED: f64 = 40.0; // speed floor so heavy entities keep crawling
pub const PLAYER_SPEED_MULT: f64 = 1.25; // player outruns the bot baseline

// Dynamic game speed ramp, engages once the player gets heavy
pub const SPEED_RAMP_MASS: f64 = 500.0;
pub const SPEED_RAMP_SLOPE: f64 = 0.15;
pub const SPEED_RAMP_CAP: f64 = 1.6;

// Bot constants
pub const BOT_MIN_MASS: f64 = 8.0;
pub const BOT_MAX_MASS: f64 = 120.0;
pub const BOT_MASS_PER_LEVEL: f64 = 15.0;
pub const BOT_MAX_LEVEL: u8 = 20;

// Food constants
pub const FOOD_MASS: f64 = 1.0;
pub const FOOD_RADIUS: f64 = 5.0;

// Virus constants (static scenery, no behavior)
pub const VIRUS_COUNT: usize = 15;
pub const VIRUS_RADIUS: f64 = 40.0;

// Spawn placement
pub const SPAWN_ATTEMPTS: usize = 32;
pub const SPAWN_FALLBACK_SAMPLES: usize = 8;

// Viewport
pub const VIEWPORT_WIDTH: f64 = 1280.0;
pub const VIEWPORT_HEIGHT: f64 = 720.0;

// Server
pub const SERVER_PORT: u16 = 63012;

// Helper: mass to radius
pub fn mass_to_radius(mass: f64) -> f64 {
    mass.sqrt() * 4.0
}

/// A named bot template supplied by the configuration source. Mass comes from
/// `mass` when present, otherwise from `level` (1-20, linear scale); with
/// neither, the bot falls back to the procedural mass range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotArchetype {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

impl BotArchetype {
    pub fn spawn_mass(&self) -> Option<f64> {
        if let Some(mass) = self.mass {
            if mass > 0.0 {
                return Some(mass);
            }
        }
        self.level
            .map(|level| f64::from(level.clamp(1, BOT_MAX_LEVEL)) * BOT_MASS_PER_LEVEL)
    }
}

/// Runtime-tunable game settings. Everything here has a sane default so a
/// missing or broken config file still produces a playable game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: f64,
    pub map_height: f64,
    pub bot_count: usize,
    pub food_count: usize,
    /// Consumption eligibility ratio, must be strictly greater than 1.
    pub eat_mass_ratio: f64,
    /// Fraction of an eaten bot's mass the player absorbs.
    pub absorption: f64,
    /// Whether an eaten bot is replaced to keep the population constant.
    pub replenish_bots: bool,
    pub safe_spawn_distance: f64,
    pub bots: Vec<BotArchetype>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            map_width: 4000.0,
            map_height: 4000.0,
            bot_count: 12,
            food_count: 500,
            eat_mass_ratio: 1.1,
            absorption: 0.8,
            replenish_bots: true,
            safe_spawn_distance: 400.0,
            bots: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: GameConfig = serde_json::from_str(raw)?;
        config.sanitize();
        Ok(config)
    }

    /// Load from a JSON file. Absence or parse failure falls back to defaults
    /// so the game always starts.
    pub fn load(path: &str) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                info!(path, "no config file found, using defaults");
                return GameConfig::default();
            }
        };
        match GameConfig::from_json(&raw) {
            Ok(config) => {
                info!(path, archetypes = config.bots.len(), "loaded game config");
                config
            }
            Err(err) => {
                warn!(path, %err, "malformed config file, using defaults");
                GameConfig::default()
            }
        }
    }

    fn sanitize(&mut self) {
        let defaults = GameConfig::default();
        if !(self.eat_mass_ratio > 1.0) {
            warn!(
                value = self.eat_mass_ratio,
                "eat_mass_ratio must exceed 1, using default"
            );
            self.eat_mass_ratio = defaults.eat_mass_ratio;
        }
        if !(self.absorption > 0.0 && self.absorption <= 1.0) {
            warn!(value = self.absorption, "absorption out of range, using default");
            self.absorption = defaults.absorption;
        }
        if !(self.map_width > 0.0) {
            self.map_width = defaults.map_width;
        }
        if !(self.map_height > 0.0) {
            self.map_height = defaults.map_height;
        }
        if !(self.safe_spawn_distance >= 0.0) {
            self.safe_spawn_distance = defaults.safe_spawn_distance;
        }
    }
}
