use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::config::*;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

// Fill/glow pairs for players and bots
const ENTITY_PALETTE: [(&str, &str); 10] = [
    ("#FF4136", "#FF8A80"),
    ("#FF6B35", "#FFB74D"),
    ("#FFDC00", "#FFF59D"),
    ("#2ECC40", "#A5D6A7"),
    ("#0074D9", "#81D4FA"),
    ("#B10DC9", "#CE93D8"),
    ("#F012BE", "#F48FB1"),
    ("#01FF70", "#B9F6CA"),
    ("#39CCCC", "#B2EBF2"),
    ("#FF69B4", "#F8BBD0"),
];

const FOOD_PALETTE: [(&str, &str); 6] = [
    ("#FF6384", "#FFB1C1"),
    ("#36A2EB", "#9AD0F5"),
    ("#FFCE56", "#FFE6AA"),
    ("#4BC0C0", "#A5DFDF"),
    ("#9966FF", "#CCB2FF"),
    ("#FF9F40", "#FFCF9F"),
];

fn pick<const N: usize>(palette: &[(&str, &str); N]) -> (String, String) {
    let mut rng = rand::thread_rng();
    let (fill, glow) = palette[rng.gen_range(0..N)];
    (fill.to_string(), glow.to_string())
}

/// Any simulated circular object: the player, a bot, or a food pellet.
/// Radius is never stored, always derived from mass.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub mass: f64,
    pub color: String,
    pub glow: String,
    pub is_player: bool,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Entity {
    pub fn radius(&self) -> f64 {
        mass_to_radius(self.mass)
    }

    /// The controlled entity. Position comes from the spawn placement search,
    /// so this takes it instead of rolling its own.
    pub fn player(x: f64, y: f64) -> Self {
        let (color, glow) = pick(&ENTITY_PALETTE);
        Entity {
            id: next_id(),
            x,
            y,
            mass: STARTING_MASS,
            color,
            glow,
            is_player: true,
            name: None,
            description: None,
        }
    }

    /// An AI opponent, placed uniformly at random. With an archetype, mass and
    /// display metadata come from it; without one, mass is a procedural roll.
    pub fn bot(map_width: f64, map_height: f64, archetype: Option<&BotArchetype>) -> Self {
        let mut rng = rand::thread_rng();
        let x = rng.gen_range(0.0..map_width);
        let y = rng.gen_range(0.0..map_height);
        let (default_color, glow) = pick(&ENTITY_PALETTE);
        let (mass, name, description, color) = match archetype {
            Some(archetype) => (
                archetype
                    .spawn_mass()
                    .unwrap_or_else(|| rng.gen_range(BOT_MIN_MASS..BOT_MAX_MASS)),
                Some(archetype.name.clone()),
                archetype.description.clone(),
                archetype.color.clone().unwrap_or(default_color),
            ),
            None => (
                rng.gen_range(BOT_MIN_MASS..BOT_MAX_MASS),
                None,
                None,
                default_color,
            ),
        };
        Entity {
            id: next_id(),
            x,
            y,
            mass,
            color,
            glow,
            is_player: false,
            name,
            description,
        }
    }

    /// A food pellet: fixed unit mass, random position and palette color.
    pub fn food(map_width: f64, map_height: f64) -> Self {
        let mut rng = rand::thread_rng();
        let (color, glow) = pick(&FOOD_PALETTE);
        Entity {
            id: next_id(),
            x: rng.gen_range(0.0..map_width),
            y: rng.gen_range(0.0..map_height),
            mass: FOOD_MASS,
            color,
            glow,
            is_player: false,
            name: None,
            description: None,
        }
    }
}

/// Static obstacle, drawn but never simulated.
#[derive(Debug, Clone)]
pub struct Virus {
    pub x: f64,
    pub y: f64,
}

impl Virus {
    pub fn random(map_width: f64, map_height: f64) -> Self {
        let mut rng = rand::thread_rng();
        Virus {
            x: rng.gen_range(VIRUS_RADIUS..map_width - VIRUS_RADIUS),
            y: rng.gen_range(VIRUS_RADIUS..map_height - VIRUS_RADIUS),
        }
    }
}
