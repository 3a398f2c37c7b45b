use std::collections::HashMap;

use rand::Rng;

use crate::config::*;
use crate::game::bots;
use crate::game::entity::{Entity, Virus};
use crate::game::physics::{self, SpeedScale};
use crate::game::spawn;

/// Result of a discrete command trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Accepted but intentionally inert.
    NotImplemented,
}

/// The authoritative game state. Built by `new`, mutated in place by the tick
/// pipeline, terminal once the player is consumed, rebuilt wholesale by
/// `restart`.
#[derive(Debug)]
pub struct World {
    pub player: Option<Entity>,
    pub bots: HashMap<u64, Entity>,
    pub food: Vec<Entity>,
    pub viruses: Vec<Virus>,
    pub target_x: f64,
    pub target_y: f64,
    pub viewport_x: f64,
    pub viewport_y: f64,
    pub game_over: bool,
    pub score: u64,
    pub config: GameConfig,
    speed_scale: SpeedScale,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let mut food = Vec::with_capacity(config.food_count);
        for _ in 0..config.food_count {
            food.push(Entity::food(config.map_width, config.map_height));
        }

        let mut viruses = Vec::with_capacity(VIRUS_COUNT);
        for _ in 0..VIRUS_COUNT {
            viruses.push(Virus::random(config.map_width, config.map_height));
        }

        // Bots first, so the player spawn can keep its distance from them.
        let mut bots = HashMap::with_capacity(config.bot_count);
        for i in 0..config.bot_count {
            let archetype = if config.bots.is_empty() {
                None
            } else {
                Some(&config.bots[i % config.bots.len()])
            };
            let bot = Entity::bot(config.map_width, config.map_height, archetype);
            bots.insert(bot.id, bot);
        }

        let positions: Vec<(f64, f64)> = bots.values().map(|b| (b.x, b.y)).collect();
        let (px, py) = spawn::place_player(
            config.map_width,
            config.map_height,
            config.safe_spawn_distance,
            &positions,
        );
        let player = Entity::player(px, py);
        let (vx, vy) = viewport_offset(px, py, config.map_width, config.map_height);

        World {
            player: Some(player),
            bots,
            food,
            viruses,
            // Idle until the input source supplies a target.
            target_x: vx + VIEWPORT_WIDTH / 2.0,
            target_y: vy + VIEWPORT_HEIGHT / 2.0,
            viewport_x: vx,
            viewport_y: vy,
            game_over: false,
            score: 0,
            config,
            speed_scale: SpeedScale::default(),
        }
    }

    /// Discard the current state and reinitialize from the same config.
    pub fn restart(&mut self) {
        *self = World::new(self.config.clone());
    }

    pub fn viewport_center(&self) -> (f64, f64) {
        (
            self.viewport_x + VIEWPORT_WIDTH / 2.0,
            self.viewport_y + VIEWPORT_HEIGHT / 2.0,
        )
    }

    /// Latest pointer target in world coordinates, supplied once per tick by
    /// the input collaborator.
    pub fn set_target(&mut self, x: f64, y: f64) {
        if self.game_over {
            return;
        }
        self.target_x = x;
        self.target_y = y;
    }

    /// One simulation step, in fixed order. A no-op on a terminal state.
    pub fn tick(&mut self, dt: f64) {
        if self.game_over {
            return;
        }
        self.move_player(dt);
        self.update_bots(dt);
        self.resolve_collisions();
    }

    pub fn move_player(&mut self, dt: f64) {
        if self.game_over {
            return;
        }
        let (center_x, center_y) = self.viewport_center();
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let scale = self.speed_scale.for_mass(player.mass);
        let (nx, ny) = physics::normalize(self.target_x - center_x, self.target_y - center_y);
        if nx != 0.0 || ny != 0.0 {
            let step = physics::player_speed(player.mass) * scale * dt;
            let (x, y) = physics::clamp_to_map(
                player.x + nx * step,
                player.y + ny * step,
                self.config.map_width,
                self.config.map_height,
            );
            player.x = x;
            player.y = y;
        }
        let (vx, vy) = viewport_offset(
            player.x,
            player.y,
            self.config.map_width,
            self.config.map_height,
        );
        self.viewport_x = vx;
        self.viewport_y = vy;
    }

    pub fn update_bots(&mut self, dt: f64) {
        if self.game_over {
            return;
        }
        let Some(player) = self.player.as_ref() else {
            return;
        };
        let (px, py, player_mass) = (player.x, player.y, player.mass);
        let scale = self.speed_scale.for_mass(player_mass);
        for bot in self.bots.values_mut() {
            bots::step_bot(
                bot,
                px,
                py,
                player_mass,
                scale,
                dt,
                self.config.map_width,
                self.config.map_height,
            );
        }
    }

    /// Detect and apply all consumption for this tick, in fixed order:
    /// bot-eats-player, player-eats-bot, player-eats-food, replenishment.
    pub fn resolve_collisions(&mut self) {
        if self.game_over {
            return;
        }
        if self.check_bot_eats_player() {
            return;
        }
        self.check_player_eats_bots();
        self.check_player_eats_food();
        self.replenish_food();
    }

    fn check_bot_eats_player(&mut self) -> bool {
        let (px, py, player_mass) = match &self.player {
            Some(p) => (p.x, p.y, p.mass),
            None => return false,
        };
        let eaten = self.bots.values().any(|bot| {
            physics::distance(bot.x, bot.y, px, py) < bot.radius()
                && bot.mass > player_mass * self.config.eat_mass_ratio
        });
        if eaten {
            self.game_over = true;
            self.score = player_mass.floor() as u64;
            self.player = None;
        }
        eaten
    }

    fn check_player_eats_bots(&mut self) {
        // Stable pass order so mass gained early in the pass is visible to
        // the remaining checks.
        let mut ids: Vec<u64> = self.bots.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            let Some(player) = self.player.as_mut() else {
                return;
            };
            let Some(bot) = self.bots.get(&id) else {
                continue;
            };
            let dist = physics::distance(player.x, player.y, bot.x, bot.y);
            if dist < player.radius() && player.mass > bot.mass * self.config.eat_mass_ratio {
                player.mass += bot.mass * self.config.absorption;
                self.bots.remove(&id);
                if self.config.replenish_bots {
                    let replacement = Entity::bot(
                        self.config.map_width,
                        self.config.map_height,
                        pick_archetype(&self.config),
                    );
                    self.bots.insert(replacement.id, replacement);
                }
            }
        }
    }

    fn check_player_eats_food(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let mut i = 0;
        while i < self.food.len() {
            let pellet = &self.food[i];
            if physics::distance(player.x, player.y, pellet.x, pellet.y) < player.radius() {
                player.mass += pellet.mass;
                self.food.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn replenish_food(&mut self) {
        while self.food.len() < self.config.food_count {
            self.food
                .push(Entity::food(self.config.map_width, self.config.map_height));
        }
    }

    /// Capability hook: accepted, currently changes nothing.
    pub fn split(&mut self) -> CommandOutcome {
        CommandOutcome::NotImplemented
    }

    /// Capability hook: accepted, currently changes nothing.
    pub fn eject_mass(&mut self) -> CommandOutcome {
        CommandOutcome::NotImplemented
    }
}

fn viewport_offset(px: f64, py: f64, map_width: f64, map_height: f64) -> (f64, f64) {
    (
        (px - VIEWPORT_WIDTH / 2.0).clamp(0.0, (map_width - VIEWPORT_WIDTH).max(0.0)),
        (py - VIEWPORT_HEIGHT / 2.0).clamp(0.0, (map_height - VIEWPORT_HEIGHT).max(0.0)),
    )
}

fn pick_archetype(config: &GameConfig) -> Option<&BotArchetype> {
    if config.bots.is_empty() {
        None
    } else {
        let mut rng = rand::thread_rng();
        Some(&config.bots[rng.gen_range(0..config.bots.len())])
    }
}
