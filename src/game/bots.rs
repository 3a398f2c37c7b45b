use crate::game::entity::Entity;
use crate::game::physics;

/// Per-tick bot disposition, recomputed from current masses. Memoryless, so a
/// bot near mass parity with the player can flip between states tick to tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Flee,
    Pursue,
}

pub fn decide(bot_mass: f64, player_mass: f64) -> BotAction {
    if bot_mass < player_mass {
        BotAction::Flee
    } else {
        BotAction::Pursue
    }
}

/// Move one bot along (or away from) the unit vector toward the player. A bot
/// sitting exactly on the player skips the move this tick.
pub fn step_bot(
    bot: &mut Entity,
    player_x: f64,
    player_y: f64,
    player_mass: f64,
    speed_scale: f64,
    dt: f64,
    map_width: f64,
    map_height: f64,
) {
    let (nx, ny) = physics::normalize(player_x - bot.x, player_y - bot.y);
    if nx == 0.0 && ny == 0.0 {
        return;
    }
    let direction = match decide(bot.mass, player_mass) {
        BotAction::Flee => -1.0,
        BotAction::Pursue => 1.0,
    };
    let step = physics::bot_speed(bot.mass) * speed_scale * dt;
    let (x, y) = physics::clamp_to_map(
        bot.x + nx * direction * step,
        bot.y + ny * direction * step,
        map_width,
        map_height,
    );
    bot.x = x;
    bot.y = y;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot_at(x: f64, y: f64, mass: f64) -> Entity {
        let mut bot = Entity::bot(1000.0, 1000.0, None);
        bot.x = x;
        bot.y = y;
        bot.mass = mass;
        bot
    }

    #[test]
    fn lighter_bot_flees_heavier_pursues() {
        assert_eq!(decide(10.0, 50.0), BotAction::Flee);
        assert_eq!(decide(50.0, 10.0), BotAction::Pursue);
        // Exact parity counts as pursue.
        assert_eq!(decide(50.0, 50.0), BotAction::Pursue);
    }

    #[test]
    fn pursuing_bot_closes_the_gap() {
        let mut bot = bot_at(100.0, 500.0, 80.0);
        let before = physics::distance(bot.x, bot.y, 500.0, 500.0);
        step_bot(&mut bot, 500.0, 500.0, 20.0, 1.0, 1.0 / 60.0, 1000.0, 1000.0);
        let after = physics::distance(bot.x, bot.y, 500.0, 500.0);
        assert!(after < before);
    }

    #[test]
    fn fleeing_bot_opens_the_gap() {
        let mut bot = bot_at(400.0, 500.0, 10.0);
        let before = physics::distance(bot.x, bot.y, 500.0, 500.0);
        step_bot(&mut bot, 500.0, 500.0, 90.0, 1.0, 1.0 / 60.0, 1000.0, 1000.0);
        let after = physics::distance(bot.x, bot.y, 500.0, 500.0);
        assert!(after > before);
    }

    #[test]
    fn coincident_bot_stays_put() {
        let mut bot = bot_at(500.0, 500.0, 10.0);
        step_bot(&mut bot, 500.0, 500.0, 90.0, 1.0, 1.0 / 60.0, 1000.0, 1000.0);
        assert_eq!((bot.x, bot.y), (500.0, 500.0));
    }

    #[test]
    fn fleeing_bot_is_clamped_at_the_map_edge() {
        let mut bot = bot_at(2.0, 500.0, 10.0);
        // Player to the right, bot flees left into the wall.
        for _ in 0..60 {
            step_bot(&mut bot, 900.0, 500.0, 90.0, 1.0, 1.0 / 60.0, 1000.0, 1000.0);
        }
        assert!(bot.x >= 0.0);
        assert!(bot.y >= 0.0 && bot.y <= 1000.0);
    }
}
