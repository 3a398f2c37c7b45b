use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration};

use crate::config::*;
use crate::game::world::World;
use crate::protocol::messages::*;

pub type SharedWorld = Arc<RwLock<World>>;

pub fn create_world(config: GameConfig) -> SharedWorld {
    Arc::new(RwLock::new(World::new(config)))
}

/// Drive the fixed-order tick forever. The write lock spans the whole tick,
/// so observers only ever see state between steps.
pub async fn game_loop(world: SharedWorld) {
    let mut tick_interval = interval(Duration::from_millis(TICK_DURATION_MS));
    let dt = 1.0 / TICK_RATE as f64;

    loop {
        tick_interval.tick().await;
        let mut w = world.write().await;
        w.tick(dt);
    }
}

/// Read-only snapshot for the renderer, culled to the viewport.
pub fn build_snapshot(world: &World) -> ServerMessage {
    let view_left = world.viewport_x;
    let view_right = world.viewport_x + VIEWPORT_WIDTH;
    let view_top = world.viewport_y;
    let view_bottom = world.viewport_y + VIEWPORT_HEIGHT;

    let player = world.player.as_ref().map(|p| PlayerView {
        x: p.x,
        y: p.y,
        radius: p.radius(),
        mass: p.mass,
        color: p.color.clone(),
        glow: p.glow.clone(),
    });

    let bots: Vec<BotView> = world
        .bots
        .values()
        .filter(|b| {
            b.x + b.radius() > view_left
                && b.x - b.radius() < view_right
                && b.y + b.radius() > view_top
                && b.y - b.radius() < view_bottom
        })
        .map(|b| BotView {
            x: b.x,
            y: b.y,
            radius: b.radius(),
            color: b.color.clone(),
            glow: b.glow.clone(),
            name: b.name.clone(),
        })
        .collect();

    let food: Vec<FoodView> = world
        .food
        .iter()
        .filter(|f| f.x > view_left && f.x < view_right && f.y > view_top && f.y < view_bottom)
        .map(|f| FoodView {
            x: f.x,
            y: f.y,
            color: f.color.clone(),
        })
        .collect();

    let viruses: Vec<VirusView> = world
        .viruses
        .iter()
        .filter(|v| {
            v.x + VIRUS_RADIUS > view_left
                && v.x - VIRUS_RADIUS < view_right
                && v.y + VIRUS_RADIUS > view_top
                && v.y - VIRUS_RADIUS < view_bottom
        })
        .map(|v| VirusView {
            x: v.x,
            y: v.y,
            radius: VIRUS_RADIUS,
        })
        .collect();

    ServerMessage::State {
        player,
        bots,
        food,
        viruses,
        viewport_x: world.viewport_x,
        viewport_y: world.viewport_y,
        game_over: world.game_over,
        score: world.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Entity;

    fn quiet_config() -> GameConfig {
        GameConfig {
            map_width: 4000.0,
            map_height: 4000.0,
            bot_count: 0,
            food_count: 0,
            ..GameConfig::default()
        }
    }

    #[test]
    fn snapshot_includes_the_player_and_culls_distant_bots() {
        let mut world = World::new(quiet_config());
        {
            let player = world.player.as_mut().unwrap();
            player.x = 2000.0;
            player.y = 2000.0;
        }
        world.move_player(0.0);

        let mut near = Entity::bot(4000.0, 4000.0, None);
        near.x = 2100.0;
        near.y = 2000.0;
        let mut far = Entity::bot(4000.0, 4000.0, None);
        far.x = 10.0;
        far.y = 10.0;
        far.mass = 10.0;
        world.bots.insert(near.id, near);
        world.bots.insert(far.id, far);

        let ServerMessage::State { player, bots, .. } = build_snapshot(&world) else {
            panic!("expected a state snapshot");
        };
        assert!(player.is_some());
        assert_eq!(bots.len(), 1);
        assert_eq!(bots[0].x, 2100.0);
    }

    #[test]
    fn terminal_snapshot_reports_game_over_and_score() {
        let mut world = World::new(quiet_config());
        world.player = None;
        world.game_over = true;
        world.score = 42;

        let ServerMessage::State {
            player,
            game_over,
            score,
            ..
        } = build_snapshot(&world)
        else {
            panic!("expected a state snapshot");
        };
        assert!(player.is_none());
        assert!(game_over);
        assert_eq!(score, 42);
    }
}
