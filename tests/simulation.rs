use cellarena::config::{mass_to_radius, BotArchetype, GameConfig, TICK_RATE};
use cellarena::game::world::World;

const DT: f64 = 1.0 / TICK_RATE as f64;

#[test]
fn a_running_session_preserves_world_invariants() {
    let config = GameConfig {
        map_width: 800.0,
        map_height: 600.0,
        bot_count: 6,
        food_count: 100,
        safe_spawn_distance: 100.0,
        ..GameConfig::default()
    };
    let mut world = World::new(config);
    world.set_target(799.0, 1.0);

    for _ in 0..600 {
        world.tick(DT);
        if world.game_over {
            break;
        }
        let player = world.player.as_ref().unwrap();
        assert!((0.0..=800.0).contains(&player.x));
        assert!((0.0..=600.0).contains(&player.y));
        assert!(player.mass > 0.0);
        assert_eq!(player.radius(), mass_to_radius(player.mass));
        // Eaten food and bots are replaced before the tick ends.
        assert_eq!(world.food.len(), 100);
        assert_eq!(world.bots.len(), 6);
        for bot in world.bots.values() {
            assert!(bot.mass > 0.0);
            assert!((0.0..=800.0).contains(&bot.x));
            assert!((0.0..=600.0).contains(&bot.y));
            assert_eq!(bot.radius(), mass_to_radius(bot.mass));
        }
    }
}

#[test]
fn death_is_terminal_until_restart() {
    // One configured bot heavy enough to cover the whole map: the player is
    // consumed on the first collision pass no matter where either spawned.
    let config = GameConfig {
        map_width: 100.0,
        map_height: 100.0,
        bot_count: 1,
        food_count: 0,
        safe_spawn_distance: 0.0,
        bots: vec![BotArchetype {
            name: "Goliath".into(),
            description: None,
            level: None,
            mass: Some(100_000.0),
            color: None,
        }],
        ..GameConfig::default()
    };
    let mut world = World::new(config);

    world.tick(DT);
    assert!(world.game_over);
    assert!(world.player.is_none());
    assert_eq!(world.score, 20);

    let frozen_score = world.score;
    for _ in 0..10 {
        world.tick(DT);
    }
    assert!(world.game_over);
    assert_eq!(world.score, frozen_score);

    world.restart();
    assert!(!world.game_over);
    assert_eq!(world.score, 0);
    assert!(world.player.is_some());
}

#[test]
fn disabling_bot_replenishment_lets_the_population_shrink() {
    let config = GameConfig {
        map_width: 400.0,
        map_height: 400.0,
        bot_count: 4,
        food_count: 0,
        replenish_bots: false,
        safe_spawn_distance: 0.0,
        bots: vec![BotArchetype {
            name: "Snack".into(),
            description: None,
            level: None,
            mass: Some(2.0),
            color: None,
        }],
        ..GameConfig::default()
    };
    let mut world = World::new(config);
    // A heavy, fast-reaching player on a small map hunts them all down.
    if let Some(player) = world.player.as_mut() {
        player.mass = 50_000.0;
    }

    for _ in 0..600 {
        world.tick(DT);
        if world.bots.is_empty() {
            break;
        }
    }
    assert!(world.bots.is_empty());
}
