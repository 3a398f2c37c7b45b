use rand::Rng;

use crate::config::*;
use crate::game::physics;

/// Find a start position for the player that keeps `safe_distance` to every
/// bot. Tries `SPAWN_ATTEMPTS` uniform candidates; if none qualifies, falls
/// back to the best of a smaller sample, maximizing the minimum bot distance.
/// Never fails.
pub fn place_player(
    map_width: f64,
    map_height: f64,
    safe_distance: f64,
    bots: &[(f64, f64)],
) -> (f64, f64) {
    let mut rng = rand::thread_rng();

    for _ in 0..SPAWN_ATTEMPTS {
        let candidate = (rng.gen_range(0.0..map_width), rng.gen_range(0.0..map_height));
        if min_bot_distance(candidate, bots) > safe_distance {
            return candidate;
        }
    }

    // Retry budget exhausted: settle for the least crowded spot we can find.
    let mut best = (rng.gen_range(0.0..map_width), rng.gen_range(0.0..map_height));
    let mut best_distance = min_bot_distance(best, bots);
    for _ in 1..SPAWN_FALLBACK_SAMPLES {
        let candidate = (rng.gen_range(0.0..map_width), rng.gen_range(0.0..map_height));
        let candidate_distance = min_bot_distance(candidate, bots);
        if candidate_distance > best_distance {
            best = candidate;
            best_distance = candidate_distance;
        }
    }
    best
}

fn min_bot_distance(point: (f64, f64), bots: &[(f64, f64)]) -> f64 {
    bots.iter()
        .map(|&(bx, by)| physics::distance(point.0, point.1, bx, by))
        .fold(f64::INFINITY, f64::min)
}
