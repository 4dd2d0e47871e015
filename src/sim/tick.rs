//! Per-frame simulation step
//!
//! One call to `tick` is one animation frame. The step is split in two so
//! the frame controller can draw between them:
//! - `advance`: move vehicle, scroll road, move/cull/spawn obstacles
//! - `resolve`: collision test, then score or game over

use glam::Vec2;
use rand::Rng;

use super::check_collision;
use super::state::{GamePhase, GameState, Obstacle};
use crate::input::Intent;

/// Move the vehicle one step per held direction, clamped to the viewport.
///
/// Each axis is handled independently, so diagonals move on both.
pub fn move_vehicle(state: &mut GameState, intent: &Intent) {
    let max = state.vehicle.max_pos(&state.viewport);
    let vehicle = &mut state.vehicle;
    let speed = vehicle.speed;

    if intent.left {
        vehicle.pos.x = (vehicle.pos.x - speed).max(0.0);
    }
    if intent.right {
        vehicle.pos.x = (vehicle.pos.x + speed).min(max.x);
    }
    if intent.up {
        vehicle.pos.y = (vehicle.pos.y - speed).max(0.0);
    }
    if intent.down {
        vehicle.pos.y = (vehicle.pos.y + speed).min(max.y);
    }
}

/// Drop every obstacle by the current game speed and forget the ones that
/// left the bottom of the viewport.
pub fn advance_obstacles(state: &mut GameState) {
    let speed = state.game_speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += speed;
    }

    let height = state.viewport.height as f32;
    state.obstacles.retain(|o| o.pos.y < height);
}

/// Bernoulli trial per frame for a new obstacle just above the top edge
pub fn maybe_spawn_obstacle<R: Rng>(state: &mut GameState, rng: &mut R) {
    if rng.random::<f32>() >= state.tuning.spawn_probability {
        return;
    }

    let size = state.tuning.obstacle_size;
    let x = rng.random::<f32>() * (state.viewport.width as f32 - size);
    log::trace!("Spawned obstacle at x={:.1}", x);
    state.obstacles.push(Obstacle::new(Vec2::new(x, -size), size));
}

/// Steps 1-4 of a frame: movement, road scroll, obstacles, spawning.
///
/// No-op once the game is over.
pub fn advance<R: Rng>(state: &mut GameState, intent: &Intent, rng: &mut R) {
    if state.is_over() {
        return;
    }

    state.time_ticks += 1;

    move_vehicle(state, intent);
    state.road_offset += state.game_speed as f64;
    advance_obstacles(state);
    maybe_spawn_obstacle(state, rng);
}

/// Step 5 of a frame: latch game over on collision, otherwise score.
pub fn resolve(state: &mut GameState) -> GamePhase {
    if state.is_over() {
        return GamePhase::GameOver;
    }

    if check_collision(&state.vehicle.bounds(), &state.obstacles) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} at speed {:.1} after {} frames",
            state.score,
            state.game_speed,
            state.time_ticks
        );
        return state.phase;
    }

    state.score += 1;
    if state.score % state.tuning.points_per_speed_step == 0 {
        state.game_speed += state.tuning.game_speed_step;
        log::debug!("Score {}: game speed now {:.1}", state.score, state.game_speed);
    }

    state.phase
}

/// Advance the game state by one frame
pub fn tick<R: Rng>(state: &mut GameState, intent: &Intent, rng: &mut R) -> GamePhase {
    advance(state, intent, rng);
    resolve(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use crate::viewport::Viewport;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn no_spawn_state() -> GameState {
        let tuning = Tuning {
            spawn_probability: 0.0,
            ..Tuning::default()
        };
        GameState::new(Viewport::new(800, 600), tuning)
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    #[test]
    fn test_move_left_clamps_at_zero() {
        let mut state = no_spawn_state();
        state.vehicle.pos.x = 3.0;
        let input = Intent {
            left: true,
            ..Default::default()
        };
        move_vehicle(&mut state, &input);
        assert_eq!(state.vehicle.pos.x, 0.0);
    }

    #[test]
    fn test_move_right_clamps_at_edge() {
        let mut state = no_spawn_state();
        state.vehicle.pos.x = 748.0;
        let input = Intent {
            right: true,
            ..Default::default()
        };
        move_vehicle(&mut state, &input);
        assert_eq!(state.vehicle.pos.x, 750.0);
    }

    #[test]
    fn test_diagonal_moves_both_axes() {
        let mut state = no_spawn_state();
        let start = state.vehicle.pos;
        let input = Intent {
            left: true,
            up: true,
            ..Default::default()
        };
        move_vehicle(&mut state, &input);
        assert_eq!(state.vehicle.pos, start + Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut state = no_spawn_state();
        let start = state.vehicle.pos;
        let input = Intent {
            left: true,
            right: true,
            ..Default::default()
        };
        move_vehicle(&mut state, &input);
        assert_eq!(state.vehicle.pos, start);
    }

    #[test]
    fn test_obstacle_culled_once_past_bottom() {
        let mut state = no_spawn_state();
        state.obstacles.push(Obstacle::new(Vec2::new(0.0, 599.0), 50.0));
        advance_obstacles(&mut state);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_obstacle_survives_while_above_bottom() {
        let mut state = no_spawn_state();
        state.obstacles.push(Obstacle::new(Vec2::new(0.0, 597.0), 50.0));
        advance_obstacles(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.y, 599.0);

        advance_obstacles(&mut state);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_culling_preserves_order() {
        let mut state = no_spawn_state();
        state.obstacles.push(Obstacle::new(Vec2::new(1.0, 10.0), 50.0));
        state.obstacles.push(Obstacle::new(Vec2::new(2.0, 599.0), 50.0));
        state.obstacles.push(Obstacle::new(Vec2::new(3.0, 20.0), 50.0));
        advance_obstacles(&mut state);
        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.pos.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
    }

    #[test]
    fn test_spawn_always_when_probability_one() {
        let mut state = no_spawn_state();
        state.tuning.spawn_probability = 1.0;
        let mut rng = rng();
        for _ in 0..50 {
            maybe_spawn_obstacle(&mut state, &mut rng);
        }
        assert_eq!(state.obstacles.len(), 50);
        for o in &state.obstacles {
            assert_eq!(o.pos.y, -50.0);
            assert!(o.pos.x >= 0.0 && o.pos.x < 750.0);
            assert_eq!(o.size, 50.0);
        }
    }

    #[test]
    fn test_never_spawn_when_probability_zero() {
        let mut state = no_spawn_state();
        let mut rng = rng();
        for _ in 0..1000 {
            maybe_spawn_obstacle(&mut state, &mut rng);
        }
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_road_offset_accumulates_game_speed() {
        let mut state = no_spawn_state();
        let mut rng = rng();
        for _ in 0..30 {
            tick(&mut state, &Intent::default(), &mut rng);
        }
        assert_eq!(state.road_offset, 60.0);
    }

    #[test]
    fn test_road_offset_keeps_small_steps_when_large() {
        let mut state = no_spawn_state();
        state.road_offset = 100_000_000.0;
        state.game_speed = 2.5;
        let mut rng = rng();

        advance(&mut state, &Intent::default(), &mut rng);
        assert_eq!(state.road_offset % 40.0, 2.5);

        advance(&mut state, &Intent::default(), &mut rng);
        assert_eq!(state.road_offset % 40.0, 5.0);
    }

    #[test]
    fn test_speed_increases_after_100_points() {
        let mut state = no_spawn_state();
        let mut rng = rng();
        for _ in 0..99 {
            tick(&mut state, &Intent::default(), &mut rng);
        }
        assert_eq!(state.score, 99);
        assert_eq!(state.game_speed, 2.0);

        tick(&mut state, &Intent::default(), &mut rng);
        assert_eq!(state.score, 100);
        assert_eq!(state.game_speed, 2.5);

        for _ in 0..99 {
            tick(&mut state, &Intent::default(), &mut rng);
        }
        assert_eq!(state.score, 199);
        assert_eq!(state.game_speed, 2.5);
    }

    #[test]
    fn test_collision_latches_game_over() {
        let mut state = no_spawn_state();
        let mut rng = rng();
        let pos = state.vehicle.pos;
        state.obstacles.push(Obstacle::new(pos - Vec2::new(0.0, 40.0), 50.0));

        let phase = tick(&mut state, &Intent::default(), &mut rng);

        assert_eq!(phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = no_spawn_state();
        state.tuning.spawn_probability = 1.0;
        state.phase = GamePhase::GameOver;
        state.obstacles.push(Obstacle::new(Vec2::new(10.0, 10.0), 50.0));
        let mut rng = rng();

        let input = Intent {
            left: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..10 {
            assert_eq!(tick(&mut state, &input, &mut rng), GamePhase::GameOver);
        }

        assert_eq!(state.score, 0);
        assert_eq!(state.game_speed, 2.0);
        assert_eq!(state.road_offset, 0.0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos, Vec2::new(10.0, 10.0));
        assert_eq!(state.vehicle.pos, Vec2::new(375.0, 500.0));
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let mut state1 = GameState::new(Viewport::new(640, 480), tuning.clone());
        let mut state2 = GameState::new(Viewport::new(640, 480), tuning);
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);

        let inputs = [
            Intent::default(),
            Intent {
                left: true,
                ..Default::default()
            },
            Intent {
                right: true,
                up: true,
                ..Default::default()
            },
        ];

        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, &mut rng1);
            tick(&mut state2, input, &mut rng2);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.vehicle, state2.vehicle);
    }

    fn intent_strategy() -> impl Strategy<Value = Intent> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left, right, up, down)| Intent {
                left,
                right,
                up,
                down,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_vehicle_stays_in_bounds(
            inputs in proptest::collection::vec(intent_strategy(), 0..400),
            width in 60u32..1600,
            height in 90u32..1200,
        ) {
            let mut state = GameState::new(Viewport::new(width, height), Tuning::default());
            // Start from a valid position for the generated viewport
            let max = state.vehicle.max_pos(&state.viewport);
            state.vehicle.pos = state.vehicle.pos.clamp(Vec2::ZERO, max);

            for input in &inputs {
                move_vehicle(&mut state, input);
                prop_assert!(state.vehicle.pos.x >= 0.0 && state.vehicle.pos.x <= max.x);
                prop_assert!(state.vehicle.pos.y >= 0.0 && state.vehicle.pos.y <= max.y);
            }
        }

        #[test]
        fn prop_obstacles_stay_above_bottom(seed in any::<u64>(), frames in 1usize..600) {
            let tuning = Tuning { spawn_probability: 0.2, ..Tuning::default() };
            let mut state = GameState::new(Viewport::new(400, 300), tuning);
            let mut rng = Pcg32::seed_from_u64(seed);

            for _ in 0..frames {
                advance(&mut state, &Intent::default(), &mut rng);
                prop_assert!(state.obstacles.iter().all(|o| o.pos.y < 300.0));
            }
        }
    }
}
