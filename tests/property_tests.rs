//! Property tests for the engine's documented invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use tui_snake::core::{Config, GameState, SimpleRng};
use tui_snake::types::{Cell, Direction};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_for_any_input_sequence(
        seed in any::<u32>(),
        moves in prop::collection::vec(direction_strategy(), 0..200),
    ) {
        let mut rng = SimpleRng::new(seed);
        let mut state = GameState::new(Config::default(), &mut rng);
        let mut last_score = 0u32;

        for direction in moves {
            let was_over = state.game_over();
            let before = state.clone();

            state.queue_direction(direction);
            if was_over {
                prop_assert_eq!(&state, &before);
            }

            let prev_head = state.head();
            let prev_len = state.snake().len();
            let prev_score = state.score();
            let committed = state.queued_direction();

            let moved = state.step(&mut rng);
            if was_over {
                prop_assert_eq!(&state, &before);
            }

            if moved {
                // New head is adjacent to the old one, in the committed
                // direction.
                let (dx, dy) = committed.delta();
                prop_assert_eq!(
                    state.head(),
                    Cell::new(prev_head.x + dx, prev_head.y + dy)
                );
                // Length grows by exactly the number of eats this tick.
                prop_assert_eq!(
                    state.snake().len(),
                    prev_len + (state.score() - prev_score) as usize
                );
            } else {
                prop_assert_eq!(state.snake().len(), prev_len);
            }

            // Score is monotonic and stays coupled to the body length.
            prop_assert!(state.score() >= last_score);
            last_score = state.score();
            prop_assert_eq!(state.snake().len(), 3 + state.score() as usize);

            if !state.game_over() {
                for cell in state.snake() {
                    prop_assert!(cell.x >= 0 && cell.y >= 0);
                    prop_assert!((cell.x as u16) < state.cols());
                    prop_assert!((cell.y as u16) < state.rows());
                }

                let unique: HashSet<&Cell> = state.snake().iter().collect();
                prop_assert_eq!(unique.len(), state.snake().len());

                if let Some(food) = state.food() {
                    prop_assert!(!state.snake().contains(&food));
                }

                prop_assert!(
                    !state.queued_direction().is_opposite_of(state.direction())
                );
            }
        }
    }

    #[test]
    fn reversing_the_committed_direction_never_takes(
        seed in any::<u32>(),
        moves in prop::collection::vec(direction_strategy(), 0..50),
    ) {
        let mut rng = SimpleRng::new(seed);
        let mut state = GameState::new(Config::default(), &mut rng);

        for direction in moves {
            state.queue_direction(direction);
            state.step(&mut rng);

            let before = state.clone();
            let opposite = state.direction().opposite();
            prop_assert!(!state.queue_direction(opposite));
            prop_assert_eq!(&state, &before);
        }
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u32>(),
        moves in prop::collection::vec(direction_strategy(), 0..100),
    ) {
        let mut rng_a = SimpleRng::new(seed);
        let mut rng_b = SimpleRng::new(seed);
        let mut a = GameState::new(Config::default(), &mut rng_a);
        let mut b = GameState::new(Config::default(), &mut rng_b);

        for direction in moves {
            a.queue_direction(direction);
            b.queue_direction(direction);
            a.step(&mut rng_a);
            b.step(&mut rng_b);
            prop_assert_eq!(&a, &b);
        }
    }
}
