//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, timers, or I/O, which keeps it
//! deterministic: the same configuration and random sequence reproduce the
//! same game, move for move.
//!
//! - [`game_state`]: the snake engine (movement, collision, growth, scoring)
//! - [`food`]: uniform food placement over the free cells
//! - [`rng`]: the injectable randomness capability

pub mod food;
pub mod game_state;
pub mod rng;

// Re-export commonly used types
pub use food::place_food;
pub use game_state::{Config, GameState};
pub use rng::{RandomSource, SimpleRng};
