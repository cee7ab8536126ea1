//! Terminal Snake.
//!
//! The game is split the same way the binary uses it:
//!
//! - [`core`]: the pure, deterministic snake engine (no I/O, no clock)
//! - [`term`]: framebuffer rendering and the crossterm backend
//! - [`input`]: key-event-to-action mapping
//! - [`types`]: shared plain data types
//!
//! The driver in `main.rs` owns the current [`core::GameState`], queues a
//! direction on input, steps the engine once per tick, and re-renders.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
