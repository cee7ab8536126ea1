//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: `GameView` projects the game
//! state into a framebuffer, `TerminalRenderer` flushes framebuffers to the
//! terminal. Keeping the projection pure leaves `core` deterministic and the
//! view unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
