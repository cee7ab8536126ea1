//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::{Cell as FbCell, CellStyle, FrameBuffer, Rgb};
use crate::types::Cell;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// Palette lifted from the browser build of the game.
const BOARD_BG: Rgb = Rgb::new(14, 19, 32);
const GRID_DOT: Rgb = Rgb::new(66, 78, 99);
const SNAKE_HEAD: Rgb = Rgb::new(58, 214, 163);
const SNAKE_BODY: Rgb = Rgb::new(43, 185, 139);
const FOOD: Rgb = Rgb::new(255, 109, 109);
const BORDER: Rgb = Rgb::new(200, 200, 200);

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    ///
    /// `paused` is driver state, not game state, so it is passed in
    /// explicitly for the overlay.
    pub fn render(&self, state: &GameState, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(FbCell::default());

        let board_px_w = state.cols() * self.cell_w;
        let board_px_h = state.rows() * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let dot = CellStyle {
            fg: GRID_DOT,
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        let border = CellStyle {
            fg: BORDER,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Play area background with a faint grid dot per cell.
        for y in 0..state.rows() {
            for x in 0..state.cols() {
                self.fill_cell_rect(&mut fb, start_x, start_y, x, y, '·', dot);
            }
        }

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Food.
        if let Some(food) = state.food() {
            self.draw_board_cell(&mut fb, start_x, start_y, food, '●', FOOD, false);
        }

        // Body first, then the head on top.
        for segment in state.snake().iter().skip(1) {
            self.draw_board_cell(&mut fb, start_x, start_y, *segment, '█', SNAKE_BODY, false);
        }
        self.draw_board_cell(&mut fb, start_x, start_y, state.head(), '█', SNAKE_HEAD, true);

        self.draw_side_panel(&mut fb, state, viewport, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if paused {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        ch: char,
        fg: Rgb,
        bold: bool,
    ) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        let style = CellStyle {
            fg,
            bg: BOARD_BG,
            bold,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, cell.x as u16, cell.y as u16, ch, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.snake().len()), value);
        y = y.saturating_add(2);

        for line in ["arrows move", "p pause", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
