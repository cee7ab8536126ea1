//! Game state module - the deterministic snake engine
//!
//! This module owns every game rule: movement, collision, food, scoring, and
//! termination. It has zero dependencies on UI, timers, or I/O; the driver
//! calls [`GameState::queue_direction`] on input events and [`GameState::step`]
//! once per tick.

use crate::core::food::place_food;
use crate::core::rng::RandomSource;
use crate::types::{Cell, Direction, DEFAULT_COLS, DEFAULT_INITIAL_LENGTH, DEFAULT_ROWS};

/// Board and snake configuration for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub cols: u16,
    pub rows: u16,
    pub initial_length: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            initial_length: DEFAULT_INITIAL_LENGTH,
        }
    }
}

impl Config {
    /// Clamp to values for which the initial snake fits on the board.
    ///
    /// The body extends from the center toward x = 0, so at most
    /// `center_x + 1` segments fit.
    fn sanitized(self) -> Self {
        let cols = self.cols.max(1);
        let rows = self.rows.max(1);
        let initial_length = self.initial_length.clamp(1, cols / 2 + 1);
        Self {
            cols,
            rows,
            initial_length,
        }
    }
}

/// Complete game state
///
/// The whole value is the unit of creation and replacement: restart means
/// constructing a fresh one. Once `game_over` is set the state is terminal
/// and every transition method leaves it unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    cols: u16,
    rows: u16,
    /// Body cells, head first. Never empty, never self-intersecting while
    /// the game is live.
    snake: Vec<Cell>,
    /// Last committed movement direction.
    direction: Direction,
    /// Pending input, applied on the next step.
    queued_direction: Direction,
    food: Option<Cell>,
    score: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game: snake horizontally centered, head at board center,
    /// body extending toward negative x, moving right.
    pub fn new<R: RandomSource>(config: Config, rng: &mut R) -> Self {
        let Config {
            cols,
            rows,
            initial_length,
        } = config.sanitized();

        let center_x = (cols / 2) as i16;
        let center_y = (rows / 2) as i16;
        let snake: Vec<Cell> = (0..initial_length)
            .map(|i| Cell::new(center_x - i as i16, center_y))
            .collect();

        let food = place_food(cols, rows, &snake, rng);

        Self {
            cols,
            rows,
            snake,
            direction: Direction::Right,
            queued_direction: Direction::Right,
            food,
            score: 0,
            game_over: false,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Body cells, head first.
    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn queued_direction(&self) -> Direction {
        self.queued_direction
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Queue a direction change for the next step.
    ///
    /// Ignored (state unchanged, returns `false`) when the game is over or
    /// when the requested direction is the exact opposite of the committed
    /// one, which would fold the head straight into the neck. Only the last
    /// accepted call before a step matters.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.game_over || direction.is_opposite_of(self.direction) {
            return false;
        }
        self.queued_direction = direction;
        true
    }

    /// Advance the game by one tick.
    ///
    /// Returns `true` when the snake moved. Returns `false` when the state is
    /// already terminal, or when this tick's move was fatal: in that case only
    /// `game_over` flips and the snake stays where it was, so the final frame
    /// shows the position that caused the collision rather than the collision
    /// itself.
    pub fn step<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        if self.game_over {
            return false;
        }

        let direction = self.queued_direction;
        let next_head = self.head().step(direction);
        let will_eat = self.food == Some(next_head);

        // The tail vacates its cell this tick unless the snake grows, so a
        // move into the current tail cell is legal when not eating.
        let body = if will_eat {
            &self.snake[..]
        } else {
            &self.snake[..self.snake.len() - 1]
        };

        if !self.in_bounds(next_head) || body.contains(&next_head) {
            self.game_over = true;
            return false;
        }

        self.snake.insert(0, next_head);
        if will_eat {
            self.score += 1;
            self.food = place_food(self.cols, self.rows, &self.snake, rng);
            if self.food.is_none() {
                // The snake fills the board: won, and nowhere left to go.
                self.game_over = true;
            }
        } else {
            self.snake.pop();
        }

        self.direction = direction;
        self.queued_direction = direction;
        true
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u16) < self.cols && (cell.y as u16) < self.rows
    }
}

impl Default for GameState {
    fn default() -> Self {
        let mut rng = crate::core::rng::SimpleRng::default();
        Self::new(Config::default(), &mut rng)
    }
}
