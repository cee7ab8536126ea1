//! Food placement over the free cells of the grid.

use std::collections::HashSet;

use crate::core::rng::RandomSource;
use crate::types::Cell;

/// Pick a food cell uniformly among the cells not occupied by the snake.
///
/// Free cells are collected in row-major order (y outer, x inner, ascending),
/// so a given random sequence always yields the same placement. Returns
/// `None` when the snake covers the whole board.
pub fn place_food<R: RandomSource>(
    cols: u16,
    rows: u16,
    snake: &[Cell],
    rng: &mut R,
) -> Option<Cell> {
    let occupied: HashSet<Cell> = snake.iter().copied().collect();

    let board_size = (cols as usize) * (rows as usize);
    let mut free_cells = Vec::with_capacity(board_size.saturating_sub(snake.len()));
    for y in 0..rows as i16 {
        for x in 0..cols as i16 {
            let cell = Cell::new(x, y);
            if !occupied.contains(&cell) {
                free_cells.push(cell);
            }
        }
    }

    if free_cells.is_empty() {
        return None;
    }

    let index = (rng.next_unit() * free_cells.len() as f64) as usize;
    // A source returning values arbitrarily close to 1.0 must not index past
    // the end.
    Some(free_cells[index.min(free_cells.len() - 1)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_yields_no_food() {
        let snake = vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ];
        let mut rng = || 0.5;
        assert_eq!(place_food(2, 2, &snake, &mut rng), None);
    }

    #[test]
    fn test_single_free_cell_is_chosen_for_any_draw() {
        let snake = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)];
        for r in [0.0, 0.5, 0.999_999] {
            let mut rng = move || r;
            assert_eq!(place_food(2, 2, &snake, &mut rng), Some(Cell::new(1, 1)));
        }
    }

    #[test]
    fn test_free_cells_are_indexed_row_major() {
        // 3x1 board with the middle cell occupied: free = [(0,0), (2,0)].
        let snake = vec![Cell::new(1, 0)];

        let mut low = || 0.0;
        assert_eq!(place_food(3, 1, &snake, &mut low), Some(Cell::new(0, 0)));

        let mut high = || 0.6;
        assert_eq!(place_food(3, 1, &snake, &mut high), Some(Cell::new(2, 0)));
    }

    #[test]
    fn test_placement_never_lands_on_snake() {
        let snake: Vec<Cell> = (0..10).map(|x| Cell::new(x, 5)).collect();
        let mut rng = crate::core::rng::SimpleRng::new(42);

        for _ in 0..200 {
            let food = place_food(20, 20, &snake, &mut rng).unwrap();
            assert!(!snake.contains(&food));
        }
    }

    #[test]
    fn test_same_sequence_same_placement() {
        let snake = vec![Cell::new(3, 3), Cell::new(2, 3)];
        let mut a = crate::core::rng::SimpleRng::new(7);
        let mut b = crate::core::rng::SimpleRng::new(7);

        for _ in 0..50 {
            assert_eq!(place_food(9, 9, &snake, &mut a), place_food(9, 9, &snake, &mut b));
        }
    }
}
