//! Fixed-size occupancy grid.

use super::types::{CellValue, Position};

/// A `rows x cols` grid of cell values, stored row-major.
///
/// Reading or writing a position outside the grid is a contract violation and
/// panics; callers check [`Board::contains`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: i16,
    cols: i16,
    cells: Vec<CellValue>,
}

impl Board {
    /// Create an all-empty board.
    pub fn new(rows: i16, cols: i16) -> Self {
        let len = rows.max(0) as usize * cols.max(0) as usize;
        Self {
            rows,
            cols,
            cells: vec![CellValue::Empty; len],
        }
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    pub fn cols(&self) -> i16 {
        self.cols
    }

    /// Whether `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    pub fn value_at(&self, pos: Position) -> CellValue {
        self.cells[self.index(pos)]
    }

    pub fn set_value(&mut self, pos: Position, value: CellValue) {
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Positions currently holding [`CellValue::Empty`].
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |&pos| self.value_at(pos) == CellValue::Empty)
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position ({}, {}) outside {}x{} board",
            pos.row,
            pos.col,
            self.rows,
            self.cols
        );
        pos.row as usize * self.cols as usize + pos.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 6);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 6);
        assert_eq!(board.count(CellValue::Empty), 24);
        assert_eq!(board.count(CellValue::Snake), 0);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut board = Board::new(5, 5);
        let pos = Position::new(3, 1);
        board.set_value(pos, CellValue::Food);
        assert_eq!(board.value_at(pos), CellValue::Food);

        board.set_value(pos, CellValue::Snake);
        assert_eq!(board.value_at(pos), CellValue::Snake);
        assert_eq!(board.count(CellValue::Food), 0);
    }

    #[test]
    fn test_cells_are_independent() {
        let mut board = Board::new(3, 3);
        board.set_value(Position::new(0, 2), CellValue::Snake);
        assert_eq!(board.value_at(Position::new(1, 0)), CellValue::Empty);
        assert_eq!(board.value_at(Position::new(2, 0)), CellValue::Empty);
    }

    #[test]
    fn test_contains() {
        let board = Board::new(5, 7);
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(4, 6)));
        assert!(!board.contains(Position::new(-1, 0)));
        assert!(!board.contains(Position::new(0, -1)));
        assert!(!board.contains(Position::new(5, 0)));
        assert!(!board.contains(Position::new(0, 7)));
    }

    #[test]
    fn test_positions_row_major() {
        let board = Board::new(2, 3);
        let all: Vec<Position> = board.positions().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[2], Position::new(0, 2));
        assert_eq!(all[3], Position::new(1, 0));
    }

    #[test]
    fn test_empty_positions_skip_occupied() {
        let mut board = Board::new(2, 2);
        board.set_value(Position::new(0, 0), CellValue::Snake);
        board.set_value(Position::new(1, 1), CellValue::Food);
        let empty: Vec<Position> = board.empty_positions().collect();
        assert_eq!(empty, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_read_panics() {
        let board = Board::new(3, 3);
        board.value_at(Position::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_negative_write_panics() {
        let mut board = Board::new(3, 3);
        board.set_value(Position::new(0, -1), CellValue::Snake);
    }
}
