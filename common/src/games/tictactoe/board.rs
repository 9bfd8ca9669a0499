use super::types::{Cells, Mark, Position};

/// Empty cells in row-major order.
pub fn get_available_moves(cells: &Cells) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, line) in cells.iter().enumerate() {
        for (col, &cell) in line.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_full(cells: &Cells) -> bool {
    cells
        .iter()
        .all(|line| line.iter().all(|&cell| cell != Mark::Empty))
}

pub fn count_marks(cells: &Cells, mark: Mark) -> usize {
    cells
        .iter()
        .flat_map(|line| line.iter())
        .filter(|&&cell| cell == mark)
        .count()
}
