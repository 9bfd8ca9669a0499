use super::types::{Cells, Mark, Position, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

pub const LINES: [[Position; 3]; 8] = [
    // rows
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    // columns
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    // diagonals
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn check_win(cells: &Cells) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &Cells) -> Option<WinningLine> {
    for [a, b, c] in LINES {
        let mark = cells[a.row][a.col];
        if mark == Mark::Empty {
            continue;
        }
        if cells[b.row][b.col] == mark && cells[c.row][c.col] == mark {
            return Some(WinningLine::new(mark, a, c));
        }
    }
    None
}
