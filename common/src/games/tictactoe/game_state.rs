use crate::error::{GameError, MoveRejection};
use super::board::{count_marks, is_full};
use super::types::{BOARD_SIZE, Cells, GameStatus, Mark, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// A 3x3 game: the grid, whose turn it is, and whether the game has ended.
///
/// `current_mark` is never `Mark::Empty`. After a winning move it keeps the
/// winner's mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: Cells,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Builds a state from an arbitrary grid. The side to move is derived
    /// from the mark counts, which must satisfy `x == o` or `x == o + 1`.
    pub fn from_cells(cells: Cells) -> Result<Self, String> {
        let x_count = count_marks(&cells, Mark::X);
        let o_count = count_marks(&cells, Mark::O);

        let current_mark = if x_count == o_count {
            Mark::X
        } else if x_count == o_count + 1 {
            Mark::O
        } else {
            return Err(format!(
                "Invalid mark counts: {} X against {} O",
                x_count, o_count
            ));
        };

        let mut state = Self {
            cells,
            current_mark,
            status: GameStatus::InProgress,
            last_move: None,
        };
        if let Some(winner) = check_win(&state.cells) {
            state.status = GameStatus::Won(winner);
            state.current_mark = winner;
        } else if is_full(&state.cells) {
            state.status = GameStatus::Tied;
        }
        Ok(state)
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Places the current player's mark. On any rejection the state is left
    /// untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::InvalidMove(MoveRejection::GameOver));
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidMove(MoveRejection::OutOfBounds));
        }

        if self.cells[row][col] != Mark::Empty {
            return Err(GameError::InvalidMove(MoveRejection::CellOccupied));
        }

        self.cells[row][col] = self.current_mark;
        self.last_move = Some(Position::new(row, col));

        if self.check_winner() {
            self.status = GameStatus::Won(self.current_mark);
        } else if self.is_full() {
            self.status = GameStatus::Tied;
        } else {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn check_winner(&self) -> bool {
        check_win(&self.cells).is_some()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        is_full(&self.cells)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
