mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{count_marks, get_available_moves, is_full};
pub use bot_controller::select_move;
pub use game_state::BoardState;
pub use types::{
    BOARD_SIZE, CENTER, CORNERS, Cells, GameMode, GameStatus, Mark, Position, WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_with_line};
