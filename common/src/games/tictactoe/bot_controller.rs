use crate::games::SessionRng;
use super::board::get_available_moves;
use super::game_state::BoardState;
use super::types::{CENTER, CORNERS, Cells, Mark, Position};
use super::win_detector::check_win;

/// Picks the bot's reply for the side to move.
///
/// Priorities, first match wins: an immediate win, a block of the
/// opponent's immediate win, the center, a random free corner, then the
/// first free cell in row-major order. Only one ply is examined, so the bot
/// can be outplayed by forks.
pub fn select_move(state: &BoardState, rng: &mut SessionRng) -> Option<Position> {
    let bot_mark = state.current_mark();
    let opponent_mark = bot_mark.opponent()?;
    let mut cells = *state.cells();
    let available_moves = get_available_moves(&cells);

    if available_moves.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move(&mut cells, bot_mark, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(&mut cells, opponent_mark, &available_moves) {
        return Some(pos);
    }

    if cells[CENTER.row][CENTER.col] == Mark::Empty {
        return Some(CENTER);
    }

    let free_corners: Vec<Position> = CORNERS
        .into_iter()
        .filter(|pos| cells[pos.row][pos.col] == Mark::Empty)
        .collect();
    if let Some(&corner) = rng.choose(&free_corners) {
        return Some(corner);
    }

    available_moves.first().copied()
}

fn find_winning_move(cells: &mut Cells, mark: Mark, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        cells[pos.row][pos.col] = mark;
        let winner = check_win(cells);
        cells[pos.row][pos.col] = Mark::Empty;

        if winner == Some(mark) {
            return Some(pos);
        }
    }
    None
}
