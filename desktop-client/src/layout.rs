use common::games::tictactoe::{BOARD_SIZE, GameMode, Position};
use eframe::egui::{Pos2, Rect, pos2, vec2};

pub const WIDTH: f32 = 600.0;
pub const HEIGHT: f32 = 700.0;
pub const CELL_SIZE: f32 = WIDTH / BOARD_SIZE as f32;
pub const LINE_WIDTH: f32 = 10.0;
pub const STATUS_Y: f32 = WIDTH + 20.0;

pub const FRIEND_BUTTON: Rect = Rect {
    min: Pos2 { x: 150.0, y: 300.0 },
    max: Pos2 { x: 450.0, y: 380.0 },
};

pub const BOT_BUTTON: Rect = Rect {
    min: Pos2 { x: 150.0, y: 420.0 },
    max: Pos2 { x: 450.0, y: 500.0 },
};

/// Confetti bursts from the middle of the whole window, not the board.
pub const CELEBRATION_ORIGIN: Pos2 = Pos2 {
    x: WIDTH / 2.0,
    y: HEIGHT / 2.0,
};

pub fn window_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(WIDTH, HEIGHT))
}

/// Board cell under a point in window coordinates. The board is the top
/// `WIDTH x WIDTH` square.
pub fn cell_at(point: Pos2) -> Option<Position> {
    if !(0.0..WIDTH).contains(&point.x) || !(0.0..WIDTH).contains(&point.y) {
        return None;
    }
    let col = (point.x / CELL_SIZE) as usize;
    let row = (point.y / CELL_SIZE) as usize;
    Some(Position::new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1)))
}

pub fn cell_rect(position: Position) -> Rect {
    Rect::from_min_size(
        pos2(position.col as f32 * CELL_SIZE, position.row as f32 * CELL_SIZE),
        vec2(CELL_SIZE, CELL_SIZE),
    )
}

pub fn mode_button_at(point: Pos2) -> Option<GameMode> {
    if FRIEND_BUTTON.contains(point) {
        Some(GameMode::Friend)
    } else if BOT_BUTTON.contains(point) {
        Some(GameMode::Bot)
    } else {
        None
    }
}

pub fn mode_button_rect(mode: GameMode) -> Rect {
    match mode {
        GameMode::Friend => FRIEND_BUTTON,
        GameMode::Bot => BOT_BUTTON,
    }
}
