use common::games::tictactoe::{BOARD_SIZE, BoardState, GameMode, GameStatus, Mark, Position};
use eframe::egui::{Align2, Color32, Painter, Rect, Stroke, emath::RectTransform, pos2};

use super::{BLUE, GRAY, GREEN, PURPLE, RED, WHITE, YELLOW, font_large, font_medium, font_small};
use crate::layout::{CELL_SIZE, LINE_WIDTH, STATUS_Y, WIDTH, cell_rect};
use crate::particles::Celebration;

const MARK_STROKE: f32 = 12.0;
const MARK_PADDING: f32 = 50.0;
const LAST_MOVE_TINT: Color32 = Color32::from_rgba_premultiplied(40, 40, 40, 40);

pub fn draw_board(
    painter: &Painter,
    to_screen: &RectTransform,
    board: &BoardState,
    mode: Option<GameMode>,
    celebration: &Celebration,
) {
    draw_grid(painter, to_screen);

    if let Some(last) = board.last_move() {
        let rect = to_screen.transform_rect(cell_rect(last).shrink(LINE_WIDTH));
        painter.rect_filled(rect, 0.0, LAST_MOVE_TINT);
    }

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let rect = to_screen.transform_rect(cell_rect(pos));
            match board.cell(pos) {
                Mark::X => draw_x(painter, rect),
                Mark::O => draw_o(painter, rect),
                Mark::Empty => {}
            }
        }
    }

    if let Some(line) = board.winning_line() {
        let start = to_screen * cell_rect(line.start).center();
        let end = to_screen * cell_rect(line.end).center();
        painter.line_segment([start, end], Stroke::new(LINE_WIDTH, YELLOW));
    }

    draw_status(painter, to_screen, board, mode);

    for particle in celebration.particles() {
        painter.circle_filled(to_screen * particle.pos, particle.radius, particle.color);
    }
}

fn draw_grid(painter: &Painter, to_screen: &RectTransform) {
    let stroke = Stroke::new(LINE_WIDTH, WHITE);
    for i in 1..BOARD_SIZE {
        let offset = i as f32 * CELL_SIZE;
        painter.line_segment(
            [to_screen * pos2(offset, 0.0), to_screen * pos2(offset, WIDTH)],
            stroke,
        );
        painter.line_segment(
            [to_screen * pos2(0.0, offset), to_screen * pos2(WIDTH, offset)],
            stroke,
        );
    }
}

fn draw_x(painter: &Painter, rect: Rect) {
    let stroke = Stroke::new(MARK_STROKE, RED);
    let inner = rect.shrink(MARK_PADDING);
    painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
    painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
}

fn draw_o(painter: &Painter, rect: Rect) {
    let radius = rect.width() / 2.0 - MARK_PADDING;
    painter.circle_stroke(rect.center(), radius, Stroke::new(MARK_STROKE, BLUE));
}

fn draw_status(
    painter: &Painter,
    to_screen: &RectTransform,
    board: &BoardState,
    mode: Option<GameMode>,
) {
    let center_x = WIDTH / 2.0;

    let (headline, color) = match board.status() {
        GameStatus::InProgress => {
            let current = board.current_mark();
            let color = if current == Mark::X { RED } else { BLUE };
            painter.text(
                to_screen * pos2(center_x, STATUS_Y),
                Align2::CENTER_CENTER,
                format!("Current Player: {}", current),
                font_medium(),
                color,
            );
            let mode_label = mode.unwrap_or(GameMode::Friend).label();
            painter.text(
                to_screen * pos2(center_x, STATUS_Y + 40.0),
                Align2::CENTER_CENTER,
                format!("Mode: {}", mode_label),
                font_small(),
                GRAY,
            );
            return;
        }
        GameStatus::Tied => ("IT'S A TIE!".to_string(), YELLOW),
        GameStatus::Won(mark) => {
            let color = if mark == Mark::X { GREEN } else { PURPLE };
            (format!("PLAYER {} WINS!", mark), color)
        }
    };

    painter.text(
        to_screen * pos2(center_x, STATUS_Y),
        Align2::CENTER_CENTER,
        headline,
        font_large(),
        color,
    );
    painter.text(
        to_screen * pos2(center_x, STATUS_Y + 50.0),
        Align2::CENTER_CENTER,
        "Press R to Restart or ESC for Menu",
        font_small(),
        WHITE,
    );
}
