use common::games::tictactoe::GameMode;
use eframe::egui::{Align2, Painter, Stroke, StrokeKind, emath::RectTransform, pos2};

use super::{BLACK, GREEN, LIGHT_GRAY, WHITE, YELLOW, font_medium, font_small};
use crate::layout::{WIDTH, mode_button_rect};

const BUTTON_ROUNDING: f32 = 10.0;

pub fn draw_mode_selection(
    painter: &Painter,
    to_screen: &RectTransform,
    selected: Option<GameMode>,
) {
    painter.text(
        to_screen * pos2(WIDTH / 2.0, 150.0),
        Align2::CENTER_CENTER,
        "Select Game Mode",
        font_medium(),
        WHITE,
    );

    for (mode, label) in [
        (GameMode::Friend, "1. Play with Friend"),
        (GameMode::Bot, "2. Play with Bot"),
    ] {
        let rect = to_screen.transform_rect(mode_button_rect(mode));
        let fill = if selected == Some(mode) { GREEN } else { LIGHT_GRAY };
        painter.rect_filled(rect, BUTTON_ROUNDING, fill);
        painter.rect_stroke(
            rect,
            BUTTON_ROUNDING,
            Stroke::new(3.0, WHITE),
            StrokeKind::Inside,
        );
        painter.text(rect.center(), Align2::CENTER_CENTER, label, font_medium(), BLACK);
    }

    painter.text(
        to_screen * pos2(WIDTH / 2.0, 550.0),
        Align2::CENTER_CENTER,
        "Press 1 or 2 to select",
        font_small(),
        YELLOW,
    );
}
