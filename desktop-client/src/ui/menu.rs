use eframe::egui::{Align2, Painter, emath::RectTransform, pos2};

use super::{BLUE, RED, WHITE, YELLOW, font_large, font_medium};
use crate::layout::{HEIGHT, WIDTH};

pub fn draw_menu(painter: &Painter, to_screen: &RectTransform) {
    painter.text(
        to_screen * pos2(WIDTH / 2.0, HEIGHT / 2.0 - 100.0),
        Align2::CENTER_CENTER,
        "TIC-TAC-TOE",
        font_large(),
        WHITE,
    );
    painter.text(
        to_screen * pos2(WIDTH / 2.0, HEIGHT / 2.0 + 50.0),
        Align2::CENTER_CENTER,
        "Press ENTER to Start",
        font_medium(),
        YELLOW,
    );

    for i in 0..3 {
        let offset = i as f32 * 200.0;
        painter.text(
            to_screen * pos2(50.0 + offset, 50.0),
            Align2::LEFT_TOP,
            "X",
            font_medium(),
            RED,
        );
        painter.text(
            to_screen * pos2(150.0 + offset, 550.0),
            Align2::LEFT_TOP,
            "O",
            font_medium(),
            BLUE,
        );
    }
}
