mod board_view;
mod menu;
mod mode_select;

pub use board_view::draw_board;
pub use menu::draw_menu;
pub use mode_select::draw_mode_selection;

use eframe::egui::{Color32, FontId};

pub const WHITE: Color32 = Color32::WHITE;
pub const BLACK: Color32 = Color32::BLACK;
pub const RED: Color32 = Color32::from_rgb(255, 50, 50);
pub const BLUE: Color32 = Color32::from_rgb(50, 150, 255);
pub const GREEN: Color32 = Color32::from_rgb(50, 255, 100);
pub const YELLOW: Color32 = Color32::from_rgb(255, 255, 100);
pub const PURPLE: Color32 = Color32::from_rgb(200, 100, 255);
pub const GRAY: Color32 = Color32::from_rgb(128, 128, 128);
pub const LIGHT_GRAY: Color32 = Color32::from_rgb(200, 200, 200);

pub fn font_large() -> FontId {
    FontId::proportional(52.0)
}

pub fn font_medium() -> FontId {
    FontId::proportional(34.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(24.0)
}
