use std::time::{Duration, Instant};

use common::games::SessionRng;
use common::games::tictactoe::GameStatus;
use eframe::egui::{self, Key, Sense, emath::RectTransform};

use crate::config::DesktopConfig;
use crate::controller::{GameController, GameEvent, InputKey, Screen};
use crate::layout::{CELEBRATION_ORIGIN, window_rect};
use crate::particles::Celebration;
use crate::ui::{BLACK, draw_board, draw_menu, draw_mode_selection};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct TicTacToeApp {
    controller: GameController,
    celebration: Celebration,
    rng: SessionRng,
    config: DesktopConfig,
}

impl TicTacToeApp {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            controller: GameController::new(config.bot_delay(), SessionRng::from_random()),
            celebration: Celebration::default(),
            rng: SessionRng::from_random(),
            config,
        }
    }

    fn handle_event(&mut self, event: Option<GameEvent>) {
        match event {
            Some(GameEvent::Finished(GameStatus::Won(_))) => {
                self.celebration.start(
                    CELEBRATION_ORIGIN,
                    self.config.celebration_particles,
                    self.config.celebration_frames,
                    &mut self.rng,
                );
            }
            Some(GameEvent::BoardReset) => self.celebration.clear(),
            Some(GameEvent::Finished(_)) | None => {}
        }
    }

    fn pressed_keys(ctx: &egui::Context) -> Vec<InputKey> {
        ctx.input(|i| {
            [
                (Key::Enter, InputKey::Enter),
                (Key::Num1, InputKey::SelectFriend),
                (Key::Num2, InputKey::SelectBot),
                (Key::R, InputKey::Restart),
                (Key::Escape, InputKey::Escape),
            ]
            .into_iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, input)| input)
            .collect()
        })
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for key in Self::pressed_keys(ctx) {
            let event = self.controller.handle_key(key);
            self.handle_event(event);
            if self.controller.screen() == Screen::Menu {
                self.celebration.clear();
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BLACK))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
                let to_screen = RectTransform::from_to(window_rect(), response.rect);

                if response.clicked()
                    && let Some(pointer) = response.interact_pointer_pos()
                {
                    let point = to_screen.inverse() * pointer;
                    let event = self.controller.handle_click(point, Instant::now());
                    self.handle_event(event);
                }

                let event = self.controller.tick(Instant::now());
                self.handle_event(event);
                self.celebration.step(window_rect());

                match self.controller.screen() {
                    Screen::Menu => draw_menu(&painter, &to_screen),
                    Screen::ModeSelection => {
                        draw_mode_selection(&painter, &to_screen, self.controller.mode())
                    }
                    Screen::Playing => draw_board(
                        &painter,
                        &to_screen,
                        self.controller.board(),
                        self.controller.mode(),
                        &self.celebration,
                    ),
                }
            });

        if self.controller.bot_pending() || self.celebration.is_active() {
            ctx.request_repaint_after(FRAME_INTERVAL);
        }
    }
}
