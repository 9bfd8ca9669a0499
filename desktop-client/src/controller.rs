use std::time::{Duration, Instant};

use common::games::SessionRng;
use common::games::tictactoe::{BoardState, GameMode, GameStatus, Mark, select_move};
use common::log;
use eframe::egui::Pos2;

use crate::layout::{cell_at, mode_button_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    ModeSelection,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Enter,
    SelectFriend,
    SelectBot,
    Restart,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BoardReset,
    Finished(GameStatus),
}

/// Screen flow and game progress for the desktop window, independent of
/// rendering. Time is passed in so the bot's pause can be driven by tests.
pub struct GameController {
    screen: Screen,
    board: BoardState,
    mode: Option<GameMode>,
    bot_due: Option<Instant>,
    bot_delay: Duration,
    rng: SessionRng,
}

impl GameController {
    pub fn new(bot_delay: Duration, rng: SessionRng) -> Self {
        Self {
            screen: Screen::Menu,
            board: BoardState::new(),
            mode: None,
            bot_due: None,
            bot_delay,
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn bot_pending(&self) -> bool {
        self.bot_due.is_some()
    }

    pub fn handle_key(&mut self, key: InputKey) -> Option<GameEvent> {
        match (self.screen, key) {
            (Screen::Menu, InputKey::Enter) => {
                self.set_screen(Screen::ModeSelection);
                None
            }
            (Screen::ModeSelection, InputKey::SelectFriend) => Some(self.start(GameMode::Friend)),
            (Screen::ModeSelection, InputKey::SelectBot) => Some(self.start(GameMode::Bot)),
            (Screen::Playing, InputKey::Restart) if self.board.is_game_over() => {
                self.board.reset();
                self.bot_due = None;
                Some(GameEvent::BoardReset)
            }
            (Screen::Playing, InputKey::Escape) => {
                self.bot_due = None;
                self.set_screen(Screen::Menu);
                None
            }
            _ => None,
        }
    }

    pub fn handle_click(&mut self, point: Pos2, now: Instant) -> Option<GameEvent> {
        match self.screen {
            Screen::Playing => self.play_at(point, now),
            Screen::ModeSelection => mode_button_at(point).map(|mode| self.start(mode)),
            Screen::Menu => None,
        }
    }

    /// Plays the bot's reply once its pause has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<GameEvent> {
        let due = self.bot_due?;
        if now < due {
            return None;
        }
        self.bot_due = None;

        if self.screen != Screen::Playing || self.board.is_game_over() {
            return None;
        }

        let pos = select_move(&self.board, &mut self.rng)?;
        let status = self.board.apply_move(pos.row, pos.col).ok()?;
        self.finished(status)
    }

    fn play_at(&mut self, point: Pos2, now: Instant) -> Option<GameEvent> {
        if self.board.is_game_over() || self.bot_due.is_some() {
            return None;
        }

        let pos = cell_at(point)?;
        let status = self.board.apply_move(pos.row, pos.col).ok()?;

        if status == GameStatus::InProgress
            && self.mode == Some(GameMode::Bot)
            && self.board.current_mark() == Mark::O
        {
            self.bot_due = Some(now + self.bot_delay);
        }

        self.finished(status)
    }

    fn finished(&self, status: GameStatus) -> Option<GameEvent> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => {
                log!("Player {} wins", mark);
                Some(GameEvent::Finished(status))
            }
            GameStatus::Tied => {
                log!("Game tied");
                Some(GameEvent::Finished(status))
            }
        }
    }

    fn start(&mut self, mode: GameMode) -> GameEvent {
        log!("Starting game against {}", mode.label());
        self.mode = Some(mode);
        self.board.reset();
        self.bot_due = None;
        self.set_screen(Screen::Playing);
        GameEvent::BoardReset
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            log!("Screen {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
        }
    }
}
