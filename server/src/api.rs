use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::games::tictactoe::{BOARD_SIZE, BoardState, GameMode, GameStatus, Position};
use common::{GameError, GameId, log_warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type WireBoard = [[&'static str; BOARD_SIZE]; BOARD_SIZE];

/// Every field is optional so that an unknown or missing `game_id` is
/// reported before anything else in the body is looked at.
#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub game_id: Option<GameId>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub game_id: Option<GameId>,
    pub row: Option<i64>,
    pub col: Option<i64>,
}

/// A missing or `null` mode clears the game's mode.
#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    pub game_id: Option<GameId>,
    pub mode: Option<String>,
}

pub fn require_game_id(game_id: Option<GameId>) -> Result<GameId, ApiError> {
    game_id.ok_or(ApiError::MissingGameId)
}

#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    pub game_id: GameId,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WireMove {
    pub row: usize,
    pub col: usize,
}

impl From<Position> for WireMove {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: WireBoard,
    pub current_player: &'static str,
    pub game_over: bool,
    pub winner: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_move: Option<WireMove>,
}

impl BoardResponse {
    pub fn from_board(board: &BoardState) -> Self {
        Self {
            board: wire_board(board),
            current_player: board.current_mark().symbol(),
            game_over: board.is_game_over(),
            winner: wire_winner(board.status()),
            bot_move: None,
        }
    }

    pub fn with_bot_move(mut self, bot_move: Option<Position>) -> Self {
        self.bot_move = bot_move.map(WireMove::from);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct GameStateResponse {
    pub board: WireBoard,
    pub current_player: &'static str,
    pub game_over: bool,
    pub winner: Option<&'static str>,
    pub game_mode: Option<GameMode>,
}

impl GameStateResponse {
    pub fn new(board: &BoardState, mode: Option<GameMode>) -> Self {
        Self {
            board: wire_board(board),
            current_player: board.current_mark().symbol(),
            game_over: board.is_game_over(),
            winner: wire_winner(board.status()),
            game_mode: mode,
        }
    }
}

fn wire_board(board: &BoardState) -> WireBoard {
    let cells = *board.cells();
    cells.map(|row| row.map(|mark| mark.symbol()))
}

fn wire_winner(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(mark) => Some(mark.symbol()),
        GameStatus::Tied => Some("Tie"),
    }
}

#[derive(Debug)]
pub enum ApiError {
    Game(GameError),
    MissingGameId,
    InvalidMode(String),
    MalformedBody(JsonRejection),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Game(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Game(GameError::SessionNotFound(_)) | ApiError::MissingGameId => {
                (StatusCode::NOT_FOUND, "Game not found")
            }
            ApiError::Game(GameError::InvalidMove(_)) => (StatusCode::BAD_REQUEST, "Invalid move"),
            ApiError::InvalidMode(_) => (StatusCode::BAD_REQUEST, "Invalid mode"),
            ApiError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
        };
        match &self {
            ApiError::Game(err) => log_warn!("Request rejected: {}", err),
            ApiError::MissingGameId => log_warn!("Request rejected: no game_id"),
            ApiError::InvalidMode(err) => log_warn!("Request rejected: {}", err),
            ApiError::MalformedBody(rejection) => log_warn!("Request rejected: {}", rejection),
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
