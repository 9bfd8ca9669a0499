use std::path::Path;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use common::games::tictactoe::GameMode;
use common::{GameError, log};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::api::{
    ApiError, BoardResponse, GameRequest, GameStateResponse, MoveRequest, NewGameResponse,
    SetModeRequest, StatusResponse, require_game_id,
};
use crate::session_store::SessionStore;

#[derive(Clone)]
pub struct WebServerState {
    pub store: SessionStore,
}

pub fn build_router(state: WebServerState, static_files_path: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/new-game", post(new_game))
        .route("/api/make-move", post(make_move))
        .route("/api/set-mode", post(set_mode))
        .route("/api/reset", post(reset_game))
        .route("/api/game-state", post(game_state))
        .fallback_service(ServeDir::new(static_files_path))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(
    store: SessionStore,
    bind_address: &str,
    static_files_path: &Path,
) -> std::io::Result<()> {
    let app = build_router(WebServerState { store }, static_files_path);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log!("Web server listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received");
}

async fn new_game(State(state): State<WebServerState>) -> Json<NewGameResponse> {
    let game_id = state.store.create_session().await;
    log!("Created game {} ({} active)", game_id, state.store.len().await);
    Json(NewGameResponse { game_id })
}

async fn make_move(
    State(state): State<WebServerState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<BoardResponse>, ApiError> {
    let Json(request) = payload?;
    let game_id = require_game_id(request.game_id)?;
    let result = state
        .store
        .make_move(&game_id, request.row, request.col)
        .await?;

    let board = &result.snapshot.board;
    if board.is_game_over() {
        log!("Game {} finished: {:?}", game_id, board.status());
    }

    Ok(Json(BoardResponse::from_board(board).with_bot_move(result.bot_move)))
}

async fn set_mode(
    State(state): State<WebServerState>,
    payload: Result<Json<SetModeRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(request) = payload?;
    let game_id = require_game_id(request.game_id)?;
    if !state.store.contains(&game_id).await {
        return Err(GameError::SessionNotFound(game_id).into());
    }

    let mode: Option<GameMode> = request
        .mode
        .map(|mode| mode.parse())
        .transpose()
        .map_err(ApiError::InvalidMode)?;
    state.store.set_mode(&game_id, mode).await?;
    log!("Game {} mode set to {}", game_id, mode.map_or("none", GameMode::as_str));

    Ok(Json(StatusResponse { status: "success" }))
}

async fn reset_game(
    State(state): State<WebServerState>,
    payload: Result<Json<GameRequest>, JsonRejection>,
) -> Result<Json<BoardResponse>, ApiError> {
    let Json(request) = payload?;
    let game_id = require_game_id(request.game_id)?;
    let snapshot = state.store.reset(&game_id).await?;
    log!("Game {} reset", game_id);
    Ok(Json(BoardResponse::from_board(&snapshot.board)))
}

async fn game_state(
    State(state): State<WebServerState>,
    payload: Result<Json<GameRequest>, JsonRejection>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let Json(request) = payload?;
    let game_id = require_game_id(request.game_id)?;
    let snapshot = state.store.snapshot(&game_id).await?;
    Ok(Json(GameStateResponse::new(&snapshot.board, snapshot.mode)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use common::games::SessionRng;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = SessionStore::with_rng(SessionRng::new(5));
        build_router(WebServerState { store }, Path::new("static-test-missing"))
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn new_game_id(app: &Router) -> String {
        let (status, body) = post_json(app, "/api/new-game", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        body["game_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_new_game_returns_distinct_ids() {
        let app = app();
        let first = new_game_id(&app).await;
        let second = new_game_id(&app).await;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_game_state_of_fresh_game() {
        let app = app();
        let game_id = new_game_id(&app).await;
        let (status, body) =
            post_json(&app, "/api/game-state", json!({ "game_id": game_id })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["board"], json!([["", "", ""], ["", "", ""], ["", "", ""]]));
        assert_eq!(body["current_player"], "X");
        assert_eq!(body["game_over"], false);
        assert_eq!(body["winner"], Value::Null);
        assert_eq!(body["game_mode"], Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_game_is_not_found_everywhere() {
        let app = app();
        let cases = [
            ("/api/make-move", json!({ "game_id": "nope", "row": 0, "col": 0 })),
            ("/api/set-mode", json!({ "game_id": "nope", "mode": "bot" })),
            ("/api/reset", json!({ "game_id": "nope" })),
            ("/api/game-state", json!({ "game_id": "nope" })),
        ];
        for (uri, body) in cases {
            let (status, response) = post_json(&app, uri, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(response["error"], "Game not found");
        }
    }

    #[tokio::test]
    async fn test_unknown_game_wins_over_incomplete_body() {
        let app = app();
        let cases = [
            ("/api/make-move", json!({ "game_id": "nope" })),
            ("/api/make-move", json!({ "game_id": "nope", "row": null, "col": 1 })),
            ("/api/set-mode", json!({ "game_id": "nope" })),
            ("/api/set-mode", json!({ "game_id": "nope", "mode": null })),
            ("/api/set-mode", json!({ "game_id": "nope", "mode": "robot" })),
            ("/api/make-move", json!({ "row": 0, "col": 0 })),
            ("/api/reset", json!({})),
            ("/api/game-state", json!({ "game_id": null })),
        ];
        for (uri, body) in cases {
            let (status, response) = post_json(&app, uri, body.clone()).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", uri, body);
            assert_eq!(response["error"], "Game not found");
        }
    }

    #[tokio::test]
    async fn test_missing_coordinates_are_invalid_moves() {
        let app = app();
        let game_id = new_game_id(&app).await;
        for body in [
            json!({ "game_id": game_id }),
            json!({ "game_id": game_id, "row": 0 }),
            json!({ "game_id": game_id, "row": null, "col": 0 }),
        ] {
            let (status, response) = post_json(&app, "/api/make-move", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"], "Invalid move");
        }
    }

    #[tokio::test]
    async fn test_null_mode_clears_mode() {
        let app = app();
        let game_id = new_game_id(&app).await;
        post_json(&app, "/api/set-mode", json!({ "game_id": game_id, "mode": "bot" })).await;

        let (status, body) = post_json(
            &app,
            "/api/set-mode",
            json!({ "game_id": game_id, "mode": null }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");

        let (_, state) = post_json(&app, "/api/game-state", json!({ "game_id": game_id })).await;
        assert_eq!(state["game_mode"], Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_bad_request() {
        let app = app();
        let game_id = new_game_id(&app).await;
        let (status, body) = post_json(
            &app,
            "/api/make-move",
            json!({ "game_id": game_id, "row": "middle", "col": 1 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request");

        let request = Request::builder()
            .method("POST")
            .uri("/api/game-state")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid request");
    }

    #[tokio::test]
    async fn test_friend_game_until_x_wins() {
        let app = app();
        let game_id = new_game_id(&app).await;
        let (status, _) = post_json(
            &app,
            "/api/set-mode",
            json!({ "game_id": game_id, "mode": "friend" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let (status, body) = post_json(
                &app,
                "/api/make-move",
                json!({ "game_id": game_id, "row": row, "col": col }),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.get("bot_move").is_none());
        }

        let (status, body) = post_json(
            &app,
            "/api/make-move",
            json!({ "game_id": game_id, "row": 0, "col": 2 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["board"][0], json!(["X", "X", "X"]));
        assert_eq!(body["game_over"], true);
        assert_eq!(body["winner"], "X");
        assert_eq!(body["current_player"], "X");

        let (status, body) = post_json(
            &app,
            "/api/make-move",
            json!({ "game_id": game_id, "row": 2, "col": 2 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid move");
    }

    #[tokio::test]
    async fn test_bot_mode_replies_automatically() {
        let app = app();
        let game_id = new_game_id(&app).await;
        post_json(&app, "/api/set-mode", json!({ "game_id": game_id, "mode": "bot" })).await;

        let (status, body) = post_json(
            &app,
            "/api/make-move",
            json!({ "game_id": game_id, "row": 0, "col": 0 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bot_move"], json!({ "row": 1, "col": 1 }));
        assert_eq!(body["board"][1][1], "O");
        assert_eq!(body["current_player"], "X");
        assert_eq!(body["game_over"], false);

        let (_, state) = post_json(&app, "/api/game-state", json!({ "game_id": game_id })).await;
        assert_eq!(state["game_mode"], "bot");
    }

    #[tokio::test]
    async fn test_invalid_moves_are_bad_requests() {
        let app = app();
        let game_id = new_game_id(&app).await;
        post_json(
            &app,
            "/api/make-move",
            json!({ "game_id": game_id, "row": 1, "col": 1 }),
        )
        .await;

        for (row, col) in [(1, 1), (3, 0), (0, -1)] {
            let (status, body) = post_json(
                &app,
                "/api/make-move",
                json!({ "game_id": game_id, "row": row, "col": col }),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Invalid move");
        }

        let (_, state) = post_json(&app, "/api/game-state", json!({ "game_id": game_id })).await;
        assert_eq!(state["current_player"], "O");
    }

    #[tokio::test]
    async fn test_unknown_mode_is_rejected() {
        let app = app();
        let game_id = new_game_id(&app).await;
        let (status, body) = post_json(
            &app,
            "/api/set-mode",
            json!({ "game_id": game_id, "mode": "robot" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid mode");

        let (_, state) = post_json(&app, "/api/game-state", json!({ "game_id": game_id })).await;
        assert_eq!(state["game_mode"], Value::Null);
    }

    #[tokio::test]
    async fn test_reset_clears_board_and_keeps_mode() {
        let app = app();
        let game_id = new_game_id(&app).await;
        post_json(&app, "/api/set-mode", json!({ "game_id": game_id, "mode": "bot" })).await;
        post_json(
            &app,
            "/api/make-move",
            json!({ "game_id": game_id, "row": 2, "col": 2 }),
        )
        .await;

        let (status, body) = post_json(&app, "/api/reset", json!({ "game_id": game_id })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["board"], json!([["", "", ""], ["", "", ""], ["", "", ""]]));
        assert_eq!(body["current_player"], "X");
        assert_eq!(body["game_over"], false);
        assert_eq!(body["winner"], Value::Null);

        let (_, state) = post_json(&app, "/api/game-state", json!({ "game_id": game_id })).await;
        assert_eq!(state["game_mode"], "bot");
    }
}
