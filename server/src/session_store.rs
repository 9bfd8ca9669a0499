use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use common::games::SessionRng;
use common::games::tictactoe::{BoardState, GameMode, Mark, Position, select_move};
use common::id_generator::generate_game_id;
use common::{GameError, GameId, MoveRejection};
use tokio::sync::Mutex;

struct GameSession {
    board: BoardState,
    mode: Option<GameMode>,
    last_activity: Instant,
}

impl GameSession {
    fn new() -> Self {
        Self {
            board: BoardState::new(),
            mode: None,
            last_activity: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            mode: self.mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: BoardState,
    pub mode: Option<GameMode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub snapshot: GameSnapshot,
    pub bot_move: Option<Position>,
}

struct StoreInner {
    sessions: HashMap<GameId, GameSession>,
    rng: SessionRng,
}

fn find_session<'a>(
    sessions: &'a mut HashMap<GameId, GameSession>,
    game_id: &GameId,
) -> Result<&'a mut GameSession, GameError> {
    let session = sessions
        .get_mut(game_id)
        .ok_or_else(|| GameError::SessionNotFound(game_id.clone()))?;
    session.touch();
    Ok(session)
}

fn board_coordinate(value: Option<i64>) -> Result<usize, GameError> {
    let value = value.ok_or(GameError::InvalidMove(MoveRejection::MissingCoordinate))?;
    usize::try_from(value).map_err(|_| GameError::InvalidMove(MoveRejection::OutOfBounds))
}

/// Games keyed by id, shared by every request handler.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_rng(SessionRng::from_random())
    }

    pub fn with_rng(rng: SessionRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                sessions: HashMap::new(),
                rng,
            })),
        }
    }

    pub async fn create_session(&self) -> GameId {
        let mut inner = self.inner.lock().await;
        let mut game_id = generate_game_id();
        while inner.sessions.contains_key(&game_id) {
            game_id = generate_game_id();
        }
        inner.sessions.insert(game_id.clone(), GameSession::new());
        game_id
    }

    pub async fn contains(&self, game_id: &GameId) -> bool {
        self.inner.lock().await.sessions.contains_key(game_id)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.sessions.len()
    }

    /// Applies the player's move. In bot mode, when the game continues with
    /// O to move, the bot's reply is applied as well. The game is looked up
    /// before the coordinates are checked.
    pub async fn make_move(
        &self,
        game_id: &GameId,
        row: Option<i64>,
        col: Option<i64>,
    ) -> Result<MoveResult, GameError> {
        let mut guard = self.inner.lock().await;
        let StoreInner { sessions, rng } = &mut *guard;
        let session = find_session(sessions, game_id)?;

        let row = board_coordinate(row)?;
        let col = board_coordinate(col)?;
        session.board.apply_move(row, col)?;

        let mut bot_move = None;
        if session.mode == Some(GameMode::Bot)
            && !session.board.is_game_over()
            && session.board.current_mark() == Mark::O
            && let Some(pos) = select_move(&session.board, rng)
        {
            session.board.apply_move(pos.row, pos.col)?;
            bot_move = Some(pos);
        }

        Ok(MoveResult {
            snapshot: session.snapshot(),
            bot_move,
        })
    }

    /// `None` clears the mode.
    pub async fn set_mode(
        &self,
        game_id: &GameId,
        mode: Option<GameMode>,
    ) -> Result<(), GameError> {
        let mut inner = self.inner.lock().await;
        find_session(&mut inner.sessions, game_id)?.mode = mode;
        Ok(())
    }

    /// Clears the board; the mode survives.
    pub async fn reset(&self, game_id: &GameId) -> Result<GameSnapshot, GameError> {
        let mut inner = self.inner.lock().await;
        let session = find_session(&mut inner.sessions, game_id)?;
        session.board.reset();
        Ok(session.snapshot())
    }

    pub async fn snapshot(&self, game_id: &GameId) -> Result<GameSnapshot, GameError> {
        let mut inner = self.inner.lock().await;
        Ok(find_session(&mut inner.sessions, game_id)?.snapshot())
    }

    pub async fn remove_inactive(&self, timeout: Duration) -> Vec<GameId> {
        let mut inner = self.inner.lock().await;
        let expired: Vec<GameId> = inner
            .sessions
            .iter()
            .filter(|(_, session)| session.last_activity.elapsed() >= timeout)
            .map(|(id, _)| id.clone())
            .collect();
        for game_id in &expired {
            inner.sessions.remove(game_id);
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::GameStatus;

    fn store() -> SessionStore {
        SessionStore::with_rng(SessionRng::new(11))
    }

    #[tokio::test]
    async fn test_new_session_starts_empty_without_mode() {
        let store = store();
        let game_id = store.create_session().await;
        let snapshot = store.snapshot(&game_id).await.unwrap();
        assert_eq!(snapshot.board, BoardState::new());
        assert_eq!(snapshot.mode, None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_reported() {
        let store = store();
        let missing = GameId::from("missing");
        let expected = Err(GameError::SessionNotFound(missing.clone()));
        assert_eq!(store.snapshot(&missing).await, expected);
        assert_eq!(store.reset(&missing).await, expected);
        assert_eq!(
            store.set_mode(&missing, Some(GameMode::Bot)).await,
            Err(GameError::SessionNotFound(missing.clone()))
        );
        assert_eq!(
            store.make_move(&missing, Some(0), Some(0)).await,
            Err(GameError::SessionNotFound(missing.clone()))
        );
    }

    #[tokio::test]
    async fn test_friend_mode_has_no_bot_reply() {
        let store = store();
        let game_id = store.create_session().await;
        store.set_mode(&game_id, Some(GameMode::Friend)).await.unwrap();
        let result = store.make_move(&game_id, Some(0), Some(0)).await.unwrap();
        assert_eq!(result.bot_move, None);
        assert_eq!(result.snapshot.board.current_mark(), Mark::O);
    }

    #[tokio::test]
    async fn test_bot_mode_replies_in_center() {
        let store = store();
        let game_id = store.create_session().await;
        store.set_mode(&game_id, Some(GameMode::Bot)).await.unwrap();
        let result = store.make_move(&game_id, Some(0), Some(0)).await.unwrap();
        assert_eq!(result.bot_move, Some(Position::new(1, 1)));
        let board = &result.snapshot.board;
        assert_eq!(board.cell(Position::new(1, 1)), Mark::O);
        assert_eq!(board.current_mark(), Mark::X);
    }

    #[tokio::test]
    async fn test_bot_does_not_move_after_player_wins() {
        let store = store();
        let game_id = store.create_session().await;
        // Friend moves set up X X _ / O O _ before the bot takes over.
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            store.make_move(&game_id, Some(row), Some(col)).await.unwrap();
        }
        store.set_mode(&game_id, Some(GameMode::Bot)).await.unwrap();
        let result = store.make_move(&game_id, Some(0), Some(2)).await.unwrap();
        assert_eq!(result.bot_move, None);
        assert_eq!(result.snapshot.board.status(), GameStatus::Won(Mark::X));
    }

    #[tokio::test]
    async fn test_invalid_moves_leave_session_unchanged() {
        let store = store();
        let game_id = store.create_session().await;
        store.make_move(&game_id, Some(1), Some(1)).await.unwrap();
        let before = store.snapshot(&game_id).await.unwrap();

        for (row, col) in [(1, 1), (-1, 0), (0, 3), (i64::MAX, 0)] {
            assert!(matches!(
                store.make_move(&game_id, Some(row), Some(col)).await,
                Err(GameError::InvalidMove(_))
            ));
        }
        assert_eq!(store.snapshot(&game_id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_reset_keeps_mode() {
        let store = store();
        let game_id = store.create_session().await;
        store.set_mode(&game_id, Some(GameMode::Bot)).await.unwrap();
        store.make_move(&game_id, Some(2), Some(2)).await.unwrap();
        let snapshot = store.reset(&game_id).await.unwrap();
        assert_eq!(snapshot.board, BoardState::new());
        assert_eq!(snapshot.mode, Some(GameMode::Bot));
    }

    #[tokio::test]
    async fn test_remove_inactive_respects_timeout() {
        let store = store();
        let game_id = store.create_session().await;
        assert!(store.remove_inactive(Duration::from_secs(3600)).await.is_empty());
        assert_eq!(store.remove_inactive(Duration::ZERO).await, vec![game_id.clone()]);
        assert!(!store.contains(&game_id).await);
    }

    #[tokio::test]
    async fn test_missing_coordinates_checked_after_lookup() {
        let store = store();
        let missing = GameId::from("missing");
        assert_eq!(
            store.make_move(&missing, None, None).await,
            Err(GameError::SessionNotFound(missing.clone()))
        );

        let game_id = store.create_session().await;
        assert_eq!(
            store.make_move(&game_id, Some(0), None).await,
            Err(GameError::InvalidMove(MoveRejection::MissingCoordinate))
        );
        assert_eq!(store.snapshot(&game_id).await.unwrap().board, BoardState::new());
    }

    #[tokio::test]
    async fn test_clearing_mode_disables_bot() {
        let store = store();
        let game_id = store.create_session().await;
        store.set_mode(&game_id, Some(GameMode::Bot)).await.unwrap();
        store.set_mode(&game_id, None).await.unwrap();
        assert_eq!(store.snapshot(&game_id).await.unwrap().mode, None);

        let result = store.make_move(&game_id, Some(0), Some(0)).await.unwrap();
        assert_eq!(result.bot_move, None);
    }
}
