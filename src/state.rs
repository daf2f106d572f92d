use crate::board::Board;
use crate::client::HttpActivityApi;
use crate::session::new_session_id;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedBoard = Arc<Mutex<Board<HttpActivityApi>>>;

/// One board per browser session. Each board is locked for a whole page
/// load or action, so one browser's flows never interleave.
#[derive(Clone)]
pub struct AppState {
    api: HttpActivityApi,
    sessions: Arc<Mutex<HashMap<String, SharedBoard>>>,
}

pub struct Session {
    pub id: String,
    pub is_new: bool,
    pub board: SharedBoard,
}

impl AppState {
    pub fn new(api: HttpActivityApi) -> Self {
        Self {
            api,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    // An unknown id (e.g. after a restart) gets a fresh board under the same id.
    pub async fn session(&self, id: Option<String>) -> Session {
        let (id, is_new) = match id {
            Some(id) => (id, false),
            None => (new_session_id(), true),
        };

        let mut sessions = self.sessions.lock().await;
        let board = sessions
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(Board::new(self.api.clone()))))
            .clone();

        Session { id, is_new, board }
    }
}
