#![allow(dead_code)]

use activity_board::models::{ActivityCatalog, ActivityDetails};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the activities backend, recording every request.
#[derive(Clone, Default)]
pub struct Backend {
    inner: Arc<Mutex<BackendState>>,
}

#[derive(Default)]
struct BackendState {
    catalog: ActivityCatalog,
    requests: Vec<String>,
    fail_catalog: bool,
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: String,
}

type Reply = (StatusCode, Json<Value>);

impl Backend {
    pub fn seeded() -> Self {
        let backend = Backend::default();
        backend.reset();
        backend
    }

    pub fn reset(&self) {
        let mut state = self.inner.lock().unwrap();
        state.catalog = seed_catalog();
        state.requests.clear();
        state.fail_catalog = false;
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.inner.lock().unwrap().requests.clear();
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .catalog
            .get(activity)
            .map(|details| details.participants.clone())
            .unwrap_or_default()
    }

    pub fn remove_activity(&self, activity: &str) {
        self.inner.lock().unwrap().catalog.remove(activity);
    }

    pub fn set_fail_catalog(&self, fail: bool) {
        self.inner.lock().unwrap().fail_catalog = fail;
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/activities", get(list_activities))
            .route("/activities/:name/signup", post(signup))
            .route("/activities/:name/unregister", delete(unregister))
            .with_state(self.clone())
    }

    /// Serves on an ephemeral port inside the current runtime; returns the base URL.
    pub async fn serve(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind backend");
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("backend stopped");
        });
        format!("http://{addr}")
    }

    fn record(&self, line: String) {
        self.inner.lock().unwrap().requests.push(line);
    }
}

async fn list_activities(State(backend): State<Backend>) -> Reply {
    backend.record("GET /activities".to_string());
    let state = backend.inner.lock().unwrap();
    if state.fail_catalog {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "catalog unavailable" })),
        );
    }
    (StatusCode::OK, Json(json!(state.catalog)))
}

async fn signup(
    State(backend): State<Backend>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Reply {
    backend.record(format!("POST {name} {}", query.email));
    let mut state = backend.inner.lock().unwrap();
    let Some(details) = state.catalog.get_mut(&name) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Activity not found" })));
    };
    if details.participants.contains(&query.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Student is already signed up" })),
        );
    }
    details.participants.push(query.email.clone());
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Signed up {} for {name}", query.email) })),
    )
}

async fn unregister(
    State(backend): State<Backend>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Reply {
    backend.record(format!("DELETE {name} {}", query.email));
    let mut state = backend.inner.lock().unwrap();
    let Some(details) = state.catalog.get_mut(&name) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Activity not found" })));
    };
    if !details.participants.contains(&query.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Student is not signed up for this activity" })),
        );
    }
    details.participants.retain(|p| p != &query.email);
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Unregistered {} from {name}", query.email) })),
    )
}

fn activity(description: &str, schedule: &str, max: u32, participants: &[&str]) -> ActivityDetails {
    ActivityDetails {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn seed_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    catalog.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    catalog.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Art Club".to_string(),
        activity(
            "Explore various art mediums including painting, drawing, and sculpture",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &[],
        ),
    );
    catalog
}
