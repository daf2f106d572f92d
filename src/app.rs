use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/signup", post(handlers::signup))
        .route(
            "/unregister",
            get(handlers::confirm_unregister).post(handlers::unregister),
        )
        .with_state(state)
}
