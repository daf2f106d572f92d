use crate::dispatch::confirm_question;
use crate::errors::AppError;
use crate::models::{Command, SignupRequest, UnregisterQuery, UnregisterRequest};
use crate::session::{session_cookie, session_id};
use crate::state::{AppState, Session};
use crate::ui::{render_confirm, render_page, stylesheet};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = state.session(session_id(&headers)).await;
    let mut board = session.board.lock().await;
    board.load().await;
    let html = render_page(board.page(), Utc::now());
    // The alert is blocking: show it once.
    board.page_mut().alert.take();
    with_session(&session, Html(html))
}

pub async fn style() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], stylesheet())
}

pub async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignupRequest>,
) -> Response {
    let session = state.session(session_id(&headers)).await;
    let mut board = session.board.lock().await;
    board.ensure_loaded().await;
    board
        .page_mut()
        .signup_form
        .fill(&form.activity, &form.email);

    let command = Command::SubmitSignup {
        activity: form.activity,
        email: form.email,
    };
    board.dispatch(command, &mut |_: &str| true).await;
    with_session(&session, Redirect::to("/"))
}

pub async fn confirm_unregister(Query(query): Query<UnregisterQuery>) -> Html<String> {
    let question = confirm_question(&query.activity, &query.email);
    Html(render_confirm(&query.activity, &query.email, &question))
}

pub async fn unregister(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<UnregisterRequest>,
) -> Result<Response, AppError> {
    let confirmed = parse_confirm(&form.confirm)?;

    let session = state.session(session_id(&headers)).await;
    let mut board = session.board.lock().await;
    let command = Command::SubmitUnregister {
        activity: form.activity,
        email: form.email,
    };
    let outcome = board
        .dispatch(command, &mut |question: &str| {
            info!("{question} -> {}", if confirmed { "yes" } else { "no" });
            confirmed
        })
        .await;
    info!("unregister outcome: {outcome:?}");

    Ok(with_session(&session, Redirect::to("/")))
}

fn with_session(session: &Session, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if session.is_new {
        debug!("new session {}", session.id);
        if let Some(cookie) = session_cookie(&session.id) {
            response.headers_mut().append(header::SET_COOKIE, cookie);
        }
    }
    response
}

fn parse_confirm(answer: &str) -> Result<bool, AppError> {
    match answer.trim() {
        "yes" => Ok(true),
        "no" | "" => Ok(false),
        other => Err(AppError::bad_request(format!(
            "confirm must be 'yes' or 'no', got '{other}'"
        ))),
    }
}
