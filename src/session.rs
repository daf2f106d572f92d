use axum::http::{header, HeaderMap, HeaderValue};
use cookie::{Cookie, SameSite};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "board_session";

pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            cookie
                .trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        })
}

pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn session_cookie(id: &str) -> Option<HeaderValue> {
    let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.to_string().parse().ok()
}
