use axum::http::StatusCode;

/// Failure of the page host itself, rendered straight back to the browser.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure talking to the activities backend.
pub enum ClientError {
    Network(reqwest::Error),
    Status { status: u16, detail: Option<String> },
    Decode(serde_json::Error),
    Url(String),
}

impl std::fmt::Debug for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ClientError::Network(e) => write!(f, "Network: {e:?}"),
            ClientError::Status { status, detail } => {
                write!(f, "Status: {status} ({detail:?})")
            }
            ClientError::Decode(e) => write!(f, "Decode: {e:?}"),
            ClientError::Url(e) => write!(f, "Url: {e:?}"),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ClientError::Network(e) => write!(f, "Network error: {e}"),
            ClientError::Status {
                detail: Some(detail),
                ..
            } => write!(f, "{detail}"),
            ClientError::Status { status, .. } => write!(f, "Request failed with status {status}"),
            ClientError::Decode(e) => write!(f, "Unexpected response: {e}"),
            ClientError::Url(e) => write!(f, "Invalid request URL: {e}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e)
    }
}
