use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ActivityCatalog = BTreeMap<String, ActivityDetails>;

/// One activity as returned by `GET /activities`.
///
/// Missing fields fall back to empty values so a partial entry still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityDetails {
    pub fn capacity_label(&self) -> String {
        format!("{}/{}", self.participants.len(), self.max_participants)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReply {
    pub ok: bool,
    pub result: ActionResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SubmitSignup { activity: String, email: String },
    SubmitUnregister { activity: String, email: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
    Declined,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UnregisterQuery {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UnregisterRequest {
    pub activity: String,
    pub email: String,
    #[serde(default)]
    pub confirm: String,
}
