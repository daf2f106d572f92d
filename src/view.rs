//! Page regions the renderer and dispatcher write into.
//!
//! Each region is a plain value owned by [`Page`]; nothing reaches into a
//! shared document.

use chrono::{DateTime, Duration, Utc};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const STATUS_LIFETIME_SECS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveControl {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub email: String,
    pub remove: RemoveControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantSection {
    Placeholder(String),
    Entries(Vec<ParticipantEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub capacity: String,
    pub participants: ParticipantSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListContent {
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    Fallback(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityList {
    content: ListContent,
}

impl ActivityList {
    pub fn content(&self) -> &ListContent {
        &self.content
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.content {
            ListContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }

    pub fn set_cards(&mut self, cards: Vec<ActivityCard>) {
        self.content = ListContent::Cards(cards);
    }

    pub fn show_fallback(&mut self, text: impl Into<String>) {
        self.content = ListContent::Fallback(text.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
            disabled: true,
        }
    }

    pub fn activity(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySelect {
    options: Vec<SelectOption>,
    selected: String,
}

impl Default for ActivitySelect {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::placeholder()],
            selected: String::new(),
        }
    }
}

impl ActivitySelect {
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options
            .iter()
            .any(|option| !option.disabled && option.value == name)
    }

    // A selection missing from the new options falls back to the placeholder.
    pub fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        if !self.contains(&self.selected) {
            self.selected.clear();
        }
    }

    pub fn select(&mut self, name: &str) {
        self.selected = name.to_string();
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub activity: ActivitySelect,
    pub email: String,
}

impl SignupForm {
    pub fn fill(&mut self, activity: &str, email: &str) {
        self.activity.select(activity);
        self.email = email.to_string();
    }

    pub fn reset(&mut self) {
        self.activity.reset();
        self.email.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn hides_at(&self) -> DateTime<Utc> {
        self.shown_at + Duration::seconds(STATUS_LIFETIME_SECS)
    }

    pub fn visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.hides_at()
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.hides_at() - now).max(Duration::zero())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusArea {
    current: Option<StatusMessage>,
}

impl StatusArea {
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.show_at(text, kind, Utc::now());
    }

    pub fn show_at(&mut self, text: impl Into<String>, kind: StatusKind, now: DateTime<Utc>) {
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
            shown_at: now,
        });
    }

    pub fn last(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn visible_at(&self, now: DateTime<Utc>) -> Option<&StatusMessage> {
        self.current.as_ref().filter(|message| message.visible_at(now))
    }

    pub fn visible(&self) -> Option<&StatusMessage> {
        self.visible_at(Utc::now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertSlot {
    pending: Option<String>,
}

impl AlertSlot {
    pub fn raise(&mut self, text: impl Into<String>) {
        self.pending = Some(text.into());
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub activities_list: ActivityList,
    pub signup_form: SignupForm,
    pub message: StatusArea,
    pub alert: AlertSlot,
}

pub trait Prompt {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}
