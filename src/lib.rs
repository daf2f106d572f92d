pub mod app;
pub mod board;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod session;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use board::Board;
pub use client::{ActivityApi, HttpActivityApi};
pub use config::Config;
pub use state::AppState;
