pub mod app_config;
pub mod cli;
pub mod commands;
pub mod state;

pub use app_config::Config;
pub use cli::{Args, Command};
pub use state::AppState;
