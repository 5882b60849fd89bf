mod components;
mod config;
mod error;
mod state;
mod storage;

pub use components::Body;
pub use config::Config;
pub use error::Error;
pub use state::Playlist;
pub use storage::{Local, Storage};
