pub const APP_NAME: &str = "Playlist";
pub const STORAGE_KEY: &str = "songs";
