use playlist_api::constant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key of the stored playlist. Every page sharing this key shares the playlist.
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { storage_key: constant::STORAGE_KEY.to_owned() }
    }
}
