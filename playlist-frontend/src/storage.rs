use crate::Error;

/// A string key-value store holding the encoded playlist.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// The browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct Local(web_sys::Storage);

impl Local {
    pub fn new() -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::MissingWindow)?;
        window.local_storage()?.map(Self).ok_or(Error::MissingStorage)
    }
}

impl Storage for Local {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.0.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        Ok(self.0.set_item(key, value)?)
    }
}
