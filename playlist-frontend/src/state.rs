use codee::string::JsonSerdeCodec;
use codee::{Decoder, Encoder};
use playlist_api::{Draft, Rating, Song};
use time::OffsetDateTime;

use crate::storage::Storage;
use crate::{Config, Error};

/// Songs and draft of the page, mirrored to `storage` after every change to the songs.
#[derive(Debug)]
pub struct Playlist<S> {
    storage: S,
    key: String,
    songs: Vec<Song>,
    draft: Draft,
}

impl<S: Storage> Playlist<S> {
    pub fn new(storage: S, config: Config) -> Self {
        Self { storage, key: config.storage_key, songs: Vec::new(), draft: Draft::default() }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replaces the songs with the stored ones. Nothing stored leaves them as they are.
    pub fn load(&mut self) -> Result<(), Error> {
        if let Some(value) = self.storage.get(&self.key)? {
            self.songs = <JsonSerdeCodec as Decoder<Vec<Song>>>::decode(value.as_str())?;
            leptos::logging::log!("Loaded {} songs from {:?}", self.songs.len(), self.key);
        }
        Ok(())
    }

    pub fn save(&self) -> Result<(), Error> {
        let value = <JsonSerdeCodec as Encoder<Vec<Song>>>::encode(&self.songs)?;
        self.storage.set(&self.key, &value)
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_artist(&mut self, artist: String) {
        self.draft.artist = artist;
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.draft.rating = Some(rating);
    }

    /// Appends the draft as a new song, saves and resets the draft.
    ///
    /// An incomplete draft is left untouched and `Ok(None)` is returned. If saving fails, the
    /// song is still appended and the draft reset.
    pub fn submit(&mut self, created: OffsetDateTime) -> Result<Option<&Song>, Error> {
        let Some(song) = self.draft.commit(created) else {
            return Ok(None);
        };
        self.songs.push(song);
        self.draft = Draft::default();
        self.save()?;
        Ok(self.songs.last())
    }
}
