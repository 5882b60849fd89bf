use leptos::html;
use leptos::prelude::*;
use playlist_api::constant;
use time::OffsetDateTime;

use super::{form, songs};
use crate::Playlist;
use crate::storage::Storage;

pub fn Page<S: Storage + 'static>(playlist: Playlist<S>) -> impl IntoView {
    let state = RwSignal::new_local(playlist);

    let name = Signal::derive(move || state.with(|state| state.draft().name.clone()));
    let artist = Signal::derive(move || state.with(|state| state.draft().artist.clone()));
    let stars = Signal::derive(move || state.with(|state| state.draft().stars()));
    let songs = Memo::new(move |_| state.with(|state| state.songs().to_vec()));

    html::main().class("flex min-h-screen p-4").child((
        html::div().class("w-1/3 pr-4").child(form::Form(
            "Add New Song",
            move || {
                (
                    form::input::Text("name", "Song Name", name, move |value| {
                        state.update(|state| state.set_name(value));
                    }),
                    form::input::Text("artist", "Artist", artist, move |value| {
                        state.update(|state| state.set_artist(value));
                    }),
                    form::input::Rating("Rating", stars, move |rating| {
                        state.update(|state| state.set_rating(rating));
                    }),
                )
            },
            "Add Song",
            move || {
                state.update(|state| match state.submit(OffsetDateTime::now_utc()) {
                    Ok(Some(song)) => {
                        leptos::logging::log!("Added {:?} by {:?}", song.name, song.artist);
                    }
                    Ok(None) => {}
                    Err(error) => leptos::logging::error!("Could not save songs: {error}"),
                });
            },
        )),
        html::div().class("w-2/3 overflow-y-auto").child((
            html::h1().class("text-2xl font-bold mb-4").child(constant::APP_NAME),
            songs::Songs(songs.into()),
        )),
    ))
}
