use leptos::html;
use leptos::prelude::*;
use playlist_api::Song;

use super::stars::Stars;

fn Vinyl() -> impl IntoView {
    html::div()
        .class(
            "w-16 h-16 bg-gray-400 rounded-full mr-4 flex items-center justify-center text-white",
        )
        .child("Vinyl")
}

fn Row(song: Song) -> impl IntoView {
    html::div().class("flex items-center p-4 bg-gray-100 rounded").child((
        Vinyl(),
        html::div().child((
            html::h2().class("font-semibold").child(song.name),
            html::p().class("text-sm text-gray-600").child(song.artist),
            Stars(song.rating),
        )),
    ))
}

/// Songs in insertion order. Ids are not guaranteed unique, so rows are keyed by position too.
pub fn Songs(songs: Signal<Vec<Song>>) -> impl IntoView {
    html::div().class("space-y-4").child(For(component_props_builder(&For)
        .each(move || songs.get().into_iter().enumerate())
        .key(|(index, song): &(usize, Song)| (*index, song.id.clone()))
        .children(|(_, song): (usize, Song)| Row(song))
        .build()))
}
