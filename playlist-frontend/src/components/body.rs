use leptos::either::Either;
use leptos::html;
use leptos::prelude::*;

use super::page::Page;
use crate::storage::Local;
use crate::{Config, Playlist};

pub fn Body() -> impl IntoView {
    match Local::new() {
        Ok(storage) => {
            let mut playlist = Playlist::new(storage, Config::default());
            if let Err(error) = playlist.load() {
                leptos::logging::error!("Could not load stored songs: {error}");
            }
            Either::Left(Page(playlist))
        }
        Err(error) => {
            leptos::logging::error!("{error:?}");
            Either::Right(
                html::main()
                    .class("flex min-h-screen items-center justify-center p-4 text-gray-600")
                    .child(error.to_string()),
            )
        }
    }
}
