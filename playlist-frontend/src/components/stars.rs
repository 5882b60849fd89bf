use concat_string::concat_string;
use leptos::html;
use leptos::prelude::*;
use playlist_api::{Rating, Star};

pub const GLYPH: &str = "★";

pub fn class(star: Star, base: &str) -> String {
    let color = if star.is_filled() { "text-yellow-500" } else { "text-gray-300" };
    if base.is_empty() { color.to_owned() } else { concat_string!(base, " ", color) }
}

pub fn Stars(rating: Rating) -> impl IntoView {
    html::div().class("mt-1").child(
        rating
            .stars()
            .into_iter()
            .map(|star| html::span().class(class(star, "")).child(GLYPH))
            .collect_view(),
    )
}
