use leptos::prelude::*;
use leptos::{ev, html};
use playlist_api::{Rating as Value, Star};

use crate::components::stars;

/// Clicking the k-th star sets the rating to exactly k.
pub fn Rating(
    label: &'static str,
    stars: Signal<[Star; Value::MAX as usize]>,
    on_pick: impl Fn(Value) + Copy + 'static,
) -> impl IntoView {
    html::div().child((
        html::label().class(super::LABEL_CLASS).child(label),
        html::div().class("flex").child(
            Value::all()
                .map(|value| {
                    let index = usize::from(value.get() - 1);
                    html::span()
                        .aria_label(value.get().to_string())
                        .class(move || {
                            stars::class(stars.with(|stars| stars[index]), "text-2xl cursor-pointer")
                        })
                        .on(ev::click, move |_| on_pick(value))
                        .child(stars::GLYPH)
                })
                .collect_view(),
        ),
    ))
}
