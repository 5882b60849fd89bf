use leptos::prelude::*;
use leptos::{ev, html};

pub fn Text(
    name: &'static str,
    label: &'static str,
    value: Signal<String>,
    on_input: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    html::div().child((
        html::label().r#for(name).class(super::LABEL_CLASS).child(label),
        html::input()
            .id(name)
            .r#type("text")
            .name(name)
            .required(true)
            .class("w-full p-2 border rounded")
            .prop("value", move || value.get())
            .on(ev::input, move |event| on_input(event_target_value(&event))),
    ))
}
