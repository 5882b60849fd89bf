pub mod input;

use leptos::prelude::*;
use leptos::{ev, html};

pub fn Form<IV: IntoView>(
    title: &'static str,
    fields: impl Fn() -> IV,
    button: &'static str,
    on_submit: impl Fn() + 'static,
) -> impl IntoView {
    (
        html::h1().class("text-2xl font-bold mb-4").child(title),
        html::form()
            .class("space-y-4")
            .on(ev::submit, move |event| {
                event.prevent_default();
                on_submit();
            })
            .child((
                fields(),
                html::button()
                    .r#type("submit")
                    .class("bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600")
                    .child(button),
            )),
    )
}
