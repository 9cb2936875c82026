//! Page-wide control that reveals or hides every flagged comment at once.

#[cfg(test)]
#[path = "toggle_all_test.rs"]
mod toggle_all_test;

use leptos::prelude::*;

use crate::state::moderation::ModerationState;

/// Toggle-all button. Its `data-state` predicts the next activation.
#[component]
pub fn ToggleAllControl() -> impl IntoView {
    let moderation = expect_context::<RwSignal<ModerationState>>();
    let global = Memo::new(move |_| moderation.with(ModerationState::global));
    let empty = Memo::new(move |_| moderation.with(ModerationState::is_empty));

    let on_click = move |_| {
        moderation.update(|m| {
            let next = m.toggle_all();
            leptos::logging::log!(
                "toggle-all: {}/{} flagged comments shown, next={}",
                m.shown_count(),
                m.len(),
                next.as_attr()
            );
        });
    };

    view! {
        <button
            id="toggleAllToxic"
            class="btn btn-outline-light btn-sm"
            data-state=move || global.get().as_attr()
            disabled=move || empty.get()
            on:click=on_click
        >
            <i class=move || global.get().icon_class()></i>
            " "
            {move || global.get().label()}
        </button>
    }
}
