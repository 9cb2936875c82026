//! Full thread view with per-comment and page-wide visibility controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/thread`. The slider only stages a new threshold here; the
//! apply button reloads the page so the server re-analyzes with it.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use leptos::prelude::*;

use crate::components::comment_block::CommentBlock;
use crate::components::threshold_slider::{SliderMode, ThresholdSlider};
use crate::components::toggle_all::ToggleAllControl;
use crate::state::moderation::{BlockVisibility, ModerationState, RevealMode};
use crate::state::thread::ThreadPayload;

#[component]
pub fn ThreadPage() -> impl IntoView {
    let payload = expect_context::<ThreadPayload>();
    let moderation = expect_context::<RwSignal<ModerationState>>();
    let stats = payload.resolved_stats();
    let title = payload.title();
    let subreddit = payload
        .metadata
        .as_ref()
        .map(|m| format!("r/{}", m.subreddit))
        .unwrap_or_default();

    let shown_summary = move || moderation.with(revealed_summary);

    let comments = payload
        .comments
        .into_iter()
        .map(|comment| view! { <CommentBlock comment=comment mode=RevealMode::Toggle/> })
        .collect_view();

    view! {
        <div class="thread-page container">
            <header class="thread-page__header">
                <h1>{title}</h1>
                <span class="thread-page__subreddit">{subreddit}</span>
                <p class="thread-page__summary">
                    {format!("{} toxic of {} comments", stats.toxic_count, stats.total_comments)}
                </p>
            </header>
            <div class="thread-page__controls">
                <ThresholdSlider mode=SliderMode::Apply/>
                <ToggleAllControl/>
                <span class="thread-page__revealed">{shown_summary}</span>
            </div>
            <div class="comment-list">{comments}</div>
        </div>
    }
}

fn revealed_summary(moderation: &ModerationState) -> String {
    match moderation.uniform_visibility() {
        None if moderation.is_empty() => "No flagged comments".to_owned(),
        Some(BlockVisibility::Shown) => format!("All {} flagged comments revealed", moderation.len()),
        Some(BlockVisibility::Hidden) => format!("All {} flagged comments hidden", moderation.len()),
        None => format!(
            "{} revealed, {} hidden",
            moderation.shown_count(),
            moderation.hidden_count()
        ),
    }
}
