//! A single thread comment, with warning/content regions for flagged ones.
//!
//! DESIGN
//! ======
//! Visibility is read from `ModerationState`; the markup is a projection of
//! that record, so the warning and content regions can never both show.

#[cfg(test)]
#[path = "comment_block_test.rs"]
mod comment_block_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::moderation::{BlockVisibility, ModerationState, RevealMode};
use crate::state::thread::AnalyzedComment;
use crate::state::threshold::format_threshold;

/// Renders one comment. Toxic comments start behind a warning.
#[component]
pub fn CommentBlock(comment: AnalyzedComment, #[prop(optional)] mode: RevealMode) -> impl IntoView {
    let indent = indent_style(comment.depth);
    let header = view! {
        <div class="comment-header">
            <span class="comment-author">{comment.author.clone()}</span>
            <span class="comment-score">{format!("{} points", comment.score)}</span>
            <span class=toxicity_badge_class(comment.toxicity.score, comment.toxicity.is_toxic)>
                {format_threshold(comment.toxicity.score)}
            </span>
        </div>
    };

    if !comment.toxicity.is_toxic {
        return view! {
            <div class="comment card" data-comment-id=comment.id style=indent>
                {header}
                <div class="comment-content">
                    <p>{comment.body}</p>
                </div>
            </div>
        }
        .into_any();
    }

    let moderation = expect_context::<RwSignal<ModerationState>>();
    let visibility = {
        let id = comment.id.clone();
        Memo::new(move |_| moderation.with(|m| m.visibility(&id)).unwrap_or_default())
    };
    let on_toggle = {
        let id = comment.id.clone();
        move |_| {
            moderation.update(|m| {
                m.toggle_one(&id);
            });
        }
    };
    let on_reveal = {
        let id = comment.id.clone();
        move |_| {
            moderation.update(|m| {
                m.reveal(&id);
            });
        }
    };
    let warning_text = warning_message(&comment);

    view! {
        <div class="comment card toxic-comment" data-comment-id=comment.id style=indent>
            {header}
            <div class="toxic-warning" style:display=move || display_value(visibility.get().warning_visible())>
                <i class="bi bi-exclamation-triangle-fill"></i>
                <span>{warning_text}</span>
                {(mode == RevealMode::Reveal)
                    .then(|| {
                        view! {
                            <button class="btn btn-sm btn-outline-danger reveal-comment" on:click=on_reveal>
                                "Reveal Comment"
                            </button>
                        }
                    })}
            </div>
            <div
                class="comment-content toxic-content"
                style:display=move || display_value(visibility.get().content_visible())
            >
                <p>{comment.body}</p>
            </div>
            {(mode == RevealMode::Toggle)
                .then(|| {
                    view! {
                        <button
                            class=move || toggle_button_class(visibility.get())
                            on:click=on_toggle
                        >
                            {move || visibility.get().button_label()}
                        </button>
                    }
                })}
        </div>
    }
    .into_any()
}

fn display_value(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

fn toggle_button_class(visibility: BlockVisibility) -> String {
    format!("btn btn-sm toggle-content {}", visibility.button_class())
}

fn indent_style(depth: u32) -> String {
    format!("margin-left: {}rem", depth.min(8))
}

fn toxicity_badge_class(score: f64, is_toxic: bool) -> &'static str {
    if is_toxic {
        "badge bg-danger"
    } else if score >= 0.3 {
        "badge bg-warning text-dark"
    } else {
        "badge bg-success"
    }
}

fn warning_message(comment: &AnalyzedComment) -> String {
    match comment.toxicity.max_category.as_deref() {
        Some(category) if category != "none" => format!(
            "Flagged as toxic ({}, score {})",
            humanize_category(category),
            format_threshold(comment.toxicity.score)
        ),
        _ => format!("Flagged as toxic (score {})", format_threshold(comment.toxicity.score)),
    }
}

/// `self_harm_intent` -> `Self Harm Intent`.
pub fn humanize_category(raw: &str) -> String {
    raw.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
