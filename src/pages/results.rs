//! Analysis summary for a thread, with a link into the full thread view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/analyze`. Moving the slider immediately rewrites the
//! "View Thread" link so it carries the chosen threshold. The most toxic
//! comments are previewed behind one-way reveal buttons.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use leptos::prelude::*;

use crate::components::comment_block::{CommentBlock, humanize_category};
use crate::components::stat_card::{StatCard, format_percentage, format_score};
use crate::components::threshold_slider::{SliderMode, ThresholdSlider};
use crate::state::moderation::RevealMode;
use crate::state::thread::{AnalyzedComment, ThreadPayload};
use crate::state::threshold::ThresholdState;
use crate::util::query::thread_href;

/// Id of the anchor into the thread view.
pub const VIEW_LINK_ID: &str = "viewWithThreshold";

const PREVIEW_COUNT: usize = 3;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let payload = expect_context::<ThreadPayload>();
    let threshold = expect_context::<RwSignal<ThresholdState>>();
    let stats = payload.resolved_stats();
    let title = payload.title();

    // Rendered once; the slider rewrites only its `threshold` pair afterwards.
    let view_href = thread_href(&payload.thread_url, threshold.with_untracked(ThresholdState::value));
    let view_link_ids = vec![VIEW_LINK_ID.to_owned()];

    let previews = most_toxic(&payload, PREVIEW_COUNT)
        .into_iter()
        .map(|comment| view! { <CommentBlock comment=comment mode=RevealMode::Reveal/> })
        .collect_view();

    let top_category = stats
        .top_category
        .as_deref()
        .map_or_else(|| "None".to_owned(), humanize_category);
    let categories = stats
        .category_averages
        .clone()
        .unwrap_or_default()
        .into_iter()
        .map(|(category, average)| {
            view! {
                <li class="category-row">
                    <span class="category-row__name">{humanize_category(&category)}</span>
                    <span class="category-row__value">{format_score(average)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="results-page container">
            <h1 class="results-page__title">{title}</h1>
            <a class="results-page__source" href=payload.thread_url.clone() target="_blank" rel="noopener">
                "Open on Reddit"
            </a>
            <div class="stat-grid">
                <StatCard label="Comments analyzed" value=stats.total_comments.to_string()/>
                <StatCard label="Toxic comments" value=stats.toxic_count.to_string() accent=true/>
                <StatCard label="Toxic share" value=format_percentage(stats.toxic_percentage)/>
                <StatCard label="Average toxicity" value=format_score(stats.avg_toxicity)/>
                <StatCard label="Most severe category" value=top_category/>
            </div>
            <ul class="category-list">{categories}</ul>
            <ThresholdSlider mode=SliderMode::Live link_ids=view_link_ids/>
            <a id=VIEW_LINK_ID class="btn btn-danger" href=view_href>
                "View Thread"
            </a>
            <section class="toxic-preview">
                <h2>"Most toxic comments"</h2>
                {previews}
            </section>
        </div>
    }
}

/// Up to `limit` toxic comments, highest score first.
fn most_toxic(payload: &ThreadPayload, limit: usize) -> Vec<AnalyzedComment> {
    let mut toxic = payload.toxic_comments();
    toxic.sort_by(|a, b| b.toxicity.score.total_cmp(&a.toxicity.score));
    toxic.into_iter().take(limit).cloned().collect()
}
