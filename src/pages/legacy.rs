//! Redirect for old `/view/<thread_id>` links.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::util::query::{THRESHOLD_PARAM, legacy_thread_href};

#[component]
pub fn LegacyThreadRedirect() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let thread_id = params.with_untracked(|p| p.get("thread_id")).unwrap_or_default();
    let threshold = query.with_untracked(|q| q.get(THRESHOLD_PARAM));
    let target = legacy_thread_href(&thread_id, threshold.as_deref());

    view! { <Redirect path=target/> }
}
