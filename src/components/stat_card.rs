//! Summary card used on the results page.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String, #[prop(optional)] accent: bool) -> impl IntoView {
    view! {
        <div class="stat-card card" class:stat-card--accent=accent>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

/// `12.345` -> `12.3%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", if value.is_finite() { value } else { 0.0 })
}

/// Average toxicity score with three decimals.
pub fn format_score(value: f64) -> String {
    format!("{:.3}", if value.is_finite() { value } else { 0.0 })
}
