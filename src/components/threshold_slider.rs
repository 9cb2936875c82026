//! Threshold slider with its value label and optional apply action.
//!
//! DESIGN
//! ======
//! `Live` mode commits on every input and keeps external anchors in sync.
//! `Apply` mode only stages the label; the apply button reloads the page with
//! the staged threshold in the query string and stays disabled until the
//! label differs from the applied value.

#[cfg(test)]
#[path = "threshold_slider_test.rs"]
mod threshold_slider_test;

use leptos::prelude::*;

use crate::state::threshold::ThresholdState;
use crate::util::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SliderMode {
    /// Rewrite links on every input.
    #[default]
    Live,
    /// Stage on input, navigate on explicit apply.
    Apply,
}

#[component]
pub fn ThresholdSlider(
    #[prop(optional)] mode: SliderMode,
    /// Ids of anchors outside this component whose `threshold` is kept in
    /// sync in `Live` mode. Missing anchors are skipped.
    #[prop(default = Vec::new())]
    link_ids: Vec<String>,
) -> impl IntoView {
    let threshold = expect_context::<RwSignal<ThresholdState>>();
    let bounds = threshold.with_untracked(ThresholdState::bounds);

    let on_input = move |ev: leptos::ev::Event| {
        let Some(raw) = parse_slider_input(&event_target_value(&ev)) else {
            return;
        };
        match mode {
            SliderMode::Live => {
                threshold.update(|t| {
                    t.set_live(raw);
                });
                let value = threshold.with_untracked(ThresholdState::value);
                let synced = link_ids
                    .iter()
                    .filter(|id| dom::rewrite_link_threshold(id, value))
                    .count();
                if synced < link_ids.len() {
                    leptos::logging::log!("threshold links synced: {synced}/{}", link_ids.len());
                }
            }
            SliderMode::Apply => threshold.update(|t| {
                t.stage(raw);
            }),
        }
    };

    let pending = Memo::new(move |_| threshold.with(ThresholdState::is_dirty));

    let on_apply = move |_| {
        let mut committed = None;
        threshold.update(|t| {
            t.apply();
            committed = Some(t.value());
        });
        if let Some(value) = committed {
            dom::navigate_with_threshold(value);
        }
    };

    view! {
        <div class="threshold-control">
            <label for="thresholdSlider" class="form-label">
                "Toxicity threshold: "
                <span id="thresholdValue" class="threshold-value">
                    {move || threshold.with(ThresholdState::display)}
                </span>
            </label>
            <input
                type="range"
                class="form-range"
                id="thresholdSlider"
                min=bounds.min.to_string()
                max=bounds.max.to_string()
                step=bounds.step.to_string()
                prop:value=move || threshold.with(|t| t.staged().to_string())
                on:input=on_input
            />
            {(mode == SliderMode::Apply)
                .then(|| {
                    view! {
                        <button
                            id="applyThreshold"
                            class="btn btn-primary btn-sm"
                            disabled=move || !pending.get()
                            on:click=on_apply
                        >
                            "Apply"
                        </button>
                    }
                })}
        </div>
    }
}

/// Parse the slider's string value; non-numeric input is ignored.
fn parse_slider_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
