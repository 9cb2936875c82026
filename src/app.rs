//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{legacy::LegacyThreadRedirect, results::ResultsPage, thread::ThreadPage};
use crate::state::moderation::ModerationState;
use crate::state::thread::ThreadPayload;
use crate::state::threshold::{ThresholdBounds, ThresholdState};
use crate::util::page_data::{PAGE_DATA_ELEMENT_ID, encode_payload, load_embedded};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides the analyzed [`ThreadPayload`] as context; it is
/// embedded as JSON so hydration renders from the same data.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let payload_json = use_context::<ThreadPayload>()
        .and_then(|payload| match encode_payload(&payload) {
            Ok(json) => Some(json),
            Err(e) => {
                leptos::logging::warn!("page payload not embedded: {e}");
                None
            }
        })
        .unwrap_or_else(|| "null".to_owned());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=PAGE_DATA_ELEMENT_ID inner_html=payload_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page payload plus moderation and threshold state to every
/// route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let payload = use_context::<ThreadPayload>()
        .or_else(load_embedded)
        .unwrap_or_default();
    let bounds = ThresholdBounds::from_config(&payload.config);

    let moderation = RwSignal::new(ModerationState::from_comments(&payload.comments));
    let threshold = RwSignal::new(ThresholdState::new(payload.threshold, bounds));

    provide_context(payload);
    provide_context(moderation);
    provide_context(threshold);

    view! {
        <Stylesheet id="leptos" href="/pkg/redtox-ui.css"/>
        <Title text="RedTox"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("analyze") view=ResultsPage/>
                <Route path=StaticSegment("thread") view=ThreadPage/>
                <Route path=(StaticSegment("view"), ParamSegment("thread_id")) view=LegacyThreadRedirect/>
            </Routes>
        </Router>
    }
}
