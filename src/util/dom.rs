//! Browser glue for links outside the Leptos tree and full-page navigation.
//!
//! Every helper is a silent no-op when the element or window is missing, and
//! under SSR or native tests.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Current page URL, when running in a browser.
///
/// Base for resolving relative link targets.
pub fn current_href() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Rewrite the `threshold` parameter of the anchor with id `link_id`.
///
/// Relative hrefs resolve against the full page URL, so only the
/// `threshold` pair changes. Returns `false` when the anchor is absent or its
/// href cannot be parsed.
pub fn rewrite_link_threshold(link_id: &str, threshold: f64) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(link_id))
        else {
            return false;
        };
        let Some(href) = el.get_attribute("href") else {
            return false;
        };
        let base = current_href();
        match crate::util::query::with_threshold(&href, threshold, base.as_deref()) {
            Ok(next) => el.set_attribute("href", &next).is_ok(),
            Err(e) => {
                leptos::logging::warn!("threshold link #{link_id} left unchanged: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (link_id, threshold);
        false
    }
}

/// Navigate the whole page to `href`.
pub fn navigate_to(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                leptos::logging::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Reload the current location with `threshold` set to `value`.
///
/// Returns the target href, or `None` when there is no location to reload.
pub fn navigate_with_threshold(value: f64) -> Option<String> {
    let current = current_href()?;
    match crate::util::query::with_threshold(&current, value, None) {
        Ok(next) => {
            navigate_to(&next);
            Some(next)
        }
        Err(e) => {
            leptos::logging::warn!("threshold navigation skipped: {e}");
            None
        }
    }
}
