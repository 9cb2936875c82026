//! Server-to-client bridge for the embedded page payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR shell writes the [`ThreadPayload`] into a JSON `<script>` tag.
//! Hydration reads it back so both renders start from identical data.

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

use crate::error::UiError;
use crate::state::thread::ThreadPayload;

/// Id of the `<script type="application/json">` element holding the payload.
pub const PAGE_DATA_ELEMENT_ID: &str = "redtox-page-data";

/// Serialize a payload for embedding inside a `<script>` element.
///
/// # Errors
///
/// Returns [`UiError::PayloadDecode`] when the payload cannot be serialized.
pub fn encode_payload(payload: &ThreadPayload) -> Result<String, UiError> {
    let raw = serde_json::to_string(payload)?;
    // "</" would close the script element early.
    Ok(raw.replace("</", "<\\/"))
}

/// Parse a payload previously written by [`encode_payload`].
///
/// # Errors
///
/// Returns [`UiError::PayloadDecode`] on malformed JSON.
pub fn decode_payload(raw: &str) -> Result<ThreadPayload, UiError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read the payload the server embedded into the current document.
pub fn load_embedded() -> Option<ThreadPayload> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PAGE_DATA_ELEMENT_ID))
            .and_then(|el| el.text_content())?;
        // The shell writes `null` when the host provided no payload.
        if raw.trim() == "null" {
            return None;
        }
        match decode_payload(&raw) {
            Ok(payload) => Some(payload),
            Err(e) => {
                leptos::logging::warn!("embedded page data ignored: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
