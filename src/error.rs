//! Error type shared by the pure helpers behind the UI.
//!
//! Nothing here is ever surfaced to the viewer. Components log the error and
//! leave the page as it was.

/// Errors produced by threshold, URL, config, and payload helpers.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A link destination could not be parsed as a URL.
    #[error("invalid url '{href}': {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// A threshold value fell outside the accepted range.
    #[error("threshold {value} outside [{min}, {max}]")]
    ThresholdOutOfRange { value: f64, min: f64, max: f64 },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The embedded page payload could not be decoded.
    #[error("page payload decode failed: {0}")]
    PayloadDecode(#[from] serde_json::Error),
}
