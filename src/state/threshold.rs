//! Toxicity threshold slider state.
//!
//! DESIGN
//! ======
//! `value` is the threshold the page links carry; `staged` is what the slider
//! label currently shows. The results page moves both together on every
//! input. The thread page only stages and commits on an explicit apply.

#[cfg(test)]
#[path = "threshold_test.rs"]
mod threshold_test;

use crate::config::{THRESHOLD_MAX, THRESHOLD_MIN, UiConfig};

/// Format a threshold with exactly two fractional digits.
///
/// Non-finite input formats as `0.00`.
#[must_use]
pub fn format_threshold(value: f64) -> String {
    let value = if value.is_finite() { value } else { THRESHOLD_MIN };
    // Adding 0.0 folds -0.0 into 0.0 so it never renders as "-0.00".
    format!("{:.2}", value + 0.0)
}

/// Parse a `threshold` query value, accepting only finite values in `[0, 1]`.
#[must_use]
pub fn parse_threshold_param(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && (THRESHOLD_MIN..=THRESHOLD_MAX).contains(&value)).then_some(value)
}

/// Range enforced by the slider control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ThresholdBounds {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl ThresholdBounds {
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self { min: THRESHOLD_MIN, max: THRESHOLD_MAX, step: config.threshold_step }
    }

    /// Clamp into range; non-finite values fall back to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() { value.clamp(self.min, self.max) } else { self.min }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdState {
    value: f64,
    staged: f64,
    bounds: ThresholdBounds,
}

impl Default for ThresholdState {
    fn default() -> Self {
        Self::new(UiConfig::default().default_threshold, ThresholdBounds::default())
    }
}

impl ThresholdState {
    #[must_use]
    pub fn new(initial: f64, bounds: ThresholdBounds) -> Self {
        let value = bounds.clamp(initial);
        Self { value, staged: value, bounds }
    }

    /// Committed threshold carried by links and navigation.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Threshold currently shown in the slider label.
    #[must_use]
    pub fn staged(&self) -> f64 {
        self.staged
    }

    #[must_use]
    pub fn bounds(&self) -> ThresholdBounds {
        self.bounds
    }

    /// Label text for the slider.
    #[must_use]
    pub fn display(&self) -> String {
        format_threshold(self.staged)
    }

    /// True when the label shows a value not yet applied.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        format_threshold(self.staged) != format_threshold(self.value)
    }

    /// Move both the label and the committed value. Returns the formatted value.
    pub fn set_live(&mut self, raw: f64) -> String {
        let value = self.bounds.clamp(raw);
        self.value = value;
        self.staged = value;
        format_threshold(value)
    }

    /// Move only the label. Returns the formatted staged value.
    pub fn stage(&mut self, raw: f64) -> String {
        self.staged = self.bounds.clamp(raw);
        format_threshold(self.staged)
    }

    /// Commit the staged value. Returns the formatted committed value.
    pub fn apply(&mut self) -> String {
        self.value = self.staged;
        format_threshold(self.value)
    }
}
