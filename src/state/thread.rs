//! Analyzed thread payload rendered by the results and thread pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server fetches and scores the thread, then embeds a [`ThreadPayload`]
//! into the page. SSR and hydration both render from that same payload.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TOXICITY_THRESHOLD, UiConfig};
use crate::util::query::extract_thread_id;

/// Per-comment toxicity verdict.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Toxicity {
    pub score: f64,
    pub is_toxic: bool,
    #[serde(default)]
    pub categories: BTreeMap<String, f64>,
    #[serde(default)]
    pub max_category: Option<String>,
    #[serde(default)]
    pub max_value: Option<f64>,
}

/// A thread comment with its toxicity verdict attached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedComment {
    pub id: String,
    pub author: String,
    pub body: String,
    /// Net vote score.
    #[serde(default)]
    pub score: i64,
    /// Reply nesting depth; top-level comments are 0.
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub toxicity: Toxicity,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMetadata {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
}

/// Aggregate toxicity figures for a thread.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToxicityStats {
    pub total_comments: usize,
    pub toxic_count: usize,
    /// Share of toxic comments, 0-100.
    pub toxic_percentage: f64,
    pub avg_toxicity: f64,
    #[serde(default)]
    pub category_averages: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub top_category: Option<String>,
    #[serde(default)]
    pub top_category_value: Option<f64>,
}

impl ToxicityStats {
    /// Compute stats for `comments`. An empty slice yields all zeros.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_comments(comments: &[AnalyzedComment]) -> Self {
        if comments.is_empty() {
            return Self::default();
        }

        let total = comments.len();
        let toxic_count = comments.iter().filter(|c| c.toxicity.is_toxic).count();
        let score_sum: f64 = comments.iter().map(|c| c.toxicity.score).sum();

        let mut per_category: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        let mut top: Option<(&str, f64)> = None;
        for comment in comments {
            for (category, score) in &comment.toxicity.categories {
                let slot = per_category.entry(category.clone()).or_insert((0.0, 0));
                slot.0 += score;
                slot.1 += 1;
            }
            if let (Some(category), Some(value)) = (&comment.toxicity.max_category, comment.toxicity.max_value) {
                // Strictly greater than the best so far, starting from 0.0:
                // ties keep the first comment's category and values at or
                // below zero never become the top category.
                if value > top.map_or(0.0, |(_, v)| v) {
                    top = Some((category.as_str(), value));
                }
            }
        }

        let category_averages = (!per_category.is_empty()).then(|| {
            per_category
                .into_iter()
                .map(|(category, (sum, count))| (category, sum / count as f64))
                .collect()
        });

        Self {
            total_comments: total,
            toxic_count,
            toxic_percentage: (toxic_count as f64 / total as f64) * 100.0,
            avg_toxicity: score_sum / total as f64,
            category_averages,
            top_category: top.map(|(c, _)| c.to_owned()),
            top_category_value: top.map(|(_, v)| v),
        }
    }
}

/// Everything a page needs to render, embedded by the server as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreadPayload {
    #[serde(default)]
    pub config: UiConfig,
    #[serde(default)]
    pub thread_url: String,
    /// Threshold the server analyzed with.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub metadata: Option<ThreadMetadata>,
    #[serde(default)]
    pub comments: Vec<AnalyzedComment>,
    #[serde(default)]
    pub stats: Option<ToxicityStats>,
}

impl Default for ThreadPayload {
    fn default() -> Self {
        Self {
            config: UiConfig::default(),
            thread_url: String::new(),
            threshold: DEFAULT_TOXICITY_THRESHOLD,
            metadata: None,
            comments: Vec::new(),
            stats: None,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_TOXICITY_THRESHOLD
}

impl ThreadPayload {
    /// Stats supplied by the server, or computed from the comments.
    #[must_use]
    pub fn resolved_stats(&self) -> ToxicityStats {
        self.stats
            .clone()
            .unwrap_or_else(|| ToxicityStats::from_comments(&self.comments))
    }

    #[must_use]
    pub fn toxic_comments(&self) -> Vec<&AnalyzedComment> {
        self.comments.iter().filter(|c| c.toxicity.is_toxic).collect()
    }

    /// Thread title, falling back to the id parsed from the thread URL.
    #[must_use]
    pub fn title(&self) -> String {
        if let Some(meta) = self.metadata.as_ref().filter(|m| !m.title.is_empty()) {
            return meta.title.clone();
        }
        match extract_thread_id(&self.thread_url) {
            Some(id) => format!("Thread {id}"),
            None => "Untitled thread".to_owned(),
        }
    }
}
