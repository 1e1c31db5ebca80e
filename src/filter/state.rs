use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::schedule::Category;

/// Category stage of the filter chain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Which numeric attribute a minimum threshold applies to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMetric {
    /// Audience size, e.g. follower count of the linked creators.
    #[default]
    Reach,
    /// Budget in whole currency units.
    Budget,
}

/// A minimum threshold as typed by the user, parsed lazily by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThresholdFilter {
    pub metric: ThresholdMetric,
    pub raw: String,
}

impl ThresholdFilter {
    pub fn new(metric: ThresholdMetric, raw: impl Into<String>) -> Self {
        Self {
            metric,
            raw: raw.into(),
        }
    }
}

/// Complete filter selection. The default value filters nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub min_threshold: Option<ThresholdFilter>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl FilterState {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn with_threshold(mut self, metric: ThresholdMetric, raw: impl Into<String>) -> Self {
        self.min_threshold = Some(ThresholdFilter::new(metric, raw));
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.category == CategoryFilter::All
            && self
                .min_threshold
                .as_ref()
                .map_or(true, |threshold| threshold.raw.trim().is_empty())
            && self.tags.is_empty()
    }
}
