//! Order-preserving predicate chain over scheduled items.

use serde::{Deserialize, Serialize};

use super::state::{CategoryFilter, FilterState, ThresholdFilter, ThresholdMetric};
use super::threshold::parse_threshold;
use crate::schedule::ScheduledItem;

const CENTS_PER_UNIT: u64 = 100;

/// Non-fatal problems found while applying filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterWarning {
    /// The threshold input could not be parsed; the stage was skipped.
    UnparseableThreshold { input: String },
}

/// Filtered items plus any warnings the caller may surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOutcome {
    pub items: Vec<ScheduledItem>,
    pub warnings: Vec<FilterWarning>,
}

/// Case-insensitive substring match on name or description.
pub fn matches_search(item: &ScheduledItem, search_text: &str) -> bool {
    if search_text.trim().is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    item.name.to_lowercase().contains(&needle)
        || item
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}

pub fn matches_category(item: &ScheduledItem, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => item.category == Some(category),
    }
}

/// Compares the item's metric against an already parsed minimum.
pub fn matches_threshold(item: &ScheduledItem, metric: ThresholdMetric, minimum: u64) -> bool {
    match metric {
        ThresholdMetric::Reach => item.reach.is_some_and(|reach| reach >= minimum),
        ThresholdMetric::Budget => item.budget_cents / CENTS_PER_UNIT >= minimum,
    }
}

/// Any-of match across the selected tags; no selection matches everything.
pub fn matches_tags<'a, I>(item: &ScheduledItem, selected: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let mut selected = selected.into_iter().peekable();
    if selected.peek().is_none() {
        return true;
    }
    let tags: Vec<String> = item.tags.iter().map(|tag| tag.to_lowercase()).collect();
    selected.any(|wanted| tags.contains(&wanted.to_lowercase()))
}

/// Resolves the threshold stage: `Ok(None)` means the stage does not apply.
fn resolve_threshold(
    threshold: Option<&ThresholdFilter>,
) -> Result<Option<(ThresholdMetric, u64)>, FilterWarning> {
    let Some(threshold) = threshold else {
        return Ok(None);
    };
    if threshold.raw.trim().is_empty() {
        return Ok(None);
    }
    match parse_threshold(&threshold.raw) {
        Ok(minimum) => Ok(Some((threshold.metric, minimum))),
        Err(err) => {
            tracing::warn!(input = %threshold.raw, error = %err, "ignoring threshold filter");
            Err(FilterWarning::UnparseableThreshold {
                input: threshold.raw.clone(),
            })
        }
    }
}

/// Applies every stage and reports non-fatal warnings.
pub fn apply_filters_with_report(items: &[ScheduledItem], filters: &FilterState) -> FilterOutcome {
    let mut warnings = Vec::new();
    let threshold = match resolve_threshold(filters.min_threshold.as_ref()) {
        Ok(threshold) => threshold,
        Err(warning) => {
            warnings.push(warning);
            None
        }
    };

    let items = items
        .iter()
        .filter(|item| matches_search(item, &filters.search_text))
        .filter(|item| matches_category(item, filters.category))
        .filter(|item| {
            threshold.map_or(true, |(metric, minimum)| {
                matches_threshold(item, metric, minimum)
            })
        })
        .filter(|item| matches_tags(item, &filters.tags))
        .cloned()
        .collect();

    FilterOutcome { items, warnings }
}

/// Applies every stage, discarding warnings.
pub fn apply_filters(items: &[ScheduledItem], filters: &FilterState) -> Vec<ScheduledItem> {
    apply_filters_with_report(items, filters).items
}
