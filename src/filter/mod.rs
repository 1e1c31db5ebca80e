//! Client-side filtering of scheduled items.

pub mod engine;
pub mod state;
pub mod threshold;

pub use engine::{
    apply_filters, apply_filters_with_report, matches_category, matches_search, matches_tags,
    matches_threshold, FilterOutcome, FilterWarning,
};
pub use state::{CategoryFilter, FilterState, ThresholdFilter, ThresholdMetric};
pub use threshold::parse_threshold;
