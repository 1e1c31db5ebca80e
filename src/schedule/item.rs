use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{category::Category, span::DateSpan};
use crate::errors::ScheduleError;

/// Opaque identifier assigned by the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which dashboard entity a scheduled item was derived from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Strategy,
    FlyerEvent,
}

/// A calendar-placed, budgeted entity such as a marketing strategy or a flyer event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub linked_entity_ids: Vec<String>,
}

impl ScheduledItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            description: None,
            kind: ItemKind::Strategy,
            category: None,
            start_date: None,
            end_date: None,
            budget_cents: 0,
            reach: None,
            tags: Vec::new(),
            linked_entity_ids: Vec::new(),
        }
    }

    pub fn scheduled(mut self, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        self.start_date = Some(start);
        self.end_date = end;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_budget(mut self, budget_cents: u64) -> Self {
        self.budget_cents = budget_cents;
        self
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_reach(mut self, reach: u64) -> Self {
        self.reach = Some(reach);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_scheduled(&self) -> bool {
        self.start_date.is_some()
    }

    /// Returns the occupied span, `None` when unscheduled.
    ///
    /// A missing end date collapses the span to the start date.
    pub fn span(&self) -> Result<Option<DateSpan>, ScheduleError> {
        match self.start_date {
            None => Ok(None),
            Some(start) => {
                let end = self.end_date.unwrap_or(start);
                DateSpan::new(self.id.as_str(), start, end).map(Some)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_end_date_is_single_day() {
        let item = ScheduledItem::new("a", "Launch").scheduled(date(2024, 3, 5), None);
        let span = item.span().unwrap().unwrap();
        assert!(span.is_single_day());
    }

    #[test]
    fn unscheduled_item_has_no_span() {
        let item = ScheduledItem::new("a", "Backlog idea");
        assert_eq!(item.span().unwrap(), None);
    }

    #[test]
    fn reversed_dates_surface_invalid_range() {
        let item = ScheduledItem::new("bad", "Broken")
            .scheduled(date(2024, 3, 10), Some(date(2024, 3, 1)));
        match item.span() {
            Err(ScheduleError::InvalidRange { id, .. }) => assert_eq!(id, "bad"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn deserializes_with_defaults() {
        let item: ScheduledItem =
            serde_json::from_str(r#"{"id":"x","name":"Flyer drop","start_date":"2024-03-05"}"#)
                .unwrap();
        assert_eq!(item.kind, ItemKind::Strategy);
        assert_eq!(item.budget_cents, 0);
        assert!(item.tags.is_empty());
    }
}
