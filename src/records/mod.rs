//! Typed boundary between the hosted data collaborator and the calendar core.
//!
//! Rows arrive loosely typed (string dates that may carry a time component,
//! free-text categories, float budgets). They are validated into
//! [`ScheduledItem`]s here; rows that do not conform are quarantined with a
//! reason instead of flowing further.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScheduleError};
use crate::schedule::{Category, ItemId, ItemKind, ScheduledItem};

/// A row as returned by the remote data collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Budget in minor units.
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub reach: Option<f64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub linked_entity_ids: Option<Vec<String>>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// A row rejected at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuarantinedRecord {
    pub record: ItemRecord,
    pub reason: String,
}

/// Validated items plus the rows that were rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub items: Vec<ScheduledItem>,
    pub quarantined: Vec<QuarantinedRecord>,
}

impl Snapshot {
    /// Validates every live record; soft-deleted rows are dropped.
    pub fn from_records(records: Vec<ItemRecord>) -> Self {
        let mut snapshot = Snapshot::default();
        for record in records {
            if record.deleted_at.is_some() {
                continue;
            }
            match validate_record(&record) {
                Ok(item) => snapshot.items.push(item),
                Err(err) => {
                    tracing::warn!(error = %err, "quarantining record");
                    snapshot.quarantined.push(QuarantinedRecord {
                        record,
                        reason: err.to_string(),
                    });
                }
            }
        }
        tracing::debug!(
            items = snapshot.items.len(),
            quarantined = snapshot.quarantined.len(),
            "built snapshot"
        );
        snapshot
    }
}

/// Parses a date column that may hold a plain date or a full timestamp.
///
/// Timestamps keep the calendar date they were written with; the offset is not
/// applied, so a `23:30-05:00` entry stays on its local day.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.naive_local().date());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|stamp| stamp.date())
}

fn optional_date(id: &str, field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_record_date(raw)
            .map(Some)
            .ok_or_else(|| ScheduleError::invalid_record(id, format!("unparseable {field} `{raw}`"))),
    }
}

fn whole_units(id: &str, field: &str, value: Option<f64>) -> Result<Option<u64>> {
    match value {
        None => Ok(None),
        Some(raw) if !raw.is_finite() || raw < 0.0 => Err(ScheduleError::invalid_record(
            id,
            format!("{field} must be a non-negative number"),
        )),
        // u64::MAX as f64 rounds up to 2^64, which is already out of range.
        Some(raw) if raw.round() >= u64::MAX as f64 => Err(ScheduleError::invalid_record(
            id,
            format!("{field} is too large"),
        )),
        Some(raw) => Ok(Some(raw.round() as u64)),
    }
}

/// Converts a raw row into a [`ScheduledItem`], enforcing the item schema.
pub fn validate_record(record: &ItemRecord) -> Result<ScheduledItem> {
    let id = record
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ScheduleError::invalid_record("<missing>", "missing id"))?;
    let name = record
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ScheduleError::invalid_record(id, "missing name"))?;

    let kind = match record.kind.as_deref().map(|kind| kind.trim().to_lowercase()) {
        None => ItemKind::Strategy,
        Some(kind) => match kind.as_str() {
            "" | "strategy" | "marketing_strategy" => ItemKind::Strategy,
            "flyer_event" | "flyer" => ItemKind::FlyerEvent,
            other => {
                return Err(ScheduleError::invalid_record(
                    id,
                    format!("unknown kind `{other}`"),
                ))
            }
        },
    };

    let category = match record.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<Category>()
                .map_err(|_| ScheduleError::invalid_record(id, format!("unknown category `{raw}`")))?,
        ),
    };

    let start_date = optional_date(id, "start_date", record.start_date.as_deref())?;
    let end_date = optional_date(id, "end_date", record.end_date.as_deref())?;
    if end_date.is_some() && start_date.is_none() {
        return Err(ScheduleError::invalid_record(id, "end_date without start_date"));
    }

    let item = ScheduledItem {
        id: ItemId::new(id),
        name: name.to_string(),
        description: record
            .description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string),
        kind,
        category,
        start_date,
        end_date,
        budget_cents: whole_units(id, "budget", record.budget)?.unwrap_or(0),
        reach: whole_units(id, "reach", record.reach)?,
        tags: record.tags.clone().unwrap_or_default(),
        linked_entity_ids: record.linked_entity_ids.clone().unwrap_or_default(),
    };
    item.span()?;
    Ok(item)
}

/// Supplies the current snapshot of scheduled items.
pub trait ItemSource {
    fn load_snapshot(&self) -> Result<Snapshot>;
}

/// Reads a JSON array of [`ItemRecord`]s from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for JsonFileSource {
    fn load_snapshot(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Err(ScheduleError::Storage(format!(
                "snapshot file `{}` not found",
                self.path.display()
            )));
        }
        let data = fs::read_to_string(&self.path)?;
        let records: Vec<ItemRecord> = serde_json::from_str(&data)?;
        Ok(Snapshot::from_records(records))
    }
}

/// In-memory records, e.g. a provisional list during an optimistic update.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ItemRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ItemRecord>) -> Self {
        Self { records }
    }
}

impl ItemSource for StaticSource {
    fn load_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot::from_records(self.records.clone()))
    }
}
