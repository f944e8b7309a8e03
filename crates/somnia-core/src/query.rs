//! Pure filtering, sorting, and grouping over dream records.

use crate::model::{DreamRecord, Emotion};
use chrono::Local;
use std::str::FromStr;

/// Sort direction for the archive timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Newest dreams first.
    #[default]
    Newest,
    /// Oldest dreams first.
    Oldest,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortDirection::Newest),
            "oldest" => Ok(SortDirection::Oldest),
            _ => Err(format!("unknown sort direction: {s}")),
        }
    }
}

/// Filter criteria applied to the archive view.
#[derive(Debug, Clone, Default)]
pub struct DreamFilter {
    /// Case-insensitive substring matched against descriptions.
    pub search: String,
    /// Keep only dreams tagged with this emotion.
    pub emotion: Option<Emotion>,
    /// Keep only dreams rated at or above this value; 0 disables.
    pub min_rating: u8,
    /// Timeline sort direction.
    pub sort: SortDirection,
}

/// Dreams grouped under a calendar month heading.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// Month heading, e.g. "August 2026".
    pub label: String,
    /// Dreams in the month, in input order.
    pub dreams: Vec<DreamRecord>,
}

/// Apply search, emotion, and rating filters, then sort by timestamp.
///
/// Filters only narrow the set; relative order is untouched until the
/// final sort, which is stable so equal timestamps keep their stored
/// order. An empty result is a normal outcome.
pub fn filter_dreams(records: &[DreamRecord], filter: &DreamFilter) -> Vec<DreamRecord> {
    let mut results: Vec<DreamRecord> = records.to_vec();

    if !filter.search.is_empty() {
        let needle = filter.search.to_lowercase();
        results.retain(|record| record.description.to_lowercase().contains(&needle));
    }
    if let Some(emotion) = filter.emotion {
        results.retain(|record| record.emotions.contains(&emotion));
    }
    if filter.min_rating > 0 {
        results.retain(|record| record.rating >= filter.min_rating);
    }

    match filter.sort {
        SortDirection::Newest => results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortDirection::Oldest => results.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
    }
    results
}

/// Group records by calendar month in the local timezone.
///
/// Groups appear in first-encounter order, so sorted input yields
/// chronologically ordered headings.
pub fn group_by_month(records: &[DreamRecord]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for record in records {
        let label = record
            .timestamp
            .with_timezone(&Local)
            .format("%B %Y")
            .to_string();
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.dreams.push(record.clone()),
            None => groups.push(MonthGroup {
                label,
                dreams: vec![record.clone()],
            }),
        }
    }
    groups
}
