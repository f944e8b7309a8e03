//! Archive filtering, grouping, and export over a populated journal.

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use somnia_core::{
    DreamDraft, DreamFilter, DreamRecord, DreamStore, Emotion, MemoryJournalSlot, SortDirection,
    encode_csv, filter_dreams, group_by_month,
};
use std::sync::Arc;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("timestamp")
}

fn capture(
    store: &DreamStore,
    description: &str,
    emotions: Vec<Emotion>,
    rating: u8,
    timestamp: DateTime<Utc>,
) -> DreamRecord {
    store.create(DreamDraft {
        timestamp,
        ..DreamDraft::new(description, emotions, rating)
    })
}

/// Three dreams at known instants: T1 < T2 (same month) < T3 (next month).
fn seeded_store() -> (DreamStore, [DreamRecord; 3]) {
    let store = DreamStore::new(Arc::new(MemoryJournalSlot::new()));
    let t1 = capture(
        &store,
        "Walking a pier that stretched further out whenever I counted the remaining planks",
        vec![Emotion::Peaceful],
        3,
        at(2026, 7, 10),
    );
    let t2 = capture(
        &store,
        "A festival where every lantern held a word I had forgotten and wanted badly back",
        vec![Emotion::Happy, Emotion::Excited],
        4,
        at(2026, 7, 18),
    );
    let t3 = capture(
        &store,
        "Standing in a hall of doors that opened onto earlier versions of the same morning",
        vec![Emotion::Anxious],
        5,
        at(2026, 8, 15),
    );
    (store, [t1, t2, t3])
}

#[test]
fn default_view_lists_newest_first() {
    let (store, [t1, t2, t3]) = seeded_store();
    let view = filter_dreams(&store.load(), &DreamFilter::default());
    assert_eq!(view, vec![t3, t2, t1]);
}

#[test]
fn emotion_and_rating_filters_select_one_record_under_either_sort() {
    let (store, [_, t2, _]) = seeded_store();
    let records = store.load();

    for sort in [SortDirection::Newest, SortDirection::Oldest] {
        let filter = DreamFilter {
            emotion: Some(Emotion::Happy),
            min_rating: 4,
            sort,
            ..DreamFilter::default()
        };
        assert_eq!(filter_dreams(&records, &filter), vec![t2.clone()]);
    }
}

#[test]
fn month_groups_follow_the_sorted_timeline() {
    let (store, [t1, t2, t3]) = seeded_store();
    let view = filter_dreams(&store.load(), &DreamFilter::default());

    let groups = group_by_month(&view);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].dreams, vec![t3]);
    assert_eq!(groups[1].dreams, vec![t2, t1]);
}

#[test]
fn oldest_sort_reverses_the_group_order() {
    let (store, _) = seeded_store();
    let filter = DreamFilter {
        sort: SortDirection::Oldest,
        ..DreamFilter::default()
    };
    let view = filter_dreams(&store.load(), &filter);

    let groups = group_by_month(&view);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].dreams.len(), 2);
    assert_eq!(groups[1].dreams.len(), 1);
}

#[test]
fn export_reflects_the_full_journal_not_the_filtered_view() {
    let (store, _) = seeded_store();
    let csv = encode_csv(&store.load());
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains(",happy, excited,4"));
}
