use chrono::{Duration, TimeZone, Utc};

use super::{HISTORY_KEY, HistoryStore, next_id};
use crate::model::Dimension;
use crate::model::weights::WeightProfile;
use crate::scoring::aggregator::ScoringSession;
use crate::store::{KeyValueStore, MemoryStore};

fn session_with(value: f64) -> ScoringSession {
    let mut session = ScoringSession::new(WeightProfile::reference());
    for metric in Dimension::Consistency.sub_metrics() {
        session.set(metric, value).unwrap();
    }
    session
}

#[test]
fn test_empty_store_has_no_history() {
    let mut history = HistoryStore::new(MemoryStore::new());
    assert!(history.load().unwrap().is_empty());
}

#[test]
fn test_saved_records_are_newest_first() {
    let mut history = HistoryStore::new(MemoryStore::new());
    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    let first = history.save_session("first", &session_with(2.0), t0).unwrap();
    let second = history
        .save_session("second", &session_with(4.0), t0 + Duration::seconds(5))
        .unwrap();

    let records = history.load().unwrap();
    assert_eq!(records, vec![second.clone(), first.clone()]);
    assert_eq!(first.id(), t0.timestamp_millis());
    assert_eq!(second.dimension_total(Dimension::Consistency), 4.0);
    // 0.4 * 4.0 on the display scale
    assert_eq!(second.total(), 32.0);
}

#[test]
fn test_ids_stay_unique_within_one_millisecond() {
    let mut history = HistoryStore::new(MemoryStore::new());
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let a = history.save_session("a", &session_with(1.0), now).unwrap();
    let b = history.save_session("b", &session_with(1.0), now).unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(b.id(), a.id() + 1);
}

#[test]
fn test_saved_record_ignores_later_session_edits() {
    let mut history = HistoryStore::new(MemoryStore::new());
    let mut session = session_with(3.0);
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    history.save_session("snap", &session, now).unwrap();

    session.reset();
    let records = history.load().unwrap();
    assert_eq!(records[0].dimension_total(Dimension::Consistency), 3.0);
}

#[test]
fn test_corrupted_history_is_discarded() {
    let mut store = MemoryStore::new();
    store.set(HISTORY_KEY, "{not json".to_string()).unwrap();
    let mut history = HistoryStore::new(store);

    assert!(history.load().unwrap().is_empty());
    assert_eq!(history.store().get(HISTORY_KEY).unwrap(), None);
}

#[test]
fn test_unreadable_record_is_skipped_and_kept() {
    let mut history = HistoryStore::new(MemoryStore::new());
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    history.save_session("bad", &session_with(3.0), now).unwrap();
    let good = history
        .save_session("good", &session_with(2.0), now + Duration::seconds(1))
        .unwrap();

    let raw = history.store().get(HISTORY_KEY).unwrap().unwrap();
    let tampered = raw.replace(
        "\"semantic_consistency\":3.0",
        "\"semantic_consistency\":11.0",
    );
    assert_ne!(raw, tampered);

    let mut store = MemoryStore::new();
    store.set(HISTORY_KEY, tampered).unwrap();
    let mut history = HistoryStore::new(store);
    assert_eq!(history.load().unwrap(), vec![good.clone()]);

    let later = now + Duration::seconds(2);
    let newest = history
        .save_session("newest", &session_with(1.0), later)
        .unwrap();
    assert_eq!(history.load().unwrap(), vec![newest, good]);

    let raw = history.store().get(HISTORY_KEY).unwrap().unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(items.len(), 3);
}

#[test]
fn test_clear_and_custom_key() {
    let mut history = HistoryStore::with_key(MemoryStore::new(), "videoScores");
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    history.save_session("x", &session_with(1.0), now).unwrap();
    assert!(history.store().get("videoScores").unwrap().is_some());

    history.clear().unwrap();
    assert!(history.load().unwrap().is_empty());
}

#[test]
fn test_next_id_bumps_past_newest() {
    assert_eq!(next_id(1_000, None), 1_000);
    assert_eq!(next_id(1_000, Some(500)), 1_000);
    assert_eq!(next_id(1_000, Some(1_000)), 1_001);
    assert_eq!(next_id(1_000, Some(2_000)), 2_001);
}
