//! Integration tests for scoring, selection, and queue updates.

use lr_rotation::{
    after_assignment, after_postponement, is_eligible, rank_candidates, score_entry,
    select_presenters, Person, PostponeStrategy, QueueEntry, RotationPolicy,
};
use lr_time::Date;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn entry(id: &str) -> QueueEntry {
    QueueEntry::new(Person::new(id, id))
}

fn meeting() -> Date {
    date(2024, 6, 3)
}

// ─── Scoring properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn longer_gap_scores_strictly_higher(
        weeks in 0i32..200,
        extra in 1i32..50,
        postpones in 0u32..5,
        priority in -50i32..50,
    ) {
        let policy = RotationPolicy::default();
        let m = meeting();
        let near = entry("a")
            .with_last_presented(m.add_weeks(-weeks).unwrap())
            .with_postpone_count(postpones)
            .with_priority(priority);
        let far = near.clone().with_last_presented(m.add_weeks(-(weeks + extra)).unwrap());
        let s_near = score_entry(&near, m, &policy);
        let s_far = score_entry(&far, m, &policy);
        prop_assume!(s_near.score > 0);
        prop_assert!(s_far.score > s_near.score);
    }

    #[test]
    fn more_postponements_score_strictly_lower(
        weeks in 0i32..200,
        postpones in 0u32..5,
        extra in 1u32..5,
    ) {
        let policy = RotationPolicy::default();
        let m = meeting();
        let fewer = entry("a")
            .with_last_presented(m.add_weeks(-weeks).unwrap())
            .with_postpone_count(postpones);
        let more = fewer.clone().with_postpone_count(postpones + extra);
        let s_more = score_entry(&more, m, &policy);
        prop_assume!(s_more.score > 0);
        prop_assert!(score_entry(&fewer, m, &policy).score > s_more.score);
    }

    #[test]
    fn committed_person_never_selected_elsewhere(
        committed_offset in 1i32..30,
        query_offset in -30i32..30,
    ) {
        let policy = RotationPolicy::default();
        let m = meeting();
        let commitment = m.add_weeks(committed_offset).unwrap();
        let query = m.add_weeks(query_offset).unwrap();
        prop_assume!(query != commitment);
        let pool = vec![entry("held").with_next_scheduled(commitment), entry("free")];
        let picked = select_presenters(&pool, query, 2, &policy);
        prop_assert!(picked.iter().all(|p| p.id.as_str() != "held"));
    }
}

#[test]
fn scores_are_never_negative() {
    let policy = RotationPolicy::default();
    let e = entry("a")
        .with_last_presented(meeting())
        .with_postpone_count(10)
        .with_priority(-1000);
    assert_eq!(score_entry(&e, meeting(), &policy).score, 0);
}

// ─── Eligibility ──────────────────────────────────────────────────────────────

#[test]
fn eligibility_gate_at_min_gap() {
    let policy = RotationPolicy::default();
    let m = meeting();
    let gap = policy.min_gap_weeks as i32;
    let too_soon = entry("a").with_last_presented(m.add_weeks(-(gap - 1)).unwrap());
    let just_right = entry("b").with_last_presented(m.add_weeks(-gap).unwrap());
    assert!(!is_eligible(&too_soon, m, &policy));
    assert!(is_eligible(&just_right, m, &policy));

    let picked = select_presenters(&[too_soon, just_right], m, 2, &policy);
    let ids: Vec<&str> = picked.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b"]);
}

#[test]
fn partial_selection_when_pool_is_short() {
    let policy = RotationPolicy::default();
    let mut inactive = entry("gone");
    inactive.person = inactive.person.inactive();
    let pool = vec![entry("only"), inactive];
    let picked = select_presenters(&pool, meeting(), 2, &policy);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].id.as_str(), "only");
}

#[test]
fn custom_min_gap() {
    let policy = RotationPolicy {
        min_gap_weeks: 1,
        ..RotationPolicy::default()
    };
    let e = entry("a").with_last_presented(meeting().add_weeks(-1).unwrap());
    assert!(is_eligible(&e, meeting(), &policy));
}

#[test]
fn ranking_reports_factors() {
    let policy = RotationPolicy::default();
    let m = meeting();
    let pool = vec![
        entry("recent").with_last_presented(m.add_weeks(-5).unwrap()),
        entry("overdue").with_last_presented(m.add_weeks(-10).unwrap()).with_postpone_count(1),
        entry("new"),
    ];
    let ranked = rank_candidates(&pool, m, &policy);
    let order: Vec<(&str, i64)> = ranked.iter().map(|s| (s.person.id.as_str(), s.score)).collect();
    // new: 100 + 120 + 50; overdue: 100 + 100 − 20 + 50; recent: 100 + 50
    assert_eq!(order, [("new", 270), ("overdue", 230), ("recent", 150)]);
    assert_eq!(ranked[1].factors.postpone_count, 1);
    assert_eq!(ranked[1].factors.weeks_since_last, 10);
}

// ─── Queue updates ────────────────────────────────────────────────────────────

#[test]
fn assignment_round_trip() {
    let policy = RotationPolicy::default();
    let m = meeting();
    let pool = vec![
        entry("ana")
            .with_last_presented(m.add_weeks(-6).unwrap())
            .with_postpone_count(2),
        entry("ben"),
    ];
    let picked = select_presenters(&pool, m, 1, &policy);
    assert_eq!(picked[0].id.as_str(), "ben");

    let ana = pool[0].person.clone();
    let next = after_assignment(&pool, &[ana], m, &policy);
    assert_eq!(next[0].last_presented_date, Some(m));
    assert_eq!(next[0].postpone_count, 0);

    // Re-scoring the same date: zero weeks since last, no postponements.
    let rescored = score_entry(&next[0], m, &policy);
    assert_eq!(rescored.factors.weeks_since_last, 0);
    assert_eq!(rescored.factors.postpone_count, 0);
    assert!(!is_eligible(&next[0], m, &policy));
}

#[test]
fn cascade_then_assignment_consumes_commitment() {
    let policy = RotationPolicy::default();
    let m = meeting();
    let pool = vec![
        entry("ana").with_last_presented(m.add_weeks(-8).unwrap()),
        entry("ben").with_last_presented(m.add_weeks(-4).unwrap()),
    ];
    let ana_id = pool[0].person.id.clone();
    let postponed =
        after_postponement(&pool, &ana_id, m, PostponeStrategy::Cascade, &policy).unwrap();
    let next_week = m.add_weeks(1).unwrap();
    assert_eq!(postponed[0].next_scheduled_date, Some(next_week));

    // Not selectable on the original date, but first in line next week.
    assert!(select_presenters(&postponed, m, 2, &policy)
        .iter()
        .all(|p| p.id != ana_id));
    let picked = select_presenters(&postponed, next_week, 1, &policy);
    assert_eq!(picked[0].id, ana_id);

    let presented = after_assignment(&postponed, &picked, next_week, &policy);
    assert_eq!(presented[0].next_scheduled_date, None);
    assert_eq!(presented[0].postpone_count, 0);
}

#[test]
fn updates_are_pure() {
    let policy = RotationPolicy::default();
    let pool = vec![entry("ana"), entry("ben")];
    let snapshot = pool.clone();
    let a = after_assignment(&pool, &[pool[0].person.clone()], meeting(), &policy);
    let b = after_assignment(&pool, &[pool[0].person.clone()], meeting(), &policy);
    assert_eq!(a, b);
    assert_eq!(pool, snapshot);
}

#[test]
fn pool_serializes_for_the_store() {
    let pool = vec![entry("ana")
        .with_last_presented(date(2024, 1, 8))
        .with_priority(3)];
    let json = serde_json::to_string(&pool).unwrap();
    assert!(json.contains("\"last_presented_date\":\"2024-01-08\""));
    let back: Vec<QueueEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pool);

    let minimal: QueueEntry =
        serde_json::from_str(r#"{"person":{"id":"cy","name":"Cy"}}"#).unwrap();
    assert!(minimal.person.is_active);
    assert_eq!(minimal.postpone_count, 0);
}
