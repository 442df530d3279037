//! Integration tests for the candidate swipe deck
//!
//! These tests drive the deck the way the UI loop does:
//! 1. Pointer down / move / up produce one classification per release
//! 2. Ticks advance the exit animation; the decision lands at its end
//! 3. Tearing the view down mid-exit suppresses the pending decision

use std::time::{Duration, Instant};

use nexttui::api::{Candidate, Decision};
use nexttui::logic::swipe::SwipeOutcome;
use nexttui::model::{DecisionLedger, DeckSettings, DiscoverModel, SwipeDeck};

const WIDTH: f32 = 400.0;

fn candidate(id: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: format!("Candidate {}", id),
        job_title: "Engineer".to_string(),
        experience: 3,
        skills: vec!["Rust".to_string()],
        bio: String::new(),
        location: "Remote".to_string(),
    }
}

fn deck_of(n: usize) -> SwipeDeck<Candidate> {
    let mut deck = SwipeDeck::new(DeckSettings::default());
    deck.set_items((0..n).map(|i| candidate(&i.to_string())).collect());
    deck.set_viewport_width(WIDTH);
    deck
}

/// Drag horizontally by `dx`, release and run the animation to the end
fn swipe(
    deck: &mut SwipeDeck<Candidate>,
    dx: f32,
    now: Instant,
    sink: &mut Vec<(String, Decision)>,
) -> Option<SwipeOutcome> {
    if !deck.begin_drag(100.0, 50.0) {
        return None;
    }
    deck.drag_to(100.0 + dx, 52.0);
    let outcome = deck.release(now);
    let settle = now + Duration::from_secs(5);
    // Springs need several steps to settle
    for step in 1..=100 {
        deck.tick(now + Duration::from_millis(step * 50), sink);
    }
    deck.tick(settle, sink);
    outcome
}

#[test]
fn test_viewport_400_examples() {
    let now = Instant::now();
    let cases = [
        (90.0, SwipeOutcome::Reset, 0),
        (100.0, SwipeOutcome::Accept, 1),
        (-101.0, SwipeOutcome::Reject, 1),
        (150.0, SwipeOutcome::Accept, 1),
    ];

    for (dx, expected, cursor) in cases {
        let mut deck = deck_of(3);
        let mut sink = Vec::new();
        let outcome = swipe(&mut deck, dx, now, &mut sink);
        assert_eq!(outcome, Some(expected), "dx = {}", dx);
        assert_eq!(deck.cursor(), cursor, "dx = {}", dx);
        assert_eq!(sink.len(), cursor, "dx = {}", dx);
        assert_eq!(deck.displacement(), (0.0, 0.0), "dx = {}", dx);
    }
}

#[test]
fn test_n_commits_advance_cursor_n() {
    let mut deck = deck_of(5);
    let mut sink = Vec::new();
    let start = Instant::now();

    for i in 0..5u32 {
        let now = start + Duration::from_secs(i as u64 * 10);
        let dx = if i % 2 == 0 { 200.0 } else { -200.0 };
        swipe(&mut deck, dx, now, &mut sink);
    }

    assert_eq!(deck.cursor(), 5);
    assert!(deck.is_exhausted());
    let ids: Vec<&str> = sink.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    assert_eq!(sink[1].1, Decision::Reject);
}

#[test]
fn test_empty_deck_refuses_interaction() {
    let mut deck = deck_of(0);
    assert!(!deck.begin_drag(0.0, 0.0));
    assert!(!deck.commit(Decision::Accept, Instant::now()));
    assert!(deck.release(Instant::now()).is_none());
    assert_eq!(deck.cursor(), 0);
}

#[test]
fn test_single_release_single_decision() {
    let mut deck = deck_of(3);
    let mut sink = Vec::new();
    let now = Instant::now();

    assert!(deck.begin_drag(0.0, 0.0));
    deck.drag_to(300.0, 0.0);
    assert_eq!(deck.release(now), Some(SwipeOutcome::Accept));
    // A second release for the same gesture is a no-op
    assert_eq!(deck.release(now), None);

    let end = now + Duration::from_secs(1);
    deck.tick(end, &mut sink);
    deck.tick(end + Duration::from_secs(1), &mut sink);

    assert_eq!(sink, vec![("0".to_string(), Decision::Accept)]);
    assert_eq!(deck.cursor(), 1);
}

#[test]
fn test_input_ignored_while_exiting() {
    let mut deck = deck_of(3);
    let mut sink = Vec::new();
    let now = Instant::now();

    assert!(deck.commit(Decision::Reject, now));
    assert!(deck.is_exiting());
    assert!(!deck.begin_drag(0.0, 0.0));
    assert!(!deck.commit(Decision::Accept, now));

    deck.tick(now + Duration::from_secs(1), &mut sink);
    assert_eq!(sink, vec![("0".to_string(), Decision::Reject)]);
    assert!(deck.begin_drag(0.0, 0.0));
}

#[test]
fn test_teardown_mid_exit_suppresses_decision() {
    let mut deck = deck_of(3);
    let mut sink = Vec::new();
    let now = Instant::now();

    assert!(deck.commit(Decision::Accept, now));
    deck.tick(now + Duration::from_millis(100), &mut sink);
    deck.detach();
    deck.tick(now + Duration::from_secs(2), &mut sink);

    assert!(sink.is_empty());
    assert_eq!(deck.cursor(), 0);
    assert!(!deck.is_animating());
}

#[test]
fn test_reload_mid_exit_suppresses_decision() {
    let mut discover = DiscoverModel::new(DeckSettings::default());
    discover
        .deck
        .set_viewport_width(WIDTH);
    discover.load(
        nexttui::api::UserType::Company,
        vec![candidate("a"), candidate("b")],
    );
    let now = Instant::now();

    assert!(discover.deck.commit(Decision::Accept, now));
    discover.load(nexttui::api::UserType::Company, vec![candidate("c")]);
    discover
        .deck
        .tick(now + Duration::from_secs(2), &mut discover.ledger);

    assert_eq!(discover.ledger, DecisionLedger::default());
    assert_eq!(discover.deck.current().map(|c| c.id.as_str()), Some("c"));
}

#[test]
fn test_ledger_counts_likes_and_passes() {
    let mut deck = deck_of(3);
    let mut ledger = DecisionLedger::default();
    let start = Instant::now();

    for (i, decision) in [Decision::Accept, Decision::Reject, Decision::Accept]
        .into_iter()
        .enumerate()
    {
        let now = start + Duration::from_secs(i as u64 * 5);
        assert!(deck.commit(decision, now));
        deck.tick(now + Duration::from_secs(1), &mut ledger);
    }

    assert_eq!(ledger.liked, vec!["0".to_string(), "2".to_string()]);
    assert_eq!(ledger.passed, vec!["1".to_string()]);
    assert_eq!(ledger.total(), 3);
    assert!(deck.is_exhausted());
}

#[test]
fn test_undamped_snap_back_still_finishes() {
    let mut deck = SwipeDeck::new(DeckSettings {
        spring_friction: 0.0,
        ..DeckSettings::default()
    });
    deck.set_items(vec![candidate("a")]);
    deck.set_viewport_width(WIDTH);
    let mut sink = Vec::new();
    let start = Instant::now();

    assert!(deck.begin_drag(0.0, 0.0));
    deck.drag_to(50.0, 0.0);
    assert_eq!(deck.release(start), Some(SwipeOutcome::Reset));

    let mut now = start;
    while deck.is_animating() && now < start + Duration::from_secs(60) {
        now += Duration::from_millis(16);
        deck.tick(now, &mut sink);
    }

    assert!(!deck.is_animating(), "snap-back still running after {:?}", now - start);
    assert!(now - start <= Duration::from_secs(5));
    assert_eq!(deck.displacement(), (0.0, 0.0));
    assert_eq!(deck.cursor(), 0);
    assert!(sink.is_empty());
}
