//! Swipe Deck
//!
//! Owns the candidate list, the cursor into it and the live drag
//! displacement of the top card. A released drag is classified once; a commit
//! flies the card out, and only when that animation completes is the decision
//! handed to the sink and the cursor advanced.
//!
//! Phases:
//! - `Idle`: card at rest, a drag or programmatic commit may start
//! - `Dragging`: pointer down, displacement follows the pointer
//! - `Exiting`: committed card flying out; input is ignored
//! - `Settling`: spring back to center; a new drag may interrupt it
//!
//! The item list is append-only within a session. `set_items` starts a new
//! session, and `detach` tears the view down; both bump the generation so an
//! exit that was in flight never completes afterwards.

use std::time::{Duration, Instant};

use crate::api::{Candidate, Decision};
use crate::logic::animation::{
    Spring, Tween, DEFAULT_SPRING_FRICTION, DEFAULT_SPRING_TENSION,
};
use crate::logic::swipe::{self, SwipeOutcome, DEFAULT_THRESHOLD_RATIO};

/// Items the deck can show need a stable id for the decision sink
pub trait DeckItem {
    fn id(&self) -> &str;
}

impl DeckItem for Candidate {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Receives committed decisions, once per commit
pub trait DecisionSink {
    fn record(&mut self, item_id: &str, decision: Decision);
}

impl DecisionSink for Vec<(String, Decision)> {
    fn record(&mut self, item_id: &str, decision: Decision) {
        self.push((item_id.to_string(), decision));
    }
}

/// Session record of decided item ids
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecisionLedger {
    pub liked: Vec<String>,
    pub passed: Vec<String>,
}

impl DecisionLedger {
    pub fn total(&self) -> usize {
        self.liked.len() + self.passed.len()
    }

    pub fn clear(&mut self) {
        self.liked.clear();
        self.passed.clear();
    }
}

impl DecisionSink for DecisionLedger {
    fn record(&mut self, item_id: &str, decision: Decision) {
        match decision {
            Decision::Accept => self.liked.push(item_id.to_string()),
            Decision::Reject => self.passed.push(item_id.to_string()),
        }
    }
}

/// Tunables for classification and animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckSettings {
    pub threshold_ratio: f32,
    pub exit_duration: Duration,
    pub spring_tension: f32,
    pub spring_friction: f32,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
            exit_duration: Duration::from_millis(300),
            spring_tension: DEFAULT_SPRING_TENSION,
            spring_friction: DEFAULT_SPRING_FRICTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeckPhase {
    Idle,
    Dragging {
        origin: (f32, f32),
    },
    Exiting {
        decision: Decision,
        tween: Tween,
        generation: u64,
    },
    Settling {
        spring: Spring,
    },
}

#[derive(Clone, Debug)]
pub struct SwipeDeck<T> {
    items: Vec<T>,
    cursor: usize,
    displacement: (f32, f32),
    phase: DeckPhase,
    viewport_width: f32,
    settings: DeckSettings,
    generation: u64,
}

impl<T: DeckItem> SwipeDeck<T> {
    pub fn new(settings: DeckSettings) -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            displacement: (0.0, 0.0),
            phase: DeckPhase::Idle,
            viewport_width: 0.0,
            settings,
            generation: 0,
        }
    }

    // ============================================
    // ITEMS & CURSOR
    // ============================================

    /// Replace the list and start a new session at cursor 0
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
        self.reset_interaction();
    }

    /// Append more items to the current session
    pub fn append_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Item on top of the deck
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Item shown underneath the top card
    pub fn next_up(&self) -> Option<&T> {
        self.items.get(self.cursor + 1)
    }

    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    // ============================================
    // GEOMETRY & FEEDBACK
    // ============================================

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn settings(&self) -> DeckSettings {
        self.settings
    }

    pub fn threshold(&self) -> f32 {
        swipe::swipe_threshold(self.viewport_width, self.settings.threshold_ratio)
    }

    pub fn displacement(&self) -> (f32, f32) {
        self.displacement
    }

    pub fn accept_intensity(&self) -> f32 {
        swipe::accept_intensity(self.displacement.0, self.viewport_width)
    }

    pub fn reject_intensity(&self) -> f32 {
        swipe::reject_intensity(self.displacement.0, self.viewport_width)
    }

    pub fn tilt_degrees(&self) -> f32 {
        swipe::tilt_degrees(self.displacement.0, self.viewport_width)
    }

    // ============================================
    // PHASE
    // ============================================

    pub fn phase(&self) -> &DeckPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DeckPhase::Dragging { .. })
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, DeckPhase::Exiting { .. })
    }

    /// Whether `tick` has work to do
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            DeckPhase::Exiting { .. } | DeckPhase::Settling { .. }
        )
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ============================================
    // INTERACTION
    // ============================================

    /// Start tracking a drag at pointer position (x, y)
    ///
    /// Refused when the deck is exhausted or a committed card is still
    /// flying out. Interrupts a snap-back in progress.
    pub fn begin_drag(&mut self, x: f32, y: f32) -> bool {
        self.drop_stale_exit();
        if self.is_exhausted() || self.is_exiting() {
            return false;
        }
        self.displacement = (0.0, 0.0);
        self.phase = DeckPhase::Dragging { origin: (x, y) };
        true
    }

    /// Pointer moved; displacement is the cumulative drag vector
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        match self.phase {
            DeckPhase::Dragging { origin } => {
                self.displacement = (x - origin.0, y - origin.1);
                true
            }
            _ => false,
        }
    }

    /// Pointer released; classify the drag
    ///
    /// Returns `None` when no drag was in progress, so a release is
    /// classified at most once.
    pub fn release(&mut self, now: Instant) -> Option<SwipeOutcome> {
        if !self.is_dragging() {
            return None;
        }

        let outcome = swipe::classify_release(self.displacement.0, self.threshold());
        match outcome.decision() {
            Some(decision) => self.start_exit(decision, now),
            None => self.start_settle(now),
        }
        Some(outcome)
    }

    /// Commit a decision without a drag (keyboard buttons)
    ///
    /// Goes through the same exit animation as a released drag. Refused while
    /// dragging, while another card is exiting, or when exhausted.
    pub fn commit(&mut self, decision: Decision, now: Instant) -> bool {
        self.drop_stale_exit();
        if self.is_exhausted() || self.is_exiting() || self.is_dragging() {
            return false;
        }
        self.start_exit(decision, now);
        true
    }

    /// Advance animations to `now`
    ///
    /// When an exit completes the decision goes to `sink` for the current
    /// item, the displacement resets and the cursor advances; the decision is
    /// returned. An exit started before the last `set_items`/`detach` is
    /// dropped without reaching the sink.
    pub fn tick(&mut self, now: Instant, sink: &mut impl DecisionSink) -> Option<Decision> {
        match &mut self.phase {
            DeckPhase::Exiting {
                decision,
                tween,
                generation,
            } => {
                if *generation != self.generation {
                    self.reset_motion();
                    return None;
                }
                let decision = *decision;
                self.displacement = tween.value_at(now);
                if !tween.is_finished(now) {
                    return None;
                }

                if let Some(item) = self.items.get(self.cursor) {
                    sink.record(item.id(), decision);
                }
                self.reset_motion();
                self.cursor += 1;
                Some(decision)
            }
            DeckPhase::Settling { spring } => {
                self.displacement = spring.step(now);
                if spring.is_settled() {
                    self.reset_motion();
                }
                None
            }
            DeckPhase::Idle | DeckPhase::Dragging { .. } => None,
        }
    }

    /// The deck view went away; any pending exit must not complete
    ///
    /// A card that is mid-exit keeps its stale generation and is discarded
    /// by the next `tick` or interaction.
    pub fn detach(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if !self.is_exiting() {
            self.reset_motion();
        }
    }

    // ============================================
    // INTERNAL
    // ============================================

    fn start_exit(&mut self, decision: Decision, now: Instant) {
        let target = (
            swipe::exit_target(decision, self.viewport_width),
            self.displacement.1,
        );
        self.phase = DeckPhase::Exiting {
            decision,
            tween: Tween::new(self.displacement, target, now, self.settings.exit_duration),
            generation: self.generation,
        };
    }

    fn start_settle(&mut self, now: Instant) {
        self.phase = DeckPhase::Settling {
            spring: Spring::new(
                self.displacement,
                self.settings.spring_tension,
                self.settings.spring_friction,
                now,
            ),
        };
    }

    fn drop_stale_exit(&mut self) {
        if let DeckPhase::Exiting { generation, .. } = self.phase {
            if generation != self.generation {
                self.reset_motion();
            }
        }
    }

    fn reset_motion(&mut self) {
        self.displacement = (0.0, 0.0);
        self.phase = DeckPhase::Idle;
    }

    fn reset_interaction(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.reset_motion();
    }
}

impl<T: DeckItem> Default for SwipeDeck<T> {
    fn default() -> Self {
        Self::new(DeckSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Card(&'static str);

    impl DeckItem for Card {
        fn id(&self) -> &str {
            self.0
        }
    }

    const WIDTH: f32 = 400.0;

    fn deck(ids: &[&'static str]) -> SwipeDeck<Card> {
        let mut deck = SwipeDeck::new(DeckSettings::default());
        deck.set_viewport_width(WIDTH);
        deck.set_items(ids.iter().copied().map(Card).collect());
        deck
    }

    fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    /// Drag by dx and release at `now`
    fn swipe(deck: &mut SwipeDeck<Card>, dx: f32, now: Instant) -> Option<SwipeOutcome> {
        assert!(deck.begin_drag(200.0, 10.0));
        deck.drag_to(200.0 + dx, 12.0);
        deck.release(now)
    }

    #[test]
    fn test_commit_completes_after_exit_animation() {
        let mut deck = deck(&["a", "b"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        assert_eq!(swipe(&mut deck, 150.0, start), Some(SwipeOutcome::Accept));
        assert!(deck.is_exiting());

        assert_eq!(deck.tick(after(start, 150), &mut sink), None);
        assert_eq!(deck.cursor(), 0);
        assert!(sink.is_empty());
        assert!(deck.displacement().0 > 150.0);

        assert_eq!(deck.tick(after(start, 300), &mut sink), Some(Decision::Accept));
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.displacement(), (0.0, 0.0));
        assert_eq!(sink, vec![("a".to_string(), Decision::Accept)]);
        assert_eq!(deck.current(), Some(&Card("b")));
    }

    #[test]
    fn test_below_threshold_springs_back_without_side_effect() {
        let mut deck = deck(&["a"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        assert_eq!(swipe(&mut deck, 90.0, start), Some(SwipeOutcome::Reset));
        assert!(matches!(deck.phase(), DeckPhase::Settling { .. }));

        let mut now = start;
        for _ in 0..500 {
            now = after(now, 16);
            deck.tick(now, &mut sink);
            if !deck.is_animating() {
                break;
            }
        }

        assert!(!deck.is_animating());
        assert_eq!(deck.displacement(), (0.0, 0.0));
        assert_eq!(deck.cursor(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_reject_boundary() {
        let mut deck = deck(&["a"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        assert_eq!(swipe(&mut deck, -101.0, start), Some(SwipeOutcome::Reject));
        deck.tick(after(start, 300), &mut sink);
        assert_eq!(sink, vec![("a".to_string(), Decision::Reject)]);
        assert!(deck.is_exhausted());
    }

    #[test]
    fn test_n_commits_advance_cursor_n() {
        let ids = ["a", "b", "c", "d", "e"];
        let mut deck = deck(&ids);
        let mut ledger = DecisionLedger::default();
        let mut now = Instant::now();

        for (i, _) in ids.iter().enumerate() {
            let dx = if i % 2 == 0 { 120.0 } else { -120.0 };
            swipe(&mut deck, dx, now);
            now = after(now, 300);
            deck.tick(now, &mut ledger);
            assert_eq!(deck.cursor(), i + 1);
        }

        assert!(deck.is_exhausted());
        assert_eq!(ledger.liked, vec!["a", "c", "e"]);
        assert_eq!(ledger.passed, vec!["b", "d"]);
        assert_eq!(ledger.total(), 5);
    }

    #[test]
    fn test_rapid_releases_serialize() {
        let mut deck = deck(&["a", "b", "c"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        swipe(&mut deck, 150.0, start);

        // While the card is flying out nothing new begins or gets classified
        assert!(!deck.begin_drag(200.0, 10.0));
        assert!(!deck.drag_to(500.0, 10.0));
        assert_eq!(deck.release(after(start, 10)), None);
        assert!(!deck.commit(Decision::Reject, after(start, 20)));

        deck.tick(after(start, 300), &mut sink);
        deck.tick(after(start, 600), &mut sink);

        assert_eq!(deck.cursor(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_single_release_single_side_effect() {
        let mut deck = deck(&["a", "b"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        swipe(&mut deck, 100.0, start);
        assert_eq!(deck.release(start), None);

        for ms in [100, 200, 300, 400, 500] {
            deck.tick(after(start, ms), &mut sink);
        }
        assert_eq!(sink.len(), 1);
        assert_eq!(deck.cursor(), 1);
    }

    #[test]
    fn test_empty_list_allows_no_interaction() {
        let mut deck: SwipeDeck<Card> = deck(&[]);
        let now = Instant::now();

        assert!(deck.is_exhausted());
        assert!(!deck.begin_drag(0.0, 0.0));
        assert!(!deck.commit(Decision::Accept, now));
        assert_eq!(deck.release(now), None);
        assert!(deck.current().is_none());
    }

    #[test]
    fn test_exhausted_deck_is_noop() {
        let mut deck = deck(&["a"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        assert!(deck.commit(Decision::Accept, start));
        deck.tick(after(start, 300), &mut sink);

        assert!(deck.is_exhausted());
        assert!(!deck.begin_drag(0.0, 0.0));
        assert!(!deck.commit(Decision::Reject, after(start, 400)));
        assert_eq!(deck.cursor(), 1);
    }

    #[test]
    fn test_zero_viewport_always_resets() {
        let mut deck = deck(&["a"]);
        deck.set_viewport_width(0.0);
        let start = Instant::now();

        assert_eq!(swipe(&mut deck, 1000.0, start), Some(SwipeOutcome::Reset));
        assert_eq!(swipe(&mut deck, -1000.0, start), Some(SwipeOutcome::Reset));
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_programmatic_commit_uses_exit_animation() {
        let mut deck = deck(&["a", "b"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        assert!(deck.commit(Decision::Reject, start));
        assert!(deck.is_exiting());
        assert_eq!(deck.tick(after(start, 100), &mut sink), None);
        assert!(deck.displacement().0 < 0.0);

        assert_eq!(deck.tick(after(start, 300), &mut sink), Some(Decision::Reject));
        assert_eq!(sink, vec![("a".to_string(), Decision::Reject)]);
        assert_eq!(deck.cursor(), 1);
    }

    #[test]
    fn test_commit_refused_mid_drag() {
        let mut deck = deck(&["a"]);
        assert!(deck.begin_drag(0.0, 0.0));
        assert!(!deck.commit(Decision::Accept, Instant::now()));
    }

    #[test]
    fn test_detach_suppresses_pending_commit() {
        let mut deck = deck(&["a", "b"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        swipe(&mut deck, 150.0, start);
        deck.detach();
        assert!(deck.is_exiting());

        assert_eq!(deck.tick(after(start, 300), &mut sink), None);
        assert!(sink.is_empty());
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.displacement(), (0.0, 0.0));

        // The deck is usable again afterwards
        assert!(deck.begin_drag(0.0, 0.0));
    }

    #[test]
    fn test_set_items_starts_new_session() {
        let mut deck = deck(&["a", "b"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        deck.commit(Decision::Accept, start);
        deck.tick(after(start, 300), &mut sink);
        assert_eq!(deck.cursor(), 1);

        deck.commit(Decision::Accept, after(start, 400));
        let generation = deck.generation();
        deck.set_items(vec![Card("x"), Card("y")]);
        assert_ne!(deck.generation(), generation);

        deck.tick(after(start, 1000), &mut sink);
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.current(), Some(&Card("x")));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_append_keeps_cursor() {
        let mut deck = deck(&["a"]);
        let mut sink = Vec::new();
        let start = Instant::now();

        deck.commit(Decision::Accept, start);
        deck.tick(after(start, 300), &mut sink);
        assert!(deck.is_exhausted());

        deck.append_items(vec![Card("b")]);
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.current(), Some(&Card("b")));
        assert_eq!(deck.items().len(), 2);
    }

    #[test]
    fn test_drag_interrupts_settle() {
        let mut deck = deck(&["a"]);
        let start = Instant::now();

        swipe(&mut deck, 50.0, start);
        assert!(deck.is_animating());
        assert!(deck.begin_drag(10.0, 10.0));
        assert!(deck.is_dragging());
        assert_eq!(deck.displacement(), (0.0, 0.0));
    }

    #[test]
    fn test_feedback_follows_displacement() {
        let mut deck = deck(&["a"]);
        deck.begin_drag(0.0, 0.0);

        deck.drag_to(50.0, 0.0);
        assert_eq!(deck.accept_intensity(), 0.5);
        assert_eq!(deck.reject_intensity(), 0.0);
        assert_eq!(deck.tilt_degrees(), 2.5);

        deck.drag_to(-400.0, 30.0);
        assert_eq!(deck.accept_intensity(), 0.0);
        assert_eq!(deck.reject_intensity(), 1.0);
        assert_eq!(deck.tilt_degrees(), -10.0);
        assert_eq!(deck.displacement(), (-400.0, 30.0));
    }

    #[test]
    fn test_next_up_and_remaining() {
        let deck = deck(&["a", "b", "c"]);
        assert_eq!(deck.next_up(), Some(&Card("b")));
        assert_eq!(deck.remaining(), 3);
    }
}
