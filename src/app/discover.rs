//! Candidate deck orchestration

use std::time::Instant;

use nexttui::api::{Decision, UserType};
use nexttui::model::{DecisionLedger, DecisionSink};
use nexttui::services::ApiRequest;
use tokio::sync::mpsc;

use crate::App;

/// Records a committed decision locally and forwards it to the gateway
struct ForwardingSink<'a> {
    ledger: &'a mut DecisionLedger,
    api_tx: &'a mpsc::UnboundedSender<ApiRequest>,
    pool: UserType,
}

impl DecisionSink for ForwardingSink<'_> {
    fn record(&mut self, item_id: &str, decision: Decision) {
        self.ledger.record(item_id, decision);
        let request = ApiRequest::RecordDecision {
            pool: self.pool,
            candidate_id: item_id.to_string(),
            decision,
        };
        if self.api_tx.send(request).is_err() {
            tracing::error!("API service is gone; decision for {} not forwarded", item_id);
        }
    }
}

impl App {
    /// Candidate pool for the signed-in recruiter
    fn candidate_pool(&self) -> Option<UserType> {
        self.model.role().filter(|role| role.recruits())
    }

    pub fn request_candidates(&mut self, force: bool) {
        let Some(pool) = self.candidate_pool() else {
            return;
        };
        let discover = &mut self.model.discover;
        if discover.loading || (discover.loaded && !force) {
            return;
        }

        tracing::debug!("Fetching candidates for pool {}", pool.as_str());
        discover.loading = true;
        self.send_request(ApiRequest::FetchCandidates { pool });
    }

    /// Advance the deck animation; completes exits into the sink
    pub fn tick_deck(&mut self, now: Instant) {
        let discover = &mut self.model.discover;
        let Some(pool) = discover.pool else {
            return;
        };

        let mut sink = ForwardingSink {
            ledger: &mut discover.ledger,
            api_tx: &self.api_tx,
            pool,
        };
        if let Some(decision) = discover.deck.tick(now, &mut sink) {
            tracing::debug!(
                "Committed {} ({} left)",
                decision.as_str(),
                discover.deck.remaining()
            );
        }
    }

    /// Keyboard accept/reject; flies the card out like a released drag
    pub fn commit_decision(&mut self, decision: Decision) {
        if !self.model.discover.deck.commit(decision, Instant::now()) {
            tracing::debug!("Commit {} refused in current deck phase", decision.as_str());
        }
    }

    pub fn deck_begin_drag(&mut self, column: u16, row: u16) {
        let deck = &mut self.model.discover.deck;
        if deck.begin_drag(column as f32, row as f32) {
            tracing::trace!("Drag started at ({}, {})", column, row);
        }
    }

    pub fn deck_drag_to(&mut self, column: u16, row: u16) {
        self.model.discover.deck.drag_to(column as f32, row as f32);
    }

    pub fn deck_release(&mut self) {
        if let Some(outcome) = self.model.discover.deck.release(Instant::now()) {
            tracing::debug!("Drag released: {:?}", outcome);
        }
    }
}
