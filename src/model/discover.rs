//! Discover Model
//!
//! Candidate deck for recruiting roles plus the session ledger of decisions.

use crate::api::{Candidate, UserType};

use super::deck::{DecisionLedger, DeckSettings, SwipeDeck};

#[derive(Clone, Debug)]
pub struct DiscoverModel {
    pub deck: SwipeDeck<Candidate>,
    pub ledger: DecisionLedger,

    /// Pool the deck was filled from
    pub pool: Option<UserType>,

    pub loading: bool,
    pub loaded: bool,
}

impl DiscoverModel {
    pub fn new(settings: DeckSettings) -> Self {
        Self {
            deck: SwipeDeck::new(settings),
            ledger: DecisionLedger::default(),
            pool: None,
            loading: false,
            loaded: false,
        }
    }

    /// Fill the deck with a freshly fetched batch, starting a new session
    pub fn load(&mut self, pool: UserType, candidates: Vec<Candidate>) {
        self.deck.set_items(candidates);
        self.pool = Some(pool);
        self.loading = false;
        self.loaded = true;
    }

    /// Drop everything; used on logout
    pub fn reset(&mut self) {
        self.deck.detach();
        self.deck.set_items(Vec::new());
        self.ledger.clear();
        self.pool = None;
        self.loading = false;
        self.loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {}", id),
            job_title: "Engineer".to_string(),
            experience: 3,
            skills: vec![],
            bio: String::new(),
            location: "Remote".to_string(),
        }
    }

    #[test]
    fn test_load_and_reset() {
        let mut model = DiscoverModel::new(DeckSettings::default());
        model.loading = true;
        model.load(UserType::Startup, vec![candidate("s1"), candidate("s2")]);

        assert!(model.loaded);
        assert!(!model.loading);
        assert_eq!(model.deck.remaining(), 2);
        assert_eq!(model.pool, Some(UserType::Startup));

        model.ledger.liked.push("s1".to_string());
        model.reset();
        assert!(!model.loaded);
        assert!(model.deck.is_exhausted());
        assert_eq!(model.ledger.total(), 0);
    }
}
