use serde::{Deserialize, Serialize};

use super::errors::{InvariantCheck, StateError};
use super::types::{Card, CardId, Phase};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub deck: Vec<Card>, // empty during Setup
    pub active_card: Option<CardId>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Setup,
            deck: Vec::new(),
            active_card: None,
        }
    }
}

impl SessionState {
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    pub(super) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.deck.iter_mut().find(|c| c.id == id)
    }

    /// Cards not yet acknowledged. Zero means the session is complete;
    /// derived, never stored.
    pub fn remaining(&self) -> usize {
        self.deck.iter().filter(|c| !c.is_seen).count()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Dealt && self.remaining() == 0
    }
}

impl InvariantCheck for SessionState {
    fn validate_invariants(&self) -> Result<(), StateError> {
        if self.phase == Phase::Setup && (!self.deck.is_empty() || self.active_card.is_some()) {
            return Err(StateError::InvariantViolation("setup phase carries no deck"));
        }
        let flipped: Vec<CardId> = self
            .deck
            .iter()
            .filter(|c| c.is_flipped)
            .map(|c| c.id)
            .collect();
        if flipped.len() > 1 {
            return Err(StateError::InvariantViolation("more than one card face up"));
        }
        match (self.active_card, flipped.first()) {
            (Some(active), Some(&id)) if active == id => {}
            (None, None) => {}
            _ => {
                return Err(StateError::InvariantViolation(
                    "active card out of sync with deck",
                ))
            }
        }
        for (pos, card) in self.deck.iter().enumerate() {
            if card.id != pos {
                return Err(StateError::InvariantViolation("card id must match position"));
            }
            if card.is_flipped && card.is_seen {
                return Err(StateError::InvariantViolation("seen card left face up"));
            }
        }
        Ok(())
    }
}
