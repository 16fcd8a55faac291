use rand::Rng;

use super::deal::deal_deck;
use super::events::SessionEvent;
use super::setup::SetupConfig;
use super::state::SessionState;
use super::types::{CardId, Phase, RoleDefaults, Side};

/// Transition functions over a session. Failed preconditions on
/// `deal_new_game`, `reveal` and `acknowledge` are silent no-ops (`None`):
/// they model double-taps racing the UI, not programmer mistakes.
pub trait SessionEngine {
    fn deal_new_game<R: Rng + ?Sized>(
        state: &mut SessionState,
        setup: &SetupConfig,
        defaults: &RoleDefaults,
        rng: &mut R,
    ) -> Option<SessionEvent>;
    fn reveal(state: &mut SessionState, id: CardId) -> Option<SessionEvent>;
    fn acknowledge(state: &mut SessionState, id: CardId) -> Option<SessionEvent>;
    fn restart(state: &mut SessionState, setup: &mut SetupConfig) -> SessionEvent;
}

pub struct Dealer;

impl SessionEngine for Dealer {
    fn deal_new_game<R: Rng + ?Sized>(
        state: &mut SessionState,
        setup: &SetupConfig,
        defaults: &RoleDefaults,
        rng: &mut R,
    ) -> Option<SessionEvent> {
        if setup.total() == 0 {
            return None;
        }
        let deck = deal_deck(setup, defaults, rng);
        let mafia = deck.iter().filter(|c| c.side == Side::Mafia).count();
        let citizens = deck.len() - mafia;
        let total = deck.len();
        state.phase = Phase::Dealt;
        state.deck = deck;
        state.active_card = None;
        Some(SessionEvent::DeckDealt {
            total,
            mafia,
            citizens,
        })
    }

    fn reveal(state: &mut SessionState, id: CardId) -> Option<SessionEvent> {
        if state.phase != Phase::Dealt || state.active_card.is_some() {
            return None;
        }
        let card = state.card_mut(id)?;
        if card.is_seen {
            return None;
        }
        card.is_flipped = true;
        state.active_card = Some(id);
        Some(SessionEvent::CardRevealed { id })
    }

    fn acknowledge(state: &mut SessionState, id: CardId) -> Option<SessionEvent> {
        if state.active_card != Some(id) {
            return None;
        }
        let card = state.card_mut(id)?;
        card.is_seen = true;
        card.is_flipped = false;
        state.active_card = None;
        let remaining = state.remaining();
        Some(SessionEvent::CardAcknowledged { id, remaining })
    }

    fn restart(state: &mut SessionState, setup: &mut SetupConfig) -> SessionEvent {
        *state = SessionState::default();
        setup.reset();
        SessionEvent::SessionRestarted
    }
}
