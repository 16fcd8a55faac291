use super::types::CardId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    DeckDealt {
        total: usize,
        mafia: usize,
        citizens: usize,
    },
    CardRevealed {
        id: CardId,
    },
    CardAcknowledged {
        id: CardId,
        remaining: usize,
    },
    SessionRestarted,
}
