use serde::{Deserialize, Serialize};

pub type CardId = usize; // position in the shuffled deck, 0-based

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Mafia,
    Citizen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    Dealt,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId, // stable for the deck's lifetime
    pub role: String, // resolved display text, fixed at deal time
    pub side: Side,

    pub is_flipped: bool, // face up right now; at most one per deck
    pub is_seen: bool,    // terminal once set
}

/// Side default labels, resolved by the caller before a deal. The engine
/// never talks to the localizer directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleDefaults {
    pub mafia: String,
    pub citizen: String,
}
