use rand::seq::SliceRandom;
use rand::Rng;

use super::setup::SetupConfig;
use super::types::{Card, RoleDefaults, Side};

/// Build a fresh deck from the current setup: one record per configured
/// slot, uniformly permuted (Fisher-Yates), ids assigned by shuffled
/// position.
pub fn deal_deck<R>(setup: &SetupConfig, defaults: &RoleDefaults, rng: &mut R) -> Vec<Card>
where
    R: Rng + ?Sized,
{
    let mut slots = resolve_roles(setup, defaults);
    slots.shuffle(rng);
    slots
        .into_iter()
        .enumerate()
        .map(|(id, (role, side))| Card {
            id,
            role,
            side,
            is_flipped: false,
            is_seen: false,
        })
        .collect()
}

/// One `(display text, side)` record per slot, mafia first, in setup order.
/// Blank or whitespace-only names resolve to the side default here, not at
/// edit time.
fn resolve_roles(setup: &SetupConfig, defaults: &RoleDefaults) -> Vec<(String, Side)> {
    let mafia = setup
        .mafia_roles
        .iter()
        .map(|raw| (resolve(raw, &defaults.mafia), Side::Mafia));
    let citizens = setup
        .citizen_roles
        .iter()
        .map(|raw| (resolve(raw, &defaults.citizen), Side::Citizen));
    mafia.chain(citizens).collect()
}

fn resolve(raw: &str, default_label: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_label.to_string()
    } else {
        trimmed.to_string()
    }
}
