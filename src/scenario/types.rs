use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::session::SetupConfig;

/// A saved preset of role counts and names. The wire format keeps the
/// camelCase keys of the web app's localStorage payloads so existing saves
/// still load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub mafias_count: usize,
    pub citizens_count: usize,
    pub mafia_roles: Vec<String>,
    pub citizen_roles: Vec<String>,
}

impl Scenario {
    /// Snapshot the live setup under a fresh opaque id. Value semantics:
    /// later setup edits never touch the saved copy.
    pub fn from_setup(name: impl Into<String>, setup: &SetupConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            mafias_count: setup.mafia_count,
            citizens_count: setup.citizen_count,
            mafia_roles: setup.mafia_roles.clone(),
            citizen_roles: setup.citizen_roles.clone(),
        }
    }

    /// Rebuild a setup from the stored values. Hand-edited payloads may
    /// carry role lists that disagree with the counts; the counts win.
    pub fn to_setup(&self) -> SetupConfig {
        let mut setup = SetupConfig::default();
        setup.set_mafia_count(self.mafias_count);
        setup.set_citizen_count(self.citizens_count);
        for (slot, role) in setup.mafia_roles.iter_mut().zip(&self.mafia_roles) {
            slot.clone_from(role);
        }
        for (slot, role) in setup.citizen_roles.iter_mut().zip(&self.citizen_roles) {
            slot.clone_from(role);
        }
        setup
    }

    pub fn matches_counts(&self, mafia_count: usize, citizen_count: usize) -> bool {
        self.mafias_count == mafia_count && self.citizens_count == citizen_count
    }
}
