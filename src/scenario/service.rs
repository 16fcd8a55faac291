use std::sync::Arc;

use tracing::warn;

use crate::engine::session::SetupConfig;
use crate::storage::{KvStore, SCENARIOS_KEY};

use super::error::ScenarioError;
use super::types::Scenario;
use super::validation::validate_scenario_name;

const LOG_TARGET: &str = "mafia_night::scenario";

/// The live scenario list, single source of truth. Every mutation mirrors
/// the full list back to the store, fire-and-forget.
pub struct ScenarioBook {
    store: Arc<dyn KvStore>,
    scenarios: Vec<Scenario>,
}

impl ScenarioBook {
    /// Read the persisted list once. Absent or malformed payloads read as
    /// an empty list, never an error.
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let scenarios = match store.get(SCENARIOS_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Scenario>>(&raw) {
                Ok(list) => list,
                Err(err) => {
                    warn!(target: LOG_TARGET, %err, "discarding malformed scenario list");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { store, scenarios }
    }

    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn find(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Append a snapshot of `setup` under `name`. An empty trimmed name
    /// fails and mutates nothing.
    pub fn save(&mut self, name: &str, setup: &SetupConfig) -> Result<Scenario, ScenarioError> {
        let trimmed = validate_scenario_name(name)?;
        let scenario = Scenario::from_setup(trimmed, setup);
        self.scenarios.push(scenario.clone());
        self.persist();
        Ok(scenario)
    }

    /// Replace the name of the matching scenario. Blank names and unknown
    /// ids are defensively ignored. Returns whether anything changed.
    pub fn rename(&mut self, id: &str, new_name: &str) -> bool {
        let Ok(trimmed) = validate_scenario_name(new_name) else {
            return false;
        };
        let trimmed = trimmed.to_string();
        let Some(scenario) = self.scenarios.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        scenario.name = trimmed;
        self.persist();
        true
    }

    /// Remove the matching scenario. Returns whether anything changed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        if self.scenarios.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Scenarios whose stored counts exactly equal the given counts, in
    /// stored order.
    pub fn suggested(&self, mafia_count: usize, citizen_count: usize) -> Vec<&Scenario> {
        self.scenarios
            .iter()
            .filter(|s| s.matches_counts(mafia_count, citizen_count))
            .collect()
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.scenarios) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(target: LOG_TARGET, %err, "failed to serialize scenario list");
                return;
            }
        };
        if let Err(err) = self.store.set(SCENARIOS_KEY, &payload) {
            warn!(target: LOG_TARGET, %err, "failed to persist scenario list");
        }
    }
}
