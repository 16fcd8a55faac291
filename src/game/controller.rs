use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::engine::session::{
    Card, CardId, Dealer, Phase, SessionEngine, SessionEvent, SessionState, SetupConfig, Side,
};
use crate::i18n::{Language, Localizer};
use crate::scenario::{Scenario, ScenarioBook, ScenarioError};
use crate::storage::{KvStore, LANGUAGE_KEY};

const LOG_TARGET: &str = "mafia_night::game";

/// Notification pushed to listeners after every mutation. The rendering
/// layer is just one listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateChange {
    Session(SessionEvent),
    SetupChanged,
    ScenariosChanged,
    LanguageChanged { code: &'static str },
}

pub type Listener = Box<dyn Fn(&StateChange) + Send>;

/// Read-only view of the controller's current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub setup: SetupConfig,
    pub deck: Vec<Card>,
    pub active_card: Option<CardId>,
    pub remaining: usize,
}

/// Owns the setup, the session and the scenario list, and talks to the
/// store and the localizer on their behalf. One instance per app run; all
/// persisted state is restored here, before any user operation.
pub struct GameController {
    store: Arc<dyn KvStore>,
    localizer: Localizer,
    scenarios: ScenarioBook,
    setup: SetupConfig,
    session: SessionState,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl GameController {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Deterministic variant for tests.
    pub fn with_rng(store: Arc<dyn KvStore>, rng: StdRng) -> Self {
        let language = store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        let scenarios = ScenarioBook::load(Arc::clone(&store));
        debug!(
            target: LOG_TARGET,
            language = language.code(),
            scenarios = scenarios.all().len(),
            "restored persisted state"
        );
        Self {
            store,
            localizer: Localizer::new(language),
            scenarios,
            setup: SetupConfig::default(),
            session: SessionState::default(),
            rng,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&StateChange) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, change: StateChange) {
        for listener in &self.listeners {
            listener(&change);
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.session.phase,
            setup: self.setup.clone(),
            deck: self.session.deck.clone(),
            active_card: self.session.active_card,
            remaining: self.session.remaining(),
        }
    }

    // --- language ---

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn language(&self) -> Language {
        self.localizer.language()
    }

    /// Switch the UI language and persist the preference.
    pub fn set_language(&mut self, language: Language) {
        self.localizer.set_language(language);
        if let Err(err) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!(target: LOG_TARGET, %err, "failed to persist language preference");
        }
        self.notify(StateChange::LanguageChanged {
            code: language.code(),
        });
    }

    // --- setup ---

    pub fn setup(&self) -> &SetupConfig {
        &self.setup
    }

    pub fn set_mafia_count(&mut self, count: usize) {
        self.setup.set_mafia_count(count);
        self.notify(StateChange::SetupChanged);
    }

    pub fn set_citizen_count(&mut self, count: usize) {
        self.setup.set_citizen_count(count);
        self.notify(StateChange::SetupChanged);
    }

    pub fn edit_role_name(&mut self, side: Side, index: usize, text: impl Into<String>) {
        self.setup.edit_role_name(side, index, text);
        self.notify(StateChange::SetupChanged);
    }

    pub fn reset_setup(&mut self) {
        self.setup.reset();
        self.notify(StateChange::SetupChanged);
    }

    // --- session ---

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn deal_new_game(&mut self) {
        let defaults = self.localizer.role_defaults();
        if let Some(event) =
            Dealer::deal_new_game(&mut self.session, &self.setup, &defaults, &mut self.rng)
        {
            debug!(target: LOG_TARGET, total = self.session.deck.len(), "dealt a new deck");
            self.notify(StateChange::Session(event));
        }
    }

    pub fn reveal(&mut self, id: CardId) {
        if let Some(event) = Dealer::reveal(&mut self.session, id) {
            self.notify(StateChange::Session(event));
        }
    }

    pub fn acknowledge(&mut self, id: CardId) {
        if let Some(event) = Dealer::acknowledge(&mut self.session, id) {
            self.notify(StateChange::Session(event));
        }
    }

    pub fn remaining(&self) -> usize {
        self.session.remaining()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn restart(&mut self) {
        let event = Dealer::restart(&mut self.session, &mut self.setup);
        self.notify(StateChange::Session(event));
    }

    // --- scenarios ---

    pub fn scenarios(&self) -> &[Scenario] {
        self.scenarios.all()
    }

    pub fn save_scenario(&mut self, name: &str) -> Result<Scenario, ScenarioError> {
        let saved = self.scenarios.save(name, &self.setup)?;
        self.notify(StateChange::ScenariosChanged);
        Ok(saved)
    }

    /// Copy a saved preset into the live setup. Valid during the setup
    /// phase only; a no-op while a deck is out.
    pub fn load_scenario(&mut self, id: &str) {
        if self.session.phase != Phase::Setup {
            return;
        }
        let Some(scenario) = self.scenarios.find(id) else {
            return;
        };
        self.setup = scenario.to_setup();
        self.notify(StateChange::SetupChanged);
    }

    pub fn rename_scenario(&mut self, id: &str, new_name: &str) {
        if self.scenarios.rename(id, new_name) {
            self.notify(StateChange::ScenariosChanged);
        }
    }

    pub fn delete_scenario(&mut self, id: &str) {
        if self.scenarios.delete(id) {
            self.notify(StateChange::ScenariosChanged);
        }
    }

    /// Saved presets whose counts exactly match the current setup.
    pub fn suggested_scenarios(&self) -> Vec<&Scenario> {
        self.scenarios
            .suggested(self.setup.mafia_count, self.setup.citizen_count)
    }
}
