use serde::{Deserialize, Serialize};

use super::types::Side;

/// Setup parameters for the next deal. Each role list is kept exactly as
/// long as its count: growing appends blank slots, shrinking drops entries
/// from the tail, surviving entries keep their order and text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub mafia_count: usize,
    pub citizen_count: usize,
    pub mafia_roles: Vec<String>,
    pub citizen_roles: Vec<String>,
}

impl SetupConfig {
    pub fn total(&self) -> usize {
        self.mafia_count + self.citizen_count
    }

    pub fn set_mafia_count(&mut self, count: usize) {
        self.mafia_count = count;
        resize_roles(&mut self.mafia_roles, count);
    }

    pub fn set_citizen_count(&mut self, count: usize) {
        self.citizen_count = count;
        resize_roles(&mut self.citizen_roles, count);
    }

    /// Replace the role text at `index` verbatim; blank is allowed and
    /// resolves to the side default at deal time. An out-of-bounds index is
    /// unreachable through the public surface.
    pub fn edit_role_name(&mut self, side: Side, index: usize, text: impl Into<String>) {
        let roles = self.roles_mut(side);
        debug_assert!(index < roles.len(), "role edit out of bounds");
        if let Some(slot) = roles.get_mut(index) {
            *slot = text.into();
        }
    }

    pub fn roles(&self, side: Side) -> &[String] {
        match side {
            Side::Mafia => &self.mafia_roles,
            Side::Citizen => &self.citizen_roles,
        }
    }

    fn roles_mut(&mut self, side: Side) -> &mut Vec<String> {
        match side {
            Side::Mafia => &mut self.mafia_roles,
            Side::Citizen => &mut self.citizen_roles,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn resize_roles(roles: &mut Vec<String>, count: usize) {
    if roles.len() < count {
        roles.resize(count, String::new());
    } else {
        roles.truncate(count);
    }
}
