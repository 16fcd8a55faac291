pub mod engine;
pub mod game;
pub mod i18n;
pub mod scenario;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

pub use game::{GameController, GameSnapshot, StateChange};
