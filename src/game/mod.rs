//! Session controller wiring the engine to storage, scenarios and i18n

pub mod controller;

pub use controller::{GameController, GameSnapshot, StateChange};
