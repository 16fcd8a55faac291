#[derive(Debug, PartialEq, Eq)]
pub enum StateError {
    InvariantViolation(&'static str),
}

pub trait InvariantCheck {
    fn validate_invariants(&self) -> Result<(), StateError>;
}
