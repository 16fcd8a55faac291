#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ScenarioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
