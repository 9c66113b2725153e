use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CleanError {
    #[error("clean_text steps must be a custom function or one of {valid:?}; got '{step}'")]
    InvalidStep {
        step: String,
        valid: Vec<&'static str>,
    },
    #[error("could not parse input as markup: {reason}")]
    Parse { reason: String },
}

impl CleanError {
    pub fn invalid_step(step: &str) -> Self {
        CleanError::InvalidStep {
            step: step.to_string(),
            valid: crate::cleaners::registry::names(),
        }
    }
}
