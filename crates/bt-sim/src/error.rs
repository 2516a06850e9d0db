use bt_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid scenario: {0}")]
    Scenario(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
