use atc_agent::AgentError;
use atc_core::{AgentId, AtcError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] AtcError),

    #[error("no aircraft supplied to the simulation builder")]
    MissingAircraft,

    #[error("both aircraft use id {0}")]
    DuplicateId(AgentId),

    #[error("aircraft error: {0}")]
    Agent(#[from] AgentError),

    #[error("scenario file error: {0}")]
    Scenario(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
