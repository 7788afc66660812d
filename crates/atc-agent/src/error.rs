use atc_core::{AgentId, Direction, GridPos};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    /// The heading was read before anything assigned it.
    #[error("aircraft {0} has no heading; assign one before the first move")]
    HeadingUnset(AgentId),

    #[error("aircraft {0} at {1} cannot move {2}: the next cell is off the grid")]
    OffGrid(AgentId, GridPos, Direction),
}

pub type AgentResult<T> = Result<T, AgentError>;
