use thiserror::Error;
use ts_core::{AgentId, TsError};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("agent {agent}: expected trip rate {rate} must be greater than 1")]
    DegenerateTripRate { agent: AgentId, rate: f64 },

    #[error("agent {agent}: shift start {start}h is before midnight or not finite")]
    ShiftStart { agent: AgentId, start: f64 },

    #[error("agent {agent}: invalid {what} distribution: {reason}")]
    Distribution {
        agent:  AgentId,
        what:   &'static str,
        reason: String,
    },

    #[error("invalid shift categories: {0}")]
    ShiftCategories(String),

    #[error(transparent)]
    Core(#[from] TsError),
}

pub type ProcessResult<T> = Result<T, ProcessError>;
