use thiserror::Error;
use ts_core::TsError;
use ts_process::ProcessError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] TsError),

    #[error("identity source ran dry after {supplied} of {expected} taxis")]
    IdentitiesExhausted {
        expected: usize,
        supplied: usize,
    },

    #[error("agent process error: {0}")]
    Process(#[from] ProcessError),
}

pub type SimResult<T> = Result<T, SimError>;
