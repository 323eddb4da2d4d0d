use lc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A resize or build was refused; the previous field (if any) stays active.
    #[error("refused field update: {0}")]
    Geometry(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
