use crate::types::Cell;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Weight '{name}' must be in [0, 1], got {value}")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("Lookahead depth must be at least 1")]
    ZeroLookahead,

    #[error("Wall must be at least 2x1, got {height}x{width}")]
    BadDimensions { height: usize, width: usize },

    #[error("Start state ({row}, {col}, E={energy}) is not on the wall or has negative energy")]
    StartOffWall { row: usize, col: usize, energy: f64 },

    #[error("Action {from:?} -> {to:?} is not a valid move")]
    InvalidAction { from: Cell, to: Cell },

    #[error("Step limit {limit} exceeded: policy is cycling without terminating")]
    StepLimitExceeded { limit: u64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
