use std::result::Result as StdResult;
use thiserror::Error;

pub type Result<T> = StdResult<T, NodeError>;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("item {0} does not exist")]
    MissingItem(usize),

    #[error("parameter \"{0}\" is not defined")]
    MissingParameter(String),

    #[error("SerdeJsonError: {0:?}")]
    Parse(#[from] serde_json::Error),
}
