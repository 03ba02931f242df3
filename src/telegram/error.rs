use reqwest::{Error as ReqwestError, StatusCode};
use std::result::Result as StdResult;
use thiserror::Error;

use crate::node::NodeError;

pub type Result<T> = StdResult<T, TelegramError>;

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("No credentials got returned!")]
    MissingCredentials,

    #[error("The Telegram credentials are not valid!")]
    InvalidCredentials,

    #[error("Telegram error response [{error_code}]: {description}")]
    Api { error_code: i64, description: String },

    #[error("unsupported keyboard button field \"{0}\"")]
    UnknownButtonField(String),

    #[error("Telegram request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("NodeError: {0:?}")]
    Node(#[from] NodeError),

    #[error("ReqwestError: {0:?}")]
    Reqwest(#[from] ReqwestError),

    #[error("SerdeJsonError: {0:?}")]
    SerdeJson(#[from] serde_json::Error),
}
