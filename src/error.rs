use crate::node::NodeError;
use crate::telegram::TelegramError;
use std::io::Error as StdIoError;
use std::result::Result as StdResult;
use thiserror::Error as ThisError;
use toml::de::Error as TomlDeError;

pub type Result<T> = StdResult<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("StdIoError: {0:?}")]
    StdIo(#[from] StdIoError),

    #[error("NodeError: {0:?}")]
    Node(#[from] NodeError),

    #[error("TelegramError: {0:?}")]
    Telegram(#[from] TelegramError),

    #[error("TomlDeError: {0:?}")]
    TomlDe(#[from] TomlDeError),
}
