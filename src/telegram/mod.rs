pub mod client;
pub mod error;
pub mod markup;
pub mod models;

pub use client::Client;
pub use error::TelegramError;
pub use markup::add_additional_fields;
