pub mod credentials;
pub mod error;
pub mod params;

pub use credentials::{CredentialStore, TELEGRAM_API, TelegramApiCredentials};
pub use error::NodeError;
pub use params::NodeParameters;
