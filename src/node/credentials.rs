use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Тип учётных данных Telegram в хранилище хоста
pub const TELEGRAM_API: &str = "telegramApi";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramApiCredentials {
    pub access_token: String,
}

/// Хранилище учётных данных, заполняется хостом
#[derive(Debug, Default, Clone)]
pub struct CredentialStore {
    entries: HashMap<String, TelegramApiCredentials>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: impl Into<String>, credentials: TelegramApiCredentials) {
        self.entries.insert(kind.into(), credentials);
    }

    pub fn get(&self, kind: &str) -> Option<&TelegramApiCredentials> {
        self.entries.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_credential_type() {
        let mut store = CredentialStore::new();
        store.insert(
            TELEGRAM_API,
            TelegramApiCredentials {
                access_token: "123:ABC".to_string(),
            },
        );

        assert_eq!(store.get(TELEGRAM_API).unwrap().access_token, "123:ABC");
        assert!(store.get("slackApi").is_none());
    }
}
