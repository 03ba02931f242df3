use reqwest::{Client as HttpClient, Method, StatusCode};
use serde_json::{Map, Value};
use tracing::debug;

use crate::node::{CredentialStore, TELEGRAM_API};
use crate::telegram::error::{Result, TelegramError};
use crate::telegram::models::response::ApiErrorResponse;

const BASE_URL: &str = "https://api.telegram.org";

/// Клиент Bot API с подстановкой токена из хранилища учётных данных
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    credentials: CredentialStore,
}

impl Client {
    pub fn new(credentials: CredentialStore) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: BASE_URL.to_string(),
            credentials,
        }
    }

    /// Клиент с подменённым базовым URL (для тестов)
    #[allow(dead_code)]
    pub fn with_base_url(credentials: CredentialStore, base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Запрос к методу Bot API. Учётные данные запрашиваются на каждый вызов
    pub async fn api_request(
        &self,
        method: Method,
        endpoint: &str,
        body: &Map<String, Value>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<Value> {
        let credentials = self
            .credentials
            .get(TELEGRAM_API)
            .ok_or(TelegramError::MissingCredentials)?;

        let url = format!(
            "{}/bot{}/{}",
            self.base_url, credentials.access_token, endpoint
        );
        debug!("запрос к методу {endpoint}");

        let mut request = self.http.request(method, &url).json(body);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(TelegramError::InvalidCredentials);
        }

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(&raw) {
                return Err(TelegramError::Api {
                    error_code: error.error_code,
                    description: error.description,
                });
            }
            return Err(TelegramError::Http { status, body: raw });
        }

        Ok(response.json::<Value>().await?)
    }
}
