use serde::Deserialize;

/// Тело ответа Bot API при ошибке
/// https://core.telegram.org/bots/api/#making-requests
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error_code: i64,

    #[serde(default)]
    pub description: String,
}
