mod config;
mod error;
mod node;
mod telegram;

use error::Result;
use node::{CredentialStore, NodeParameters, TELEGRAM_API, TelegramApiCredentials};
use reqwest::Method;
use serde_json::{Map, json};

use crate::config::Config;

const LOGO: &str = r#"
 ___________        _________                                     __
 \__    ___/ ____   \_   ___ \  ____   ____   ____   ____   _____/  |_
   |    |   / ___\  /    \  \/ /  _ \ /    \ /    \_/ __ \_/ ___\   __\
   |    |  / /_/  > \     \___(  <_> )   |  \   |  \  ___/\  \___|  |
   |____|  \___  /   \______  /\____/|___|  /___|  /\___  >\___  >__|
          /_____/           \/            \/     \/     \/     \/
"#;

/// Инициализация конфигурации
fn startup() -> Result<&'static Config> {
    // Если конфигурация не инициализирована — инициализируем
    if config::init_if_not()? {
        let full_config_path = std::env::current_dir()?.join(config::CONFIG_PATH);
        println!(
            "Файл конфигурации инициализирован по пути: {:?}",
            full_config_path
        );
        let _ = open::that_in_background(&full_config_path);
        println!("Заполните конфигурацию и перезапустите программу");
        std::process::exit(0);
    }

    let cfg = config::get();

    // Предупреждение о некорректной настройке
    if cfg.telegram_api.access_token.is_empty() {
        println!("Предупреждение: не указан токен телеграм-бота");
    }

    Ok(cfg)
}

/// Сборка параметров ноды из конфигурации: каждая кнопка — отдельный ряд
fn build_parameters(cfg: &Config) -> NodeParameters {
    let rows = cfg
        .message
        .buttons
        .iter()
        .map(|b| {
            json!({
                "buttons": [{
                    "text": b.text,
                    "additionalFields": { "url": b.url }
                }]
            })
        })
        .collect::<Vec<_>>();

    let mut additional_fields = Map::new();
    if let Some(mode) = &cfg.message.parse_mode {
        additional_fields.insert("parse_mode".to_string(), json!(mode));
    }

    let keyboard = json!({ "rows": rows });
    let item = json!({
        "additionalFields": additional_fields,
        "replyMarkup": cfg.message.reply_markup,
        "inlineKeyboard": keyboard.clone(),
        "replyKeyboard": keyboard,
        "replyKeyboardOptions": {},
        "forceReply": {},
        "replyKeyboardRemove": {},
    });

    NodeParameters::single(item.as_object().cloned().unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("\x1b[94m{}\x1b[0m", LOGO);
    let cfg = startup()?;

    if cfg.launch_options.verbose {
        tracing_subscriber::fmt::init();
    }

    let mut credentials = CredentialStore::new();
    if !cfg.telegram_api.access_token.is_empty() {
        credentials.insert(
            TELEGRAM_API,
            TelegramApiCredentials {
                access_token: cfg.telegram_api.access_token.clone(),
            },
        );
    }

    let client = telegram::Client::new(credentials);
    let params = build_parameters(cfg);

    let mut body = Map::new();
    body.insert("chat_id".to_string(), json!(cfg.message.chat_id));
    body.insert("text".to_string(), json!(cfg.message.text));
    telegram::add_additional_fields(&params, 0, &mut body)?;

    let response = client
        .api_request(Method::POST, "sendMessage", &body, None)
        .await?;

    println!("Сообщение отправлено в чат {}", cfg.message.chat_id);
    if cfg.launch_options.verbose {
        println!("{response:#}");
    }

    Ok(())
}
