use serde::{Deserialize, Serialize};
use std::{fs, sync::OnceLock};

use crate::error::Result;
use crate::telegram::models::keyboard::MarkupMode;

pub const CONFIG_PATH: &str = "Config.toml";

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init_if_not() -> Result<bool> {
    if fs::metadata(CONFIG_PATH).is_ok() {
        return Ok(false);
    }
    fs::write(CONFIG_PATH, DEFAULT_CONFIG_STR.as_bytes())?;
    Ok(true)
}

pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| {
        let buf = fs::read_to_string(CONFIG_PATH).expect("Ошибка чтения конфигурации");
        toml::from_str::<Config>(&buf).expect("Формат конфигурации не распознан")
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub launch_options: LaunchOptions,
    pub telegram_api: TelegramApi,
    pub message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOptions {
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramApi {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: Option<String>,
    pub reply_markup: MarkupMode,

    #[serde(default)]
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub url: String,
}

const DEFAULT_CONFIG_STR: &str = r##"
# Параметры запуска
[launch_options]
verbose = true # Вывод ответа Bot API в консоль (true/false)

# Учётные данные Telegram Bot API
[telegram_api]
access_token = "" # Токен бота из @BotFather

# Отправляемое сообщение
[message]
chat_id = "" # ID чата или @username канала
text = "Привет из TgConnect!" # Текст сообщения
parse_mode = "HTML" # Режим разметки текста (HTML/MarkdownV2)
reply_markup = "inlineKeyboard" # Вид клавиатуры (none/inlineKeyboard/replyKeyboard/forceReply/replyKeyboardRemove)

# Кнопки клавиатуры: каждая кнопка — отдельный ряд
[[message.buttons]]
text = "Открыть" # Надпись на кнопке
url = "https://example.com" # Ссылка кнопки
"##;
