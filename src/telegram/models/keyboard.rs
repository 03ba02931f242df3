use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Вид клавиатуры, выбранный в параметрах ноды
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkupMode {
    None,
    InlineKeyboard,
    ReplyKeyboard,
    ForceReply,
    ReplyKeyboardRemove,
}

/// Скалярное значение дополнительного поля кнопки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// Клавиатура из параметров ноды: ряды кнопок в порядке объявления
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct MarkupKeyboard {
    pub rows: Vec<KeyboardRow>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct KeyboardRow {
    pub buttons: Vec<RowButton>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RowButton {
    pub text: String,

    #[serde(default, rename = "additionalFields")]
    pub additional_fields: BTreeMap<String, ScalarValue>,
}

/// Параметры режима forceReply, передаются в reply_markup как есть
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ForceReplyOptions {
    pub force_reply: Option<bool>,
    pub selective: Option<bool>,
}

/// Параметры режима replyKeyboard
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ReplyKeyboardOptions {
    pub one_time_keyboard: Option<bool>,
    pub resize_keyboard: Option<bool>,
    pub selective: Option<bool>,
}

/// Параметры режима replyKeyboardRemove
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ReplyKeyboardRemoveOptions {
    pub selective: Option<bool>,
}
