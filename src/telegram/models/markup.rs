use serde::Serialize;
use std::collections::BTreeMap;

use super::keyboard::ScalarValue;

/// https://core.telegram.org/bots/api/#inlinekeyboardbutton
/// https://core.telegram.org/bots/api/#keyboardbutton
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardButton {
    pub text: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, ScalarValue>,
}

/// https://core.telegram.org/bots/api/#inlinekeyboardmarkup
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<KeyboardButton>>,
}

/// https://core.telegram.org/bots/api/#replykeyboardmarkup
#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// https://core.telegram.org/bots/api/#forcereply
#[derive(Debug, Clone, Serialize)]
pub struct ForceReplyMarkup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_reply: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// https://core.telegram.org/bots/api/#replykeyboardremove
#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardRemoveMarkup {
    pub remove_keyboard: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    ForceReply(ForceReplyMarkup),
    ReplyKeyboardRemove(ReplyKeyboardRemoveMarkup),
}
