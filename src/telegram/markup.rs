use serde_json::{Map, Value};

use crate::node::NodeParameters;
use crate::telegram::error::{Result, TelegramError};
use crate::telegram::models::keyboard::{
    ForceReplyOptions, MarkupKeyboard, MarkupMode, ReplyKeyboardOptions,
    ReplyKeyboardRemoveOptions,
};
use crate::telegram::models::markup::{
    ForceReplyMarkup, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemoveMarkup, ReplyMarkup,
};

/// Скалярные поля кнопок, которые принимает Bot API
const BUTTON_FIELDS: &[&str] = &[
    "url",
    "callback_data",
    "switch_inline_query",
    "switch_inline_query_current_chat",
    "pay",
    "request_contact",
    "request_location",
];

/// Переносит additionalFields и reply_markup из параметров ноды в тело запроса.
/// При режиме none ключ reply_markup не добавляется.
pub fn add_additional_fields(
    params: &NodeParameters,
    index: usize,
    body: &mut Map<String, Value>,
) -> Result<()> {
    let additional_fields: Map<String, Value> = params.get_or_default("additionalFields", index)?;
    for (key, value) in additional_fields {
        body.insert(key, value);
    }

    let mode: MarkupMode = params.get("replyMarkup", index)?;

    let markup = match mode {
        MarkupMode::None => return Ok(()),
        MarkupMode::InlineKeyboard => {
            let keyboard: MarkupKeyboard = params.get_or_default("inlineKeyboard", index)?;
            ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup {
                inline_keyboard: build_button_rows(&keyboard)?,
            })
        }
        MarkupMode::ReplyKeyboard => {
            let keyboard: MarkupKeyboard = params.get_or_default("replyKeyboard", index)?;
            let options: ReplyKeyboardOptions =
                params.get_or_default("replyKeyboardOptions", index)?;
            ReplyMarkup::ReplyKeyboard(ReplyKeyboardMarkup {
                keyboard: build_button_rows(&keyboard)?,
                one_time_keyboard: options.one_time_keyboard,
                resize_keyboard: options.resize_keyboard,
                selective: options.selective,
            })
        }
        MarkupMode::ForceReply => {
            let options: ForceReplyOptions = params.get_or_default("forceReply", index)?;
            ReplyMarkup::ForceReply(ForceReplyMarkup {
                force_reply: options.force_reply,
                selective: options.selective,
            })
        }
        MarkupMode::ReplyKeyboardRemove => {
            let options: ReplyKeyboardRemoveOptions =
                params.get_or_default("replyKeyboardRemove", index)?;
            ReplyMarkup::ReplyKeyboardRemove(ReplyKeyboardRemoveMarkup {
                remove_keyboard: true,
                selective: options.selective,
            })
        }
    };

    body.insert("reply_markup".to_string(), serde_json::to_value(markup)?);
    Ok(())
}

/// Сборка рядов кнопок; ряды без кнопок отбрасываются, порядок сохраняется
fn build_button_rows(keyboard: &MarkupKeyboard) -> Result<Vec<Vec<KeyboardButton>>> {
    let mut rows = Vec::with_capacity(keyboard.rows.len());

    for row in &keyboard.rows {
        if row.buttons.is_empty() {
            continue;
        }

        let mut buttons = Vec::with_capacity(row.buttons.len());
        for button in &row.buttons {
            for field in button.additional_fields.keys() {
                if !BUTTON_FIELDS.contains(&field.as_str()) {
                    return Err(TelegramError::UnknownButtonField(field.clone()));
                }
            }

            buttons.push(KeyboardButton {
                text: button.text.clone(),
                extra: button.additional_fields.clone(),
            });
        }

        rows.push(buttons);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_params(item: Value) -> NodeParameters {
        NodeParameters::single(item.as_object().cloned().unwrap())
    }

    #[test]
    fn merges_additional_fields_without_markup() {
        let params = sample_params(json!({
            "additionalFields": { "disable_notification": true, "text": "replaced" },
            "replyMarkup": "none"
        }));
        let mut body = Map::new();
        body.insert("text".to_string(), json!("original"));

        add_additional_fields(&params, 0, &mut body).unwrap();

        assert_eq!(body.get("disable_notification"), Some(&json!(true)));
        assert_eq!(body.get("text"), Some(&json!("replaced")));
        assert!(!body.contains_key("reply_markup"));
    }

    #[test]
    fn inline_keyboard_keeps_row_and_button_order() {
        let params = sample_params(json!({
            "replyMarkup": "inlineKeyboard",
            "inlineKeyboard": { "rows": [
                { "buttons": [ { "text": "A" } ] },
                { "buttons": [ { "text": "B" }, { "text": "C" } ] }
            ]}
        }));
        let mut body = Map::new();

        add_additional_fields(&params, 0, &mut body).unwrap();

        assert_eq!(
            body["reply_markup"],
            json!({ "inline_keyboard": [[{ "text": "A" }], [{ "text": "B" }, { "text": "C" }]] })
        );
    }

    #[test]
    fn rows_without_buttons_are_dropped() {
        let params = sample_params(json!({
            "replyMarkup": "inlineKeyboard",
            "inlineKeyboard": { "rows": [
                {},
                { "buttons": [] },
                { "buttons": [ { "text": "A" } ] }
            ]}
        }));
        let mut body = Map::new();

        add_additional_fields(&params, 0, &mut body).unwrap();

        assert_eq!(
            body["reply_markup"],
            json!({ "inline_keyboard": [[{ "text": "A" }]] })
        );
    }

    #[test]
    fn button_additional_fields_merge_into_button() {
        let params = sample_params(json!({
            "replyMarkup": "inlineKeyboard",
            "inlineKeyboard": { "rows": [
                { "buttons": [ {
                    "text": "Открыть",
                    "additionalFields": { "url": "https://example.com", "pay": false }
                } ] }
            ]}
        }));
        let mut body = Map::new();

        add_additional_fields(&params, 0, &mut body).unwrap();

        assert_eq!(
            body["reply_markup"],
            json!({ "inline_keyboard": [[{
                "text": "Открыть",
                "url": "https://example.com",
                "pay": false
            }]] })
        );
    }

    #[test]
    fn unknown_button_field_is_rejected() {
        let params = sample_params(json!({
            "replyMarkup": "inlineKeyboard",
            "inlineKeyboard": { "rows": [
                { "buttons": [ {
                    "text": "A",
                    "additionalFields": { "web_app": "nope" }
                } ] }
            ]}
        }));
        let mut body = Map::new();

        let error = add_additional_fields(&params, 0, &mut body).unwrap_err();
        assert!(matches!(error, TelegramError::UnknownButtonField(field) if field == "web_app"));
    }

    #[test]
    fn reply_keyboard_options_apply_without_rows() {
        let params = sample_params(json!({
            "replyMarkup": "replyKeyboard",
            "replyKeyboard": { "rows": [] },
            "replyKeyboardOptions": { "one_time_keyboard": true }
        }));
        let mut body = Map::new();

        add_additional_fields(&params, 0, &mut body).unwrap();

        assert_eq!(
            body["reply_markup"],
            json!({ "keyboard": [], "one_time_keyboard": true })
        );
    }

    #[test]
    fn force_reply_options_pass_verbatim() {
        let params = sample_params(json!({
            "replyMarkup": "forceReply",
            "forceReply": { "force_reply": true, "selective": true }
        }));
        let mut body = Map::new();

        add_additional_fields(&params, 0, &mut body).unwrap();

        assert_eq!(
            body["reply_markup"],
            json!({ "force_reply": true, "selective": true })
        );
    }

    #[test]
    fn keyboard_remove_emits_wire_field() {
        let params = sample_params(json!({
            "replyMarkup": "replyKeyboardRemove",
            "replyKeyboardRemove": { "selective": true }
        }));
        let mut body = Map::new();

        add_additional_fields(&params, 0, &mut body).unwrap();

        assert_eq!(
            body["reply_markup"],
            json!({ "remove_keyboard": true, "selective": true })
        );
    }
}
