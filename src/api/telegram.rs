//! Telegram Bot API wire types (the subset the webhook needs)

use crate::format::Reply;
use serde::{Deserialize, Serialize};

/// Header Telegram sends when the webhook was set with a `secret_token`
pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Incoming update. Only `message` is handled; other update kinds
/// (edited messages, callbacks, ...) are acknowledged and ignored.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<User>,
    /// Absent for stickers, photos and other non-text messages
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
}

/// `sendMessage` call returned directly as the webhook response body
#[derive(Debug, Serialize)]
pub struct SendMessage {
    pub method: &'static str,
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: &'static str,
    pub reply_markup: ReplyMarkup,
}

impl SendMessage {
    pub fn new(chat_id: i64, reply: Reply) -> Self {
        let reply_markup = if reply.options.is_empty() {
            ReplyMarkup::Remove(ReplyKeyboardRemove {
                remove_keyboard: true,
            })
        } else {
            ReplyMarkup::Keyboard(ReplyKeyboardMarkup {
                keyboard: reply
                    .options
                    .into_iter()
                    .map(|row| row.into_iter().map(|text| KeyboardButton { text }).collect())
                    .collect(),
                resize_keyboard: true,
                one_time_keyboard: true,
            })
        };
        Self {
            method: "sendMessage",
            chat_id,
            text: reply.text,
            parse_mode: "HTML",
            reply_markup,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
}

#[derive(Debug, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: bool,
    pub one_time_keyboard: bool,
}

#[derive(Debug, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
}
