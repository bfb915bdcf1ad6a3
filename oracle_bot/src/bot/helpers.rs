use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use oracle_core::{formatter::dto::Embed, router::dto::BotMessage};
use regex::Regex;
use teloxide::{types::Message, utils::html};

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^_(.+)_$").expect("italic pattern"));

pub fn to_bot_message(msg: &Message) -> Option<BotMessage> {
    let text = msg.text()?;
    let user = msg
        .from
        .as_ref()
        .map(|u| u.id.0.to_string())
        .unwrap_or_else(|| msg.chat.id.0.to_string());

    Some(BotMessage::new(text, user, msg.date.timestamp()))
}

/// True for `/cmd@name ...` where `name` is not `bot_username`.
pub fn addressed_to_other_bot(text: &str, bot_username: &str) -> bool {
    let Some(command) = text.split_whitespace().next().filter(|t| t.starts_with('/')) else {
        return false;
    };

    match command.split_once('@') {
        Some((_, target)) => !target.eq_ignore_ascii_case(bot_username),
        None => false,
    }
}

/// Escapes the reply and turns its `**bold**` spans and `_italic_` lines into Telegram HTML.
pub fn reply_to_html(text: &str) -> String {
    let escaped = html::escape(text);
    let bolded = BOLD.replace_all(&escaped, "<b>$1</b>");

    ITALIC_LINE.replace_all(&bolded, "<i>$1</i>").into_owned()
}

pub fn render_embed_html(embed: &Embed) -> String {
    let mut lines = vec![
        html::bold(&html::escape(&embed.title)),
        html::escape(&embed.description),
        String::new(),
    ];

    for field in &embed.fields {
        lines.push(format!(
            "{}: {}",
            html::escape(&field.name),
            html::code_inline(&field.value)
        ));
    }

    let updated = DateTime::parse_from_rfc3339(&embed.timestamp)
        .map(|ts| ts.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| embed.timestamp.clone());

    lines.push(String::new());
    lines.push(html::italic(&format!("Updated {}", html::escape(&updated))));

    lines.join("\n")
}
