//! Test data helpers for creating test objects
//!
//! Messages are built from Bot API JSON so they go through the same
//! deserialization as real updates.

use std::collections::HashMap;

use serde_json::json;
use teloxide::types::Message;

use dualis_bot::Settings;

pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

pub fn test_owner_id() -> i64 {
    99
}

pub fn test_log_chat_id() -> i64 {
    -100555
}

/// Settings with logging enabled and the test owner configured
pub fn test_settings() -> Settings {
    settings_from(&[
        ("BOT_TOKEN", &test_bot_token()),
        ("LOG_CHAT_ID", &test_log_chat_id().to_string()),
        ("OWNER_ID", &test_owner_id().to_string()),
    ])
}

/// Settings from explicit environment variables
pub fn settings_from(pairs: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_env_map(vars).expect("test settings load")
}

/// Create a private-chat command message from a user
pub fn create_command_message(
    user_id: i64,
    text: &str,
    first_name: &str,
    username: Option<&str>,
) -> Message {
    let command_len = text.split_whitespace().next().map(str::len).unwrap_or(0);
    let message = json!({
        "message_id": 1,
        "date": 1700000000,
        "chat": {
            "id": user_id,
            "type": "private",
            "first_name": first_name,
            "username": username
        },
        "from": {
            "id": user_id,
            "is_bot": false,
            "first_name": first_name,
            "username": username
        },
        "text": text,
        "entities": [
            { "type": "bot_command", "offset": 0, "length": command_len }
        ]
    });

    serde_json::from_value(message).expect("test message deserializes")
}
