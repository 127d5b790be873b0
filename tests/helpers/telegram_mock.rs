//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::test_bot_token;

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    /// Only answer requests addressed to this chat
    pub chat_id: Option<i64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            chat_id: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failing_for(chat_id: i64) -> Self {
        Self { success: false, chat_id: Some(chat_id) }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Create a bot that talks to this server
    pub fn create_bot(&self) -> teloxide::Bot {
        let url = self.server.uri().parse().expect("mock server uri is a valid url");
        teloxide::Bot::new(test_bot_token()).set_api_url(url)
    }

    /// Bot API path for a method; teloxide sends method names in PascalCase
    fn method_path(name: &str) -> String {
        format!("/bot{}/{}", test_bot_token(), name)
    }

    /// Setup mock for SendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let chat_id = config.chat_id.unwrap_or(42);
        let response = if config.success {
            ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "DualisBot",
                        "username": "dualis_bot"
                    },
                    "chat": {
                        "id": chat_id,
                        "type": "private",
                        "first_name": "Test"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            }))
        } else {
            ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            }))
        };

        let mut mock = Mock::given(method("POST")).and(path(Self::method_path("SendMessage")));
        if let Some(chat_id) = config.chat_id {
            mock = mock.and(body_partial_json(json!({ "chat_id": chat_id })));
        }

        // Chat-specific mocks take precedence over the catch-all one
        let priority = if config.chat_id.is_some() { 1 } else { 5 };
        mock.respond_with(response)
            .with_priority(priority)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for SetWebhook endpoint
    pub async fn mock_set_webhook(&self) {
        Mock::given(method("POST"))
            .and(path(Self::method_path("SetWebhook")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": true,
                "description": "Webhook was set"
            })))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of all SendMessage calls, in arrival order
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.requests_to("SendMessage")
            .await
            .into_iter()
            .map(|body| serde_json::from_slice(&body).expect("SendMessage body is json"))
            .collect()
    }

    /// Number of calls made to a Bot API method
    pub async fn calls_to(&self, name: &str) -> usize {
        self.requests_to(name).await.len()
    }

    async fn requests_to(&self, name: &str) -> Vec<Vec<u8>> {
        let expected = Self::method_path(name);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|req| req.url.path() == expected)
            .map(|req| req.body)
            .collect()
    }
}
