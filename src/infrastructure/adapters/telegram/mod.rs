//! Telegram adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::OutboundMessage;
use crate::domain::traits::MessageSender;
use crate::application::errors::{ConfigError, DispatchError};
use crate::infrastructure::config::TelegramConfig;

/// Acknowledgement envelope returned by every Bot API method
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram Bot API client for outbound messages
pub struct TelegramAdapter {
    token: String,
    api_base: String,
    client: Client,
}

impl TelegramAdapter {
    pub fn new(config: &TelegramConfig) -> Result<Self, ConfigError> {
        let token = config
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField("telegram.token".to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::InvalidValue(format!("HTTP client: {}", e)))?;

        Ok(Self {
            token,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// First eight characters of the token, safe to put in logs
    pub fn token_hint(&self) -> &str {
        match self.token.char_indices().nth(8) {
            Some((end, _)) => &self.token[..end],
            None => &self.token,
        }
    }

    fn check_ack(body: &str) -> Result<(), DispatchError> {
        let ack: ApiResponse = serde_json::from_str(body)
            .map_err(|e| DispatchError::InvalidResponse(format!("{}: {}", e, body)))?;

        if !ack.ok {
            return Err(DispatchError::Rejected {
                description: ack.description.unwrap_or_else(|| "no description".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MessageSender for TelegramAdapter {
    async fn send_message(&self, message: &OutboundMessage) -> Result<String, DispatchError> {
        tracing::debug!("Sending to {}: {}", message.chat_id, message.text);

        let fields = message.form_fields()?;
        let response = self.client
            .post(self.api_url("sendMessage"))
            .form(&fields)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DispatchError::Timeout
                } else {
                    DispatchError::Network(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Keyboard sends care whether Telegram accepted the markup
        if message.has_keyboard() {
            Self::check_ack(&body)?;
        }

        Ok(body)
    }
}
