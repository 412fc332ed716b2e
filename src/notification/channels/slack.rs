//! Slack Incoming Webhook 渠道

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{error, info};

use crate::error::DeliveryError;
use crate::notification::channel::{NotificationChannel, SendResult};
use crate::notification::payload::SlackPayload;

/// Slack webhook 配置
#[derive(Debug)]
pub struct SlackWebhookConfig {
    /// Incoming webhook URL（机密）
    pub webhook_url: SecretString,
    /// 超时时间 (秒)
    pub timeout_secs: u64,
}

/// Slack webhook 渠道
#[derive(Debug)]
pub struct SlackWebhookChannel {
    client: Client,
    webhook_url: SecretString,
}

impl SlackWebhookChannel {
    pub fn new(config: SlackWebhookConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(DeliveryError::Client)?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url,
        })
    }
}

impl NotificationChannel for SlackWebhookChannel {
    fn name(&self) -> &str {
        "slack"
    }

    async fn send(&self, payload: &SlackPayload) -> Result<SendResult, DeliveryError> {
        let response = self
            .client
            .post(self.webhook_url.expose_secret())
            .json(payload)
            .send()
            .await
            // reqwest 错误信息里带完整 URL，去掉以免泄露 webhook
            .map_err(|e| DeliveryError::Request(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            info!(channel = "slack", status = status.as_u16(), "Slack notification sent");
            return Ok(SendResult::Sent);
        }

        let body = response.text().await.unwrap_or_default();
        error!(channel = "slack", status = status.as_u16(), body = %body, "Slack rejected notification");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
