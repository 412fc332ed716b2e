//! Dry-run 渠道：只打印 payload，不发送

use std::io::Write;

use tracing::info;

use crate::error::DeliveryError;
use crate::notification::channel::{NotificationChannel, SendResult};
use crate::notification::payload::SlackPayload;

/// 把 payload 以 JSON 写到 stdout
pub struct DryRunChannel;

impl DryRunChannel {
    pub fn render(payload: &SlackPayload) -> Result<String, DeliveryError> {
        Ok(serde_json::to_string_pretty(payload)?)
    }
}

impl NotificationChannel for DryRunChannel {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn send(&self, payload: &SlackPayload) -> Result<SendResult, DeliveryError> {
        let rendered = Self::render(payload)?;
        let mut stdout = std::io::stdout().lock();
        // stdout 关闭时没有其他地方可报告，忽略
        let _ = writeln!(stdout, "{}", rendered);

        info!(channel = "dry-run", "Payload printed, not sent");
        Ok(SendResult::Skipped("dry-run".to_string()))
    }
}
