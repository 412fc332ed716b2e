//! 通知渠道 trait 定义

use super::payload::SlackPayload;
use crate::error::DeliveryError;

/// 发送结果
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// 发送成功
    Sent,
    /// 跳过（例如 dry-run）
    Skipped(String),
}

/// 通知渠道 trait
#[allow(async_fn_in_trait)]
pub trait NotificationChannel {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 发送一次，不重试
    async fn send(&self, payload: &SlackPayload) -> Result<SendResult, DeliveryError>;
}
