//! 错误类型
//!
//! 三类失败对应流水线的三个外部边界：
//! - 配置缺失/非法（不发送任何通知）
//! - 拉取 workflow run / jobs 失败（不发送任何通知）
//! - Webhook 投递失败（payload 已构建完毕，只报告失败）

use thiserror::Error;

/// 配置错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必填项为空或缺失
    #[error("Input required and not supplied: {0}")]
    Missing(&'static str),
    /// 值无法解析
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// GitHub API 拉取错误
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub API request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GitHub API returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("Failed to decode GitHub API response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Webhook 投递错误
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Webhook request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Webhook rejected payload with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 流水线顶层错误
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Failed to fetch workflow data: {0}")]
    Fetch(#[from] FetchError),
    #[error("Failed to deliver Slack notification: {0}")]
    Delivery(#[from] DeliveryError),
}
