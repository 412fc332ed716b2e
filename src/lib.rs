//! Slack Workflow Status - 把 GitHub Actions workflow 的运行结果发送到 Slack

pub mod actions;
pub mod config;
pub mod error;
pub mod github;
pub mod notification;
pub mod pipeline;

pub use config::{ActionInputs, Config, IncludeJobs, RunIdentity};
pub use error::{ConfigError, DeliveryError, FetchError, NotifyError};
pub use github::{GithubClient, GithubClientConfig, JobRecord, WorkflowRun, WorkflowSource};
pub use notification::{
    build_payload, DryRunChannel, MessageOptions, NotificationChannel, Outcome, SendResult,
    SlackPayload, SlackWebhookChannel, SlackWebhookConfig,
};
pub use pipeline::{notify_run, RunReport};
