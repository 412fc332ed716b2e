//! 通知构建与投递
//!
//! - `outcome`：job 结论 -> workflow 整体结论
//! - `duration`：起止时间 -> `1m 30s`
//! - `fields`：每个 job 的展示行
//! - `message`：状态行 / 详情行 / 提交行，组装最终 payload
//! - `channel` / `channels`：发送

pub mod channel;
pub mod channels;
pub mod duration;
pub mod fields;
pub mod message;
pub mod outcome;
pub mod payload;

pub use channel::{NotificationChannel, SendResult};
pub use channels::{DryRunChannel, SlackWebhookChannel, SlackWebhookConfig};
pub use duration::{format_duration, format_seconds};
pub use fields::{build_job_fields, status_icon};
pub use message::{build_payload, compose_text, MessageOptions};
pub use outcome::{Color, Outcome};
pub use payload::{Attachment, Field, PayloadBuilder, PayloadOverrides, SlackPayload, FOOTER_ICON};
