//! 具体渠道实现

pub mod dry_run;
pub mod slack;

pub use dry_run::DryRunChannel;
pub use slack::{SlackWebhookChannel, SlackWebhookConfig};
