//! 输入收集
//!
//! Action 输入由 runner 以 `INPUT_<NAME>` 环境变量传入，运行身份来自
//! `GITHUB_*` 变量。每一项也可以用命令行参数覆盖，便于本地调试。
//! 空字符串一律视为未设置。

use clap::Args;
use secrecy::SecretString;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::github::DEFAULT_API_URL;
use crate::notification::{MessageOptions, PayloadOverrides};

/// 是否在消息中列出 job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncludeJobs {
    /// `true`
    #[default]
    Always,
    /// `false`
    Never,
    /// `on-failure`：只有整体结论为 Failed 时列出
    OnFailure,
}

impl FromStr for IncludeJobs {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(IncludeJobs::Always),
            "false" => Ok(IncludeJobs::Never),
            "on-failure" => Ok(IncludeJobs::OnFailure),
            _ => Err(ConfigError::Invalid {
                name: "include_jobs",
                value: s.to_string(),
                reason: "expected true, false or on-failure",
            }),
        }
    }
}

/// 运行身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunIdentity {
    /// workflow 名称
    pub workflow: String,
    pub actor: String,
    /// 触发事件 (push / pull_request / ...)
    pub event: String,
    /// 从 GITHUB_REF 推导
    pub branch: String,
}

/// 原始输入（clap + 环境变量）
#[derive(Args, Debug, Clone, Default)]
pub struct ActionInputs {
    /// Slack incoming webhook URL
    #[arg(long, env = "INPUT_SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub slack_webhook_url: Option<String>,
    /// Token used to read the workflow run and its jobs
    #[arg(long, env = "INPUT_REPO_TOKEN", hide_env_values = true)]
    pub repo_token: Option<String>,
    /// true, false or on-failure
    #[arg(long, env = "INPUT_INCLUDE_JOBS")]
    pub include_jobs: Option<String>,
    /// Only list failed or cancelled jobs
    #[arg(long, env = "INPUT_DISPLAY_ONLY_FAILED")]
    pub display_only_failed: Option<String>,
    /// Append the head commit message
    #[arg(long, env = "INPUT_INCLUDE_COMMIT_MESSAGE")]
    pub include_commit_message: Option<String>,
    /// Channel override
    #[arg(long, env = "INPUT_CHANNEL")]
    pub channel: Option<String>,
    /// Bot username override
    #[arg(long, env = "INPUT_NAME")]
    pub name: Option<String>,
    /// Bot icon URL override
    #[arg(long, env = "INPUT_ICON_URL")]
    pub icon_url: Option<String>,
    /// Bot emoji override, e.g. :rocket:
    #[arg(long, env = "INPUT_ICON_EMOJI")]
    pub icon_emoji: Option<String>,
    /// Top-level message text
    #[arg(long, env = "INPUT_TEXT")]
    pub text: Option<String>,
    /// Let Slack unfurl links in the message
    #[arg(long, env = "INPUT_UNFURL_LINKS")]
    pub unfurl_links: Option<String>,

    #[arg(long, env = "GITHUB_WORKFLOW")]
    pub workflow: Option<String>,
    #[arg(long, env = "GITHUB_RUN_ID")]
    pub run_id: Option<String>,
    #[arg(long, env = "GITHUB_ACTOR")]
    pub actor: Option<String>,
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event: Option<String>,
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: Option<String>,
    /// owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
}

/// 校验后的配置
#[derive(Debug)]
pub struct Config {
    pub webhook_url: SecretString,
    pub repo_token: SecretString,
    pub include_jobs: IncludeJobs,
    pub display_only_failed: bool,
    pub include_commit_message: bool,
    pub overrides: PayloadOverrides,
    pub identity: RunIdentity,
    pub run_id: u64,
    pub repository: String,
    pub api_url: String,
}

impl Config {
    pub fn from_inputs(inputs: ActionInputs) -> Result<Self, ConfigError> {
        let webhook_url = required("slack_webhook_url", inputs.slack_webhook_url)?;
        let repo_token = required("repo_token", inputs.repo_token)?;
        let include_jobs = required("include_jobs", inputs.include_jobs)?.parse::<IncludeJobs>()?;
        let display_only_failed = parse_bool(
            "display_only_failed",
            &required("display_only_failed", inputs.display_only_failed)?,
        )?;
        let include_commit_message = parse_bool(
            "include_commit_message",
            &required("include_commit_message", inputs.include_commit_message)?,
        )?;
        let unfurl_links = optional(inputs.unfurl_links)
            .map(|v| parse_bool("unfurl_links", &v))
            .transpose()?;

        let run_id_raw = required("GITHUB_RUN_ID", inputs.run_id)?;
        let run_id = run_id_raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
            name: "GITHUB_RUN_ID",
            value: run_id_raw.clone(),
            reason: "expected a numeric run id",
        })?;

        let repository = required("GITHUB_REPOSITORY", inputs.repository)?;
        if !is_owner_repo(&repository) {
            return Err(ConfigError::Invalid {
                name: "GITHUB_REPOSITORY",
                value: repository,
                reason: "expected owner/repo",
            });
        }

        let git_ref = required("GITHUB_REF", inputs.git_ref)?;
        let identity = RunIdentity {
            workflow: required("GITHUB_WORKFLOW", inputs.workflow)?,
            actor: required("GITHUB_ACTOR", inputs.actor)?,
            event: required("GITHUB_EVENT_NAME", inputs.event)?,
            branch: branch_from_ref(&git_ref),
        };

        Ok(Self {
            webhook_url: SecretString::from(webhook_url),
            repo_token: SecretString::from(repo_token),
            include_jobs,
            display_only_failed,
            include_commit_message,
            overrides: PayloadOverrides {
                channel: optional(inputs.channel),
                username: optional(inputs.name),
                icon_emoji: optional(inputs.icon_emoji),
                icon_url: optional(inputs.icon_url),
                text: optional(inputs.text),
                unfurl_links,
            },
            identity,
            run_id,
            repository,
            api_url: optional(inputs.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    pub fn message_options(&self) -> MessageOptions {
        MessageOptions {
            include_jobs: self.include_jobs,
            display_only_failed: self.display_only_failed,
            include_commit_message: self.include_commit_message,
            overrides: self.overrides.clone(),
        }
    }
}

/// `refs/heads/feature/x` -> `feature/x`，其他 ref 取最后一段
pub fn branch_from_ref(git_ref: &str) -> String {
    ["refs/heads/", "refs/tags/"]
        .iter()
        .find_map(|prefix| git_ref.strip_prefix(*prefix))
        .unwrap_or_else(|| git_ref.rsplit('/').next().unwrap_or(git_ref))
        .to_string()
}

/// 去掉首尾空白，空串视为未设置
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    optional(value).ok_or(ConfigError::Missing(name))
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
            reason: "expected true or false",
        }),
    }
}

fn is_owner_repo(value: &str) -> bool {
    matches!(value.split_once('/'), Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
}
