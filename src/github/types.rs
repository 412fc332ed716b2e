//! GitHub Actions REST API 数据模型
//!
//! 只保留通知需要的字段，其余字段由 serde 忽略。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job 执行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
    /// waiting / requested / pending 等
    #[serde(other)]
    Other,
}

/// Job 结论（仅 completed 时有值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Success,
    Failure,
    Cancelled,
    Skipped,
    /// neutral / timed_out / action_required / stale
    #[serde(other)]
    Other,
}

impl Conclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conclusion::Success => "success",
            Conclusion::Failure => "failure",
            Conclusion::Cancelled => "cancelled",
            Conclusion::Skipped => "skipped",
            Conclusion::Other => "other",
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    pub status: JobStatus,
    pub conclusion: Option<Conclusion>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub html_url: String,
}

impl JobRecord {
    /// 已完成且有结论的 job 才参与分类
    pub fn completed_conclusion(&self) -> Option<Conclusion> {
        match self.status {
            JobStatus::Completed => self.conclusion,
            _ => None,
        }
    }
}

/// `GET /repos/{owner}/{repo}/actions/runs/{run_id}/jobs` 的响应
#[derive(Debug, Clone, Deserialize)]
pub struct JobsPage {
    pub total_count: usize,
    pub jobs: Vec<JobRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub html_url: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadCommit {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestHead {
    #[serde(rename = "ref")]
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRef {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestBase {
    #[serde(rename = "ref")]
    pub branch: String,
    pub repo: RepoRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub number: u64,
    pub head: PullRequestHead,
    pub base: PullRequestBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub html_url: String,
    pub run_number: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub repository: Repository,
    pub head_branch: Option<String>,
    pub head_commit: Option<HeadCommit>,
    #[serde(default)]
    pub pull_requests: Vec<PullRequestRef>,
}

impl WorkflowRun {
    /// 目标仓库属于本仓库的 PR（fork 发起的外部 PR 被排除）
    pub fn internal_pull_requests(&self) -> impl Iterator<Item = &PullRequestRef> {
        self.pull_requests
            .iter()
            .filter(move |pr| pr.base.repo.url == self.repository.url)
    }
}
