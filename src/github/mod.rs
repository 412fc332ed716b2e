//! GitHub Actions 数据源

pub mod client;
pub mod types;

pub use client::{GithubClient, GithubClientConfig, DEFAULT_API_URL};
pub use types::{
    Conclusion, HeadCommit, JobRecord, JobStatus, PullRequestBase, PullRequestHead,
    PullRequestRef, RepoRef, Repository, WorkflowRun,
};

use crate::error::FetchError;

/// Workflow run 与 jobs 的提供方
#[allow(async_fn_in_trait)]
pub trait WorkflowSource {
    async fn get_workflow_run(&self, run_id: u64) -> Result<WorkflowRun, FetchError>;

    /// 按 API 返回顺序列出 run 的全部 jobs
    async fn list_jobs_for_run(&self, run_id: u64) -> Result<Vec<JobRecord>, FetchError>;
}
