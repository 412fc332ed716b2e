//! GitHub REST API 客户端
//!
//! 只实现两个只读接口：
//! - `GET /repos/{owner}/{repo}/actions/runs/{run_id}`
//! - `GET /repos/{owner}/{repo}/actions/runs/{run_id}/jobs`（分页）

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{JobRecord, JobsPage, WorkflowRun};
use super::WorkflowSource;
use crate::error::FetchError;

/// 公共 GitHub 的 API 地址（GHES 通过 GITHUB_API_URL 覆盖）
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const JOBS_PER_PAGE: usize = 100;

/// GitHub 客户端配置
#[derive(Debug)]
pub struct GithubClientConfig {
    /// API 根地址
    pub api_url: String,
    /// `owner/repo`
    pub repository: String,
    /// repo_token
    pub token: SecretString,
    /// 超时时间 (秒)
    pub timeout_secs: u64,
}

/// GitHub Actions 客户端
#[derive(Debug)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    repository: String,
    token: SecretString,
}

impl GithubClient {
    pub fn new(config: GithubClientConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Request {
                url: config.api_url.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repository: config.repository,
            token: config.token,
        })
    }

    fn run_url(&self, run_id: u64) -> String {
        format!(
            "{}/repos/{}/actions/runs/{}",
            self.api_url, self.repository, run_id
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url = %url, "GitHub API request");

        let response = self
            .client
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

impl WorkflowSource for GithubClient {
    async fn get_workflow_run(&self, run_id: u64) -> Result<WorkflowRun, FetchError> {
        self.get_json(&self.run_url(run_id)).await
    }

    async fn list_jobs_for_run(&self, run_id: u64) -> Result<Vec<JobRecord>, FetchError> {
        let mut jobs = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}/jobs?per_page={}&page={}",
                self.run_url(run_id),
                JOBS_PER_PAGE,
                page
            );
            let JobsPage { total_count, jobs: batch } = self.get_json::<JobsPage>(&url).await?;
            let fetched = batch.len();
            jobs.extend(batch);

            if fetched == 0 || jobs.len() >= total_count {
                break;
            }
            page += 1;
        }

        debug!(run_id, count = jobs.len(), "Fetched workflow jobs");
        Ok(jobs)
    }
}
