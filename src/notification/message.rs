//! 消息组装 - 状态行 / PR 行 / 详情行 / 提交信息
//!
//! ```text
//! Success: octocat's `push` on `<https://github.com/o/r/tree/main|*main*>`
//! Workflow: CI <https://github.com/o/r/actions/runs/9|#14> completed in `1m 30s`
//! Commit: Fix flaky test
//! ```

use super::duration::format_duration;
use super::fields::build_job_fields;
use super::outcome::Outcome;
use super::payload::{
    slack_bold_link, slack_escape, slack_link, PayloadBuilder, PayloadOverrides, SlackPayload,
};
use crate::config::{IncludeJobs, RunIdentity};
use crate::github::{JobRecord, WorkflowRun};

/// 影响消息内容的开关
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub include_jobs: IncludeJobs,
    pub display_only_failed: bool,
    pub include_commit_message: bool,
    pub overrides: PayloadOverrides,
}

/// 分支链接 `<repo/tree/branch|*branch*>`
pub fn branch_link(run: &WorkflowRun, branch: &str) -> String {
    slack_bold_link(
        &format!("{}/tree/{}", run.repository.html_url, branch),
        branch,
    )
}

/// 仓库链接，用作 footer
pub fn repository_link(run: &WorkflowRun) -> String {
    slack_bold_link(&run.repository.html_url, &run.repository.full_name)
}

/// 本仓库 PR 列表，逗号分隔；没有时为空串
pub fn pull_request_summary(run: &WorkflowRun) -> String {
    run.internal_pull_requests()
        .map(|pr| {
            format!(
                "{} from `{}` to `{}`",
                slack_link(
                    &format!("{}/pull/{}", run.repository.html_url, pr.number),
                    &format!("#{}", pr.number)
                ),
                slack_escape(&pr.head.branch),
                slack_escape(&pr.base.branch)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// 状态行；存在本仓库 PR 时整行替换为 PR 版本
pub fn status_line(outcome: Outcome, identity: &RunIdentity, run: &WorkflowRun) -> String {
    let pull_requests = pull_request_summary(run);
    if !pull_requests.is_empty() {
        return format!(
            "{} {}'s `pull_request` {}",
            outcome.label(),
            identity.actor,
            pull_requests
        );
    }

    format!(
        "{} {}'s `{}` on `{}`",
        outcome.label(),
        identity.actor,
        identity.event,
        branch_link(run, &identity.branch)
    )
}

pub fn details_line(identity: &RunIdentity, run: &WorkflowRun) -> String {
    format!(
        "Workflow: {} {} completed in `{}`",
        slack_escape(&identity.workflow),
        slack_link(&run.html_url, &format!("#{}", run.run_number)),
        format_duration(run.created_at, run.updated_at)
    )
}

pub fn commit_line(run: &WorkflowRun) -> String {
    let message = run
        .head_commit
        .as_ref()
        .map(|c| c.message.as_str())
        .unwrap_or_default();
    format!("Commit: {}", slack_escape(message))
}

/// attachment 正文
pub fn compose_text(
    outcome: Outcome,
    identity: &RunIdentity,
    run: &WorkflowRun,
    include_commit_message: bool,
) -> String {
    let mut lines = vec![status_line(outcome, identity, run), details_line(identity, run)];
    if include_commit_message {
        lines.push(commit_line(run));
    }
    lines.join("\n")
}

/// 从 run + jobs + 配置构建完整 payload（纯函数）
pub fn build_payload(
    run: &WorkflowRun,
    jobs: &[JobRecord],
    identity: &RunIdentity,
    options: &MessageOptions,
) -> SlackPayload {
    let outcome = Outcome::from_jobs(jobs);
    let fields = build_job_fields(
        jobs,
        outcome,
        options.include_jobs,
        options.display_only_failed,
    );

    PayloadBuilder::new(
        outcome.color(),
        compose_text(outcome, identity, run, options.include_commit_message),
        repository_link(run),
    )
    .fields(fields)
    .overrides(&options.overrides)
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{
        HeadCommit, PullRequestBase, PullRequestHead, PullRequestRef, RepoRef, Repository,
    };
    use chrono::{Duration, TimeZone, Utc};

    const API_REPO: &str = "https://api.github.com/repos/octo/app";

    fn identity() -> RunIdentity {
        RunIdentity {
            workflow: "CI".to_string(),
            actor: "octocat".to_string(),
            event: "push".to_string(),
            branch: "main".to_string(),
        }
    }

    fn run() -> WorkflowRun {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        WorkflowRun {
            html_url: "https://github.com/octo/app/actions/runs/99".to_string(),
            run_number: 14,
            created_at: created,
            updated_at: created + Duration::seconds(90),
            repository: Repository {
                full_name: "octo/app".to_string(),
                html_url: "https://github.com/octo/app".to_string(),
                url: API_REPO.to_string(),
            },
            head_branch: Some("main".to_string()),
            head_commit: Some(HeadCommit {
                message: "Bump deps".to_string(),
            }),
            pull_requests: Vec::new(),
        }
    }

    fn pr(number: u64, head: &str, base: &str, repo_url: &str) -> PullRequestRef {
        PullRequestRef {
            number,
            head: PullRequestHead {
                branch: head.to_string(),
            },
            base: PullRequestBase {
                branch: base.to_string(),
                repo: RepoRef {
                    url: repo_url.to_string(),
                },
            },
        }
    }

    #[test]
    fn test_status_line_default() {
        assert_eq!(
            status_line(Outcome::Success, &identity(), &run()),
            "Success: octocat's `push` on `<https://github.com/octo/app/tree/main|*main*>`"
        );
    }

    #[test]
    fn test_status_line_uses_ref_branch_for_fork_pull_request() {
        // fork 的 PR：没有本仓库 PR，head_branch 是 fork 上的分支
        let mut run = run();
        run.head_branch = Some("patch".to_string());
        run.pull_requests = vec![pr(7, "patch", "main", "https://api.github.com/repos/fork/app")];
        let identity = RunIdentity {
            event: "pull_request".to_string(),
            branch: "merge".to_string(),
            ..identity()
        };

        let line = status_line(Outcome::Success, &identity, &run);
        assert_eq!(
            line,
            "Success: octocat's `pull_request` on `<https://github.com/octo/app/tree/merge|*merge*>`"
        );
        assert!(!line.contains("patch"));
    }

    #[test]
    fn test_pull_request_overrides_status_line() {
        let mut run = run();
        run.pull_requests = vec![
            pr(42, "feature", "main", API_REPO),
            pr(7, "evil", "main", "https://api.github.com/repos/fork/app"),
        ];

        let line = status_line(Outcome::Failed, &identity(), &run);
        assert_eq!(
            line,
            "Failed: octocat's `pull_request` <https://github.com/octo/app/pull/42|#42> from `feature` to `main`"
        );
        assert!(!line.contains("#7"));
        assert!(!line.contains("`push`"));
    }

    #[test]
    fn test_multiple_pull_requests_joined() {
        let mut run = run();
        run.pull_requests = vec![
            pr(1, "a", "main", API_REPO),
            pr(2, "b", "dev", API_REPO),
        ];
        assert_eq!(
            pull_request_summary(&run),
            "<https://github.com/octo/app/pull/1|#1> from `a` to `main`, \
             <https://github.com/octo/app/pull/2|#2> from `b` to `dev`"
        );
    }

    #[test]
    fn test_only_external_pull_requests_keep_default_line() {
        let mut run = run();
        run.pull_requests = vec![pr(7, "evil", "main", "https://api.github.com/repos/fork/app")];
        assert!(status_line(Outcome::Success, &identity(), &run).contains("`push` on"));
    }

    #[test]
    fn test_details_line() {
        assert_eq!(
            details_line(&identity(), &run()),
            "Workflow: CI <https://github.com/octo/app/actions/runs/99|#14> completed in `1m 30s`"
        );
    }

    #[test]
    fn test_commit_line_only_when_enabled() {
        let without = compose_text(Outcome::Success, &identity(), &run(), false);
        assert_eq!(without.lines().count(), 2);
        assert!(!without.contains("Commit:"));

        let with = compose_text(Outcome::Success, &identity(), &run(), true);
        assert_eq!(with.lines().last(), Some("Commit: Bump deps"));
    }

    #[test]
    fn test_commit_message_and_branch_are_escaped() {
        let mut run = run();
        run.head_commit = Some(HeadCommit {
            message: "Handle a < b & <https://x|y>".to_string(),
        });
        assert_eq!(
            commit_line(&run),
            "Commit: Handle a &lt; b &amp; &lt;https://x|y&gt;"
        );

        let identity = RunIdentity {
            branch: "fix<1>".to_string(),
            ..identity()
        };
        assert!(status_line(Outcome::Success, &identity, &run).contains("|*fix&lt;1&gt;*>"));
    }

    #[test]
    fn test_footer_is_repository_link() {
        let payload = build_payload(&run(), &[], &identity(), &MessageOptions::default());
        let attachment = payload.attachment().unwrap();
        assert_eq!(attachment.footer, "<https://github.com/octo/app|*octo/app*>");
        assert!(attachment.text.starts_with("Success:"));
    }
}
