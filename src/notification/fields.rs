//! Job 字段构建 - 每个 job 一行 `✓ <link|name> (1m 2s)`

use super::duration::format_duration;
use super::outcome::Outcome;
use super::payload::{slack_link, Field};
use crate::config::IncludeJobs;
use crate::github::{Conclusion, JobRecord};

/// Job 状态图标
pub mod icon {
    /// ✓ 成功
    pub const SUCCESS: &str = "\u{2713}";
    /// 取消或跳过
    pub const CANCELLED: &str = "\u{20e0}";
    /// ✗ 失败及其他结论
    pub const FAILURE: &str = "\u{2717}";
}

pub fn status_icon(conclusion: Conclusion) -> &'static str {
    match conclusion {
        Conclusion::Success => icon::SUCCESS,
        Conclusion::Cancelled | Conclusion::Skipped => icon::CANCELLED,
        Conclusion::Failure | Conclusion::Other => icon::FAILURE,
    }
}

/// 按 include_jobs / display_only_failed 策略生成字段，保持输入顺序
pub fn build_job_fields(
    jobs: &[JobRecord],
    outcome: Outcome,
    include_jobs: IncludeJobs,
    display_only_failed: bool,
) -> Vec<Field> {
    match include_jobs {
        IncludeJobs::Never => return Vec::new(),
        IncludeJobs::OnFailure if outcome != Outcome::Failed => return Vec::new(),
        _ => {}
    }

    jobs.iter()
        .filter_map(|job| job.completed_conclusion().map(|c| (job, c)))
        .filter(|(_, conclusion)| {
            !display_only_failed
                || matches!(conclusion, Conclusion::Failure | Conclusion::Cancelled)
        })
        .map(|(job, conclusion)| job_field(job, conclusion))
        .collect()
}

fn job_field(job: &JobRecord, conclusion: Conclusion) -> Field {
    let end = job.completed_at.unwrap_or(job.started_at);
    Field::short(format!(
        "{} {} ({})",
        status_icon(conclusion),
        slack_link(&job.html_url, &job.name),
        format_duration(job.started_at, end)
    ))
}
