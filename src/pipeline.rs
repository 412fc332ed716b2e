//! 一次完整运行：拉取 -> 分类 -> 组装 -> 发送

use tracing::{debug, info};

use crate::config::RunIdentity;
use crate::error::NotifyError;
use crate::github::WorkflowSource;
use crate::notification::{build_payload, MessageOptions, NotificationChannel, Outcome, SendResult};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub job_fields: usize,
    pub send_result: SendResult,
}

/// 拉取 run 和 jobs、构建 payload 并发送
///
/// 两次拉取互不依赖，并发进行；任一失败则不发送。
pub async fn notify_run<S, C>(
    source: &S,
    channel: &C,
    run_id: u64,
    identity: &RunIdentity,
    options: &MessageOptions,
) -> Result<RunReport, NotifyError>
where
    S: WorkflowSource,
    C: NotificationChannel,
{
    let (run, jobs) = tokio::try_join!(
        source.get_workflow_run(run_id),
        source.list_jobs_for_run(run_id)
    )?;
    info!(run_id, run_number = run.run_number, jobs = jobs.len(), "Fetched workflow run");
    for job in &jobs {
        match job.completed_conclusion() {
            Some(conclusion) => debug!(job = %job.name, %conclusion, "Job completed"),
            None => debug!(job = %job.name, status = ?job.status, "Job not completed, ignored"),
        }
    }

    let outcome = Outcome::from_jobs(&jobs);
    let payload = build_payload(&run, &jobs, identity, options);
    let job_fields = payload.attachment().map(|a| a.fields.len()).unwrap_or_default();
    info!(%outcome, job_fields, channel = channel.name(), "Sending workflow notification");

    let send_result = channel.send(&payload).await?;

    Ok(RunReport {
        outcome,
        job_fields,
        send_result,
    })
}
