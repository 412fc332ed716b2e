//! Slack Workflow Status CLI
//!
//! 作为 workflow 的最后一个 job 运行，读取本次 run 的全部 jobs 并发送汇总消息。

use anyhow::Result;
use clap::Parser;
use secrecy::ExposeSecret;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use slack_workflow_status::{
    actions, notify_run, ActionInputs, Config, DryRunChannel, GithubClient, GithubClientConfig,
    SlackWebhookChannel, SlackWebhookConfig,
};

#[derive(Parser)]
#[command(name = "slack-workflow-status")]
#[command(about = "Post a Slack summary of the current GitHub Actions workflow run")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    inputs: ActionInputs,

    /// 只打印 payload，不发送
    #[arg(long)]
    dry_run: bool,

    /// HTTP 超时（秒）
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("slack_workflow_status=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e.to_string();
            let message = if message.is_empty() {
                "Unhandled error".to_string()
            } else {
                message
            };
            error!(error = %message, "Workflow notification failed");
            actions::set_failed(&message);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_inputs(cli.inputs)?;
    actions::mask_secrets([
        config.webhook_url.expose_secret(),
        config.repo_token.expose_secret(),
    ]);

    info!(
        run_id = config.run_id,
        repository = %config.repository,
        event = %config.identity.event,
        "Collecting workflow status"
    );

    let options = config.message_options();
    let Config {
        webhook_url,
        repo_token,
        identity,
        run_id,
        repository,
        api_url,
        ..
    } = config;

    let source = GithubClient::new(GithubClientConfig {
        api_url,
        repository,
        token: repo_token,
        timeout_secs: cli.timeout,
    })?;

    let report = if cli.dry_run {
        notify_run(&source, &DryRunChannel, run_id, &identity, &options).await?
    } else {
        let channel = SlackWebhookChannel::new(SlackWebhookConfig {
            webhook_url,
            timeout_secs: cli.timeout,
        })?;
        notify_run(&source, &channel, run_id, &identity, &options).await?
    };

    info!(outcome = %report.outcome, result = ?report.send_result, "Done");
    Ok(())
}
