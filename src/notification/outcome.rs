//! Workflow 整体结论分类
//!
//! 规则（按优先级）：
//! - 所有 job 均为 success / skipped -> Success
//! - 存在 cancelled -> Cancelled
//! - 其余 -> Failed
//!
//! 空集合视为 Success。

use serde::Serialize;

use crate::github::{Conclusion, JobRecord};

/// Slack attachment 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Good,
    Warning,
    Danger,
}

/// Workflow 整体结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Success,
    Cancelled,
    Failed,
}

impl Outcome {
    /// 对已完成 job 的结论做归约
    pub fn classify<I>(conclusions: I) -> Self
    where
        I: IntoIterator<Item = Conclusion>,
    {
        conclusions
            .into_iter()
            .fold(Outcome::Success, |acc, conclusion| {
                match (acc, conclusion) {
                    (Outcome::Failed, _) => Outcome::Failed,
                    (_, Conclusion::Success | Conclusion::Skipped) => acc,
                    (Outcome::Success, Conclusion::Cancelled) => Outcome::Cancelled,
                    (Outcome::Cancelled, Conclusion::Cancelled) => Outcome::Cancelled,
                    (_, Conclusion::Failure | Conclusion::Other) => Outcome::Failed,
                }
            })
    }

    /// 只考虑 completed 且有结论的 job
    pub fn from_jobs(jobs: &[JobRecord]) -> Self {
        Self::classify(jobs.iter().filter_map(JobRecord::completed_conclusion))
    }

    pub fn color(&self) -> Color {
        match self {
            Outcome::Success => Color::Good,
            Outcome::Cancelled => Color::Warning,
            Outcome::Failed => Color::Danger,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success:",
            Outcome::Cancelled => "Cancelled:",
            Outcome::Failed => "Failed:",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().trim_end_matches(':'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Conclusion::*;

    #[test]
    fn test_all_success_or_skipped_is_success() {
        assert_eq!(Outcome::classify([Success, Skipped, Success]), Outcome::Success);
    }

    #[test]
    fn test_empty_set_is_success() {
        assert_eq!(Outcome::classify([]), Outcome::Success);
        assert_eq!(Outcome::from_jobs(&[]), Outcome::Success);
    }

    #[test]
    fn test_cancelled_without_failure_is_cancelled() {
        assert_eq!(Outcome::classify([Success, Cancelled, Skipped]), Outcome::Cancelled);
    }

    #[test]
    fn test_failure_takes_precedence_over_cancelled() {
        // 顺序无关
        assert_eq!(Outcome::classify([Cancelled, Failure]), Outcome::Failed);
        assert_eq!(Outcome::classify([Failure, Cancelled]), Outcome::Failed);
    }

    #[test]
    fn test_unknown_conclusion_is_failed() {
        assert_eq!(Outcome::classify([Success, Other]), Outcome::Failed);
    }

    #[test]
    fn test_color_and_label() {
        assert_eq!(Outcome::Success.color(), Color::Good);
        assert_eq!(Outcome::Cancelled.color(), Color::Warning);
        assert_eq!(Outcome::Failed.color(), Color::Danger);
        assert_eq!(Outcome::Failed.label(), "Failed:");
        assert_eq!(Outcome::Cancelled.to_string(), "Cancelled");
        assert_eq!(serde_json::to_string(&Color::Danger).unwrap(), "\"danger\"");
    }
}
