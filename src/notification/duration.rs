//! 时长格式化
//!
//! `1d 2h 5m 9s` 形式；天/小时/分钟为 0 时省略，秒始终输出。

use chrono::{DateTime, Utc};

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// 将起止时间转换为紧凑的时长字符串
///
/// 结束早于开始时按 0 处理，返回 `"0s"`。
pub fn format_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let total = (end - start).num_milliseconds().div_euclid(1000).max(0);
    format_seconds(total)
}

/// 按秒数格式化
pub fn format_seconds(total: i64) -> String {
    let mut remaining = total.max(0);

    let days = remaining / SECS_PER_DAY;
    remaining -= days * SECS_PER_DAY;
    let hours = remaining / SECS_PER_HOUR;
    remaining -= hours * SECS_PER_HOUR;
    let minutes = remaining / SECS_PER_MINUTE;
    remaining -= minutes * SECS_PER_MINUTE;
    let seconds = remaining;

    let mut parts: Vec<String> = [(days, 'd'), (hours, 'h'), (minutes, 'm')]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}
