//! GitHub Actions workflow commands
//!
//! runner 通过解析 stdout 中的 `::command::value` 行来实现日志脱敏和错误标注。

use std::io::Write;

/// 转义 workflow command 的消息部分
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::add-mask::<value>`
pub fn add_mask_command(value: &str) -> String {
    format!("::add-mask::{}", escape_data(value))
}

/// `::error::<message>`
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// 让 runner 在后续日志中把这些值替换为 `***`
pub fn mask_secrets<'a>(secrets: impl IntoIterator<Item = &'a str>) {
    let mut stdout = std::io::stdout().lock();
    for secret in secrets.into_iter().filter(|s| !s.is_empty()) {
        let _ = writeln!(stdout, "{}", add_mask_command(secret));
    }
}

/// 标记本次 step 失败（退出码由调用方设置）
pub fn set_failed(message: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", error_command(message));
}
