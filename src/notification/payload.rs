//! Slack webhook payload
//!
//! 使用旧式 attachments 而不是 blocks：
//! - blocks 不支持左侧颜色条
//! - blocks 最多 10 个 fields，job 多时会被 Slack 拒绝
//!
//! Payload 格式：
//! ```json
//! {
//!   "username": "CI",
//!   "attachments": [{
//!     "mrkdwn_in": ["text"],
//!     "color": "danger",
//!     "text": "Failed: octocat's `push` on `<...|*main*>`\nWorkflow: CI <...|#14> completed in `1m 30s`",
//!     "footer": "<https://github.com/o/r|*o/r*>",
//!     "footer_icon": "https://github.githubassets.com/favicon.ico",
//!     "fields": [{ "short": true, "value": "✓ <...|build> (30s)" }]
//!   }]
//! }
//! ```

use serde::Serialize;

use super::outcome::Color;

/// footer 图标
pub const FOOTER_ICON: &str = "https://github.githubassets.com/favicon.ico";

/// 转义 Slack mrkdwn 控制字符 `&` `<` `>`
pub fn slack_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Slack mrkdwn 链接 `<url|text>`，text 会被转义
pub fn slack_link(url: &str, text: &str) -> String {
    format!("<{}|{}>", url, slack_escape(text))
}

/// 加粗文本的 Slack 链接 `<url|*text*>`
pub fn slack_bold_link(url: &str, text: &str) -> String {
    format!("<{}|*{}*>", url, slack_escape(text))
}

/// Attachment 字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub short: bool,
    pub value: String,
}

impl Field {
    /// 并排显示的紧凑字段
    pub fn short(value: impl Into<String>) -> Self {
        Self {
            short: true,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub mrkdwn_in: Vec<String>,
    pub color: Color,
    pub text: String,
    pub footer: String,
    pub footer_icon: String,
    pub fields: Vec<Field>,
}

/// 最终 POST 到 webhook 的 body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
}

impl SlackPayload {
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachments.first()
    }
}

/// 可选的消息覆盖项，全部为空时 payload 只有 attachments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadOverrides {
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub icon_url: Option<String>,
    pub text: Option<String>,
    pub unfurl_links: Option<bool>,
}

/// Payload 构建器
pub struct PayloadBuilder {
    attachment: Attachment,
    overrides: PayloadOverrides,
}

impl PayloadBuilder {
    /// 创建新的 PayloadBuilder
    pub fn new(color: Color, text: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            attachment: Attachment {
                mrkdwn_in: vec!["text".to_string()],
                color,
                text: text.into(),
                footer: footer.into(),
                footer_icon: FOOTER_ICON.to_string(),
                fields: Vec::new(),
            },
            overrides: PayloadOverrides::default(),
        }
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.attachment.fields = fields;
        self
    }

    pub fn channel(mut self, channel: Option<&str>) -> Self {
        self.overrides.channel = non_empty(channel);
        self
    }

    pub fn username(mut self, username: Option<&str>) -> Self {
        self.overrides.username = non_empty(username);
        self
    }

    pub fn icon_emoji(mut self, emoji: Option<&str>) -> Self {
        self.overrides.icon_emoji = non_empty(emoji);
        self
    }

    pub fn icon_url(mut self, url: Option<&str>) -> Self {
        self.overrides.icon_url = non_empty(url);
        self
    }

    pub fn text(mut self, text: Option<&str>) -> Self {
        self.overrides.text = non_empty(text);
        self
    }

    pub fn unfurl_links(mut self, unfurl: Option<bool>) -> Self {
        self.overrides.unfurl_links = unfurl;
        self
    }

    /// 一次性应用全部覆盖项
    pub fn overrides(self, overrides: &PayloadOverrides) -> Self {
        self.channel(overrides.channel.as_deref())
            .username(overrides.username.as_deref())
            .icon_emoji(overrides.icon_emoji.as_deref())
            .icon_url(overrides.icon_url.as_deref())
            .text(overrides.text.as_deref())
            .unfurl_links(overrides.unfurl_links)
    }

    pub fn build(self) -> SlackPayload {
        let PayloadOverrides {
            channel,
            username,
            icon_emoji,
            icon_url,
            text,
            unfurl_links,
        } = self.overrides;

        SlackPayload {
            channel,
            username,
            icon_emoji,
            icon_url,
            attachments: vec![self.attachment],
            text,
            unfurl_links,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
