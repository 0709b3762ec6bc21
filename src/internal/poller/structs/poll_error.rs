//! 轮询相关错误类型。

use thiserror::Error;

/// 轮询会话的致命错误：不重试、不退避，告警后立即终止。
#[derive(Debug, Error)]
pub enum PollError {
    #[error("无法创建 HTTP 客户端")]
    TransportUnavailable,

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回异常状态码: {0}")]
    BadStatus(u16),
}
