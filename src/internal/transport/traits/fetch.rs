//! 传输 trait：对进度端点发起一次 GET，异步拿到状态码和响应体。
//!
//! 生产实现见 [`crate::transport::structs::ReqwestTransport`]，
//! 测试时注入脚本化实现即可。

use async_trait::async_trait;
use url::Url;

use crate::internal::poller::structs::poll_error::PollError;

/// 一次轮询请求结束后的响应快照。
///
/// 每个已结束的请求恰好产生一份；未结束的中间状态不对外暴露。
#[derive(Debug, Clone)]
pub struct PollResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 响应体原文（管道分隔的进度文本）
    pub body: String,
}

/// 进度传输能力：发起 GET 并等待其结束。
///
/// 约定：传输层不做重试、不设超时；请求永不结束时轮询会话会静默停滞，
/// 这是沿用的既有行为，不在本层兜底。
#[async_trait]
pub trait ProgressTransport: Send + Sync {
    /// 对 `url` 发起一次 GET，返回已结束请求的状态码与响应体。
    async fn fetch(&self, url: &Url) -> Result<PollResponse, PollError>;
}
