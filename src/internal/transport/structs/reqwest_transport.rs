//! 基于 reqwest 的生产传输实现。

use async_trait::async_trait;
use url::Url;

use crate::internal::poller::structs::poll_error::PollError;
use crate::internal::transport::traits::fetch::{PollResponse, ProgressTransport};

/// 默认传输实现：一个共享的 reqwest 客户端。
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 构建客户端；宿主环境无法创建 HTTP 客户端时返回
    /// [`PollError::TransportUnavailable`]，调用方应视为致命错误。
    pub fn new() -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|_| PollError::TransportUnavailable)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ProgressTransport for ReqwestTransport {
    async fn fetch(&self, url: &Url) -> Result<PollResponse, PollError> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(PollResponse { status, body })
    }
}
