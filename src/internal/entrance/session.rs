use std::sync::Arc;

use crate::internal::page::traits::page_access::PageAccess;
use crate::internal::poller::structs::poll_config::PollConfig;
use crate::internal::poller::structs::poll_error::PollError;
use crate::internal::poller::structs::poll_outcome::PollOutcome;
use crate::internal::poller::structs::progress_poller::ProgressPoller;
use crate::internal::transport::structs::reqwest_transport::ReqwestTransport;

/// 用默认 reqwest 传输跑完一次进度轮询会话
///
/// 需要自定义传输、注册钩子或监听阶段变化时，请直接构建
/// [`ProgressPoller`](crate::poller::ProgressPoller)。
///
/// example:
/// ```
/// use std::sync::Arc;
/// use url::Url;
/// use upload_progress::run_poll_session;
/// use upload_progress::poller::PollConfig;
///
/// let config = PollConfig::new(
///     "upload-status",
///     "upload-bar",
///     Url::parse("http://localhost:8080/progress").unwrap(),
/// )
/// .file_input("upload-file");
///
/// let outcome = run_poll_session(config, page).await?;
/// ```
pub async fn run_poll_session(
    config: PollConfig,
    page: Arc<dyn PageAccess>,
) -> Result<PollOutcome, PollError> {
    let transport = match ReqwestTransport::new() {
        Ok(t) => Arc::new(t),
        Err(e) => {
            // 宿主环境连 HTTP 客户端都建不出来：致命，告警后直接终止
            page.alert(&e.to_string());
            return Err(e);
        }
    };

    ProgressPoller::new(config, page, transport).start().await
}
