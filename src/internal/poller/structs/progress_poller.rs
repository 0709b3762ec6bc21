use std::sync::Arc;

use url::Url;

use crate::internal::page::traits::page_access::PageAccess;
use crate::internal::poller::structs::hook_adapters::{
    OnTerminalHookAdapter, OnUpdateHookAdapter,
};
use crate::internal::poller::traits::poll_hook::PollHook;
use crate::internal::states::observable::ObservableProperty;
use crate::internal::transport::traits::fetch::ProgressTransport;

use super::poll_config::PollConfig;
use super::poll_error::PollError;
use super::poll_hooks_container::PollHooksContainer;
use super::poll_outcome::PollOutcome;
use super::poll_phase::PollPhase;
use super::progress_update::ProgressUpdate;
use super::reactive_state::PollerReactiveState;

/// 启动时写入状态行的初始文案
const STARTING_STATUS: &str = "Upload starting...";

/// 上传进度轮询器：一次会话从 `start()` 到终态，期间配置不可变。
///
/// 不实现 Clone，是因为会话一旦启动就不应该有第二个驱动者，
/// 否则同一组页面元素会被并发改写。阶段与百分比通过可观察属性对外暴露，
/// 克隆属性句柄即可在别处监听。
pub struct ProgressPoller {
    config: PollConfig,
    page: Arc<dyn PageAccess>,
    transport: Arc<dyn ProgressTransport>,
    hooks: PollHooksContainer,
    reactive_state: PollerReactiveState,
}

impl ProgressPoller {
    pub fn new(
        config: PollConfig,
        page: Arc<dyn PageAccess>,
        transport: Arc<dyn ProgressTransport>,
    ) -> Self {
        Self {
            config,
            page,
            transport,
            hooks: PollHooksContainer::default(),
            reactive_state: PollerReactiveState::new(),
        }
    }

    /// 注册一个完整钩子
    /// 注意：必须在 start() 之前调用，start() 之后不再接受新钩子
    pub fn with_hook(mut self, hook: impl PollHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 注册「进度刷新」闭包钩子
    pub fn with_on_update_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ProgressUpdate) + Send + Sync + 'static,
    {
        self.hooks.add(OnUpdateHookAdapter(f));
        self
    }

    /// 注册「终态」闭包钩子
    pub fn with_on_terminal_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PollPhase) + Send + Sync + 'static,
    {
        self.hooks.add(OnTerminalHookAdapter(f));
        self
    }
}

/// 外部接口：读取与监听会话状态
impl ProgressPoller {
    /// 轮询阶段属性句柄（可 clone、可 watch）
    pub fn phase(&self) -> ObservableProperty<PollPhase> {
        self.reactive_state.phase.clone()
    }

    /// 百分比属性句柄（可 clone、可 watch）
    pub fn percent(&self) -> ObservableProperty<u32> {
        self.reactive_state.percent.clone()
    }

    /// 获取当前轮询阶段
    pub fn get_phase(&self) -> Option<PollPhase> {
        self.reactive_state.phase.get_current()
    }

    /// 获取最近一次生效刷新的百分比
    pub fn get_percent(&self) -> u32 {
        self.reactive_state.percent.get_or_default()
    }

    /// 订阅阶段变化
    pub fn subscribe_phase<F>(&self, return_current_value: bool, callback: F)
    where
        F: Fn(&PollPhase) + Send + 'static,
    {
        let mut watcher = self.reactive_state.phase.watch();

        tokio::spawn(async move {
            if return_current_value {
                if let Some(current) = watcher.borrow() {
                    callback(&current);
                }
            }

            loop {
                match watcher.changed().await {
                    Ok(phase) => callback(&phase),
                    Err(_) => break,
                }
            }
        });
    }

    /// 订阅百分比变化
    pub fn subscribe_percent<F>(&self, return_current_value: bool, callback: F)
    where
        F: Fn(u32) + Send + 'static,
    {
        let mut watcher = self.reactive_state.percent.watch();

        tokio::spawn(async move {
            if return_current_value {
                if let Some(current) = watcher.borrow() {
                    callback(current);
                }
            }

            loop {
                match watcher.changed().await {
                    Ok(percent) => callback(percent),
                    Err(_) => break,
                }
            }
        });
    }
}

/// 轮询逻辑：驱动状态机直到终态
impl ProgressPoller {
    /// 启动会话，运行到终态。
    ///
    /// - 配置了文件输入守卫且输入框为空：不做任何页面改动、不发任何请求，
    ///   返回 [`PollOutcome::Skipped`]；
    /// - 进度到达 100%：进度条吸附到 `100%`，状态行与进度条隐藏，
    ///   返回 [`PollOutcome::Completed`]；
    /// - 传输失败或非 200 状态码：告警一次后立即终止，返回 `Err`。
    pub async fn start(&mut self) -> Result<PollOutcome, PollError> {
        if !self.guard_passes() {
            tracing::debug!("文件输入为空，跳过本次进度会话");
            return Ok(PollOutcome::Skipped);
        }

        self.page.set_text(&self.config.status_id, STARTING_STATUS);
        self.page.set_bar_width(&self.config.bar_id, "0%");
        self.page.set_visible(&self.config.status_id, true);
        self.page.set_visible(&self.config.bar_id, true);

        self.reactive_state.phase.update(PollPhase::Polling);

        loop {
            tokio::time::sleep(self.config.poll_interval).await;

            match self.poll_once().await {
                Ok(true) => {
                    self.reactive_state.phase.update(PollPhase::Done);
                    self.hooks.run_on_terminal(&PollPhase::Done);
                    return Ok(PollOutcome::Completed);
                }
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!("轮询失败，会话终止: {}", e);
                    self.page.alert(&e.to_string());
                    self.reactive_state.phase.update(PollPhase::Failed);
                    self.hooks.run_on_terminal(&PollPhase::Failed);
                    return Err(e);
                }
            }
        }
    }

    /// 文件输入守卫：未配置时直接放行。
    fn guard_passes(&self) -> bool {
        match &self.config.file_input_id {
            None => true,
            Some(file_input_id) => self
                .page
                .input_value(file_input_id)
                .is_some_and(|value| !value.is_empty()),
        }
    }

    /// 执行一个轮询周期；返回 `Ok(true)` 表示进度到达 100%，会话结束。
    async fn poll_once(&mut self) -> Result<bool, PollError> {
        let url = self.anticache_url();
        let resp = self.transport.fetch(&url).await?;

        if resp.status != 200 {
            return Err(PollError::BadStatus(resp.status));
        }

        let update = ProgressUpdate::parse(&resp.body);

        // 载荷为空或字段不合法：跳过本轮刷新，照常继续轮询
        if update.has_payload() {
            if let (Some(percent), Some(width), Some(line)) =
                (update.percent, update.bar_width(), update.status_line())
            {
                self.page.set_bar_width(&self.config.bar_id, &width);
                self.page.set_text(&self.config.status_id, &line);
                self.reactive_state.percent.update(percent);
                self.hooks.run_on_update(&update);
                tracing::debug!("进度刷新: {}", line);
            }
        }

        if update.is_complete() {
            self.page.set_bar_width(&self.config.bar_id, "100%");
            self.page.set_visible(&self.config.status_id, false);
            self.page.set_visible(&self.config.bar_id, false);
            return Ok(true);
        }

        Ok(false)
    }

    /// 在端点 URL 上追加随机 anticache 查询参数，避免 GET 响应被缓存。
    fn anticache_url(&self) -> Url {
        let anticache = rand::random::<f64>();
        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("anticache", &anticache.to_string());
        url
    }
}
