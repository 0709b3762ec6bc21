use std::time::Duration;

use url::Url;

use crate::internal::page::structs::element_id::ElementId;

/// 默认轮询间隔：首次轮询前与两次轮询之间都等这么久。
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// 一次轮询会话的配置，构建后在会话生命周期内不可变。
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// 宿主表单元素；仅作记录，构建后不再使用
    pub form_id: Option<ElementId>,
    /// 状态行元素：可读的进度摘要写到这里
    pub status_id: ElementId,
    /// 进度条容器元素：其内部填充宽度代表完成百分比
    pub bar_id: ElementId,
    /// 轮询目标；每次请求都会追加一个随机 anticache 查询参数
    pub endpoint: Url,
    /// 文件输入元素；设置后，输入框为空时整个会话直接跳过
    pub file_input_id: Option<ElementId>,
    /// 轮询间隔
    pub poll_interval: Duration,
}

impl PollConfig {
    pub fn new(
        status_id: impl Into<ElementId>,
        bar_id: impl Into<ElementId>,
        endpoint: Url,
    ) -> Self {
        Self {
            form_id: None,
            status_id: status_id.into(),
            bar_id: bar_id.into(),
            endpoint,
            file_input_id: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// 记录宿主表单元素
    pub fn form(mut self, form_id: impl Into<ElementId>) -> Self {
        self.form_id = Some(form_id.into());
        self
    }

    /// 设置文件输入守卫：该输入框为空时不启动轮询
    pub fn file_input(mut self, file_input_id: impl Into<ElementId>) -> Self {
        self.file_input_id = Some(file_input_id.into());
        self
    }

    /// 设置轮询间隔
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
