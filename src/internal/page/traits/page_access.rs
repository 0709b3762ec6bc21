//! 页面访问 trait：按元素 id 读写宿主页面，供轮询器领域模块调用。
//!
//! 轮询器不关心页面长什么样，只依赖这五个能力；测试时注入假页面即可。

use crate::internal::page::structs::element_id::ElementId;

/// 宿主页面能力：「按 id 取元素」抽象的收敛版。
///
/// - 进度条容器内部如何呈现填充宽度属于实现方的职责，
///   [`set_bar_width`](PageAccess::set_bar_width) 只传入形如 `"42%"` 的宽度值；
/// - [`alert`](PageAccess::alert) 对应阻塞式用户告警，致命错误只走这一条路。
pub trait PageAccess: Send + Sync {
    /// 写入元素的可读文本（状态行）。
    fn set_text(&self, id: &ElementId, text: &str);

    /// 设置进度条填充宽度，`width` 形如 `"0%"`、`"42%"`、`"100%"`。
    fn set_bar_width(&self, id: &ElementId, width: &str);

    /// 切换元素可见性。
    fn set_visible(&self, id: &ElementId, visible: bool);

    /// 读取输入框当前值；元素不存在时返回 `None`。
    fn input_value(&self, id: &ElementId) -> Option<String>;

    /// 阻塞式用户告警。
    fn alert(&self, message: &str);
}
