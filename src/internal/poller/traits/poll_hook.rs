//! 轮询相关 trait：钩子接口，供轮询器领域模块调用。

use crate::internal::poller::structs::poll_phase::PollPhase;
use crate::internal::poller::structs::progress_update::ProgressUpdate;

/// 轮询流程钩子：在「每次生效的进度刷新 / 到达终态」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_on_update_hook` / `with_on_terminal_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过轮询器的 `with_hook` 注册。
pub trait PollHook: Send + Sync {
    /// 每次视觉刷新生效时调用（载荷非空且百分比可解析的那些轮次）。
    fn on_update(&mut self, _update: &ProgressUpdate) {}

    /// 会话到达终态（Done 或 Failed）时调用一次。
    fn on_terminal(&mut self, _phase: &PollPhase) {}
}
