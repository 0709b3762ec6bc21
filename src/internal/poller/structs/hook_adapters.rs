//! 单阶段钩子适配器：将闭包包装成 [`PollHook`]，供 `with_xx_hook` 使用。

use crate::internal::poller::structs::poll_phase::PollPhase;
use crate::internal::poller::structs::progress_update::ProgressUpdate;
use crate::internal::poller::traits::poll_hook::PollHook;

/// 仅实现「进度刷新」的钩子适配器。
pub(crate) struct OnUpdateHookAdapter<F>(pub(crate) F);

impl<F> PollHook for OnUpdateHookAdapter<F>
where
    F: FnMut(&ProgressUpdate) + Send + Sync + 'static,
{
    fn on_update(&mut self, update: &ProgressUpdate) {
        (self.0)(update);
    }
}

/// 仅实现「终态」的钩子适配器。
pub(crate) struct OnTerminalHookAdapter<F>(pub(crate) F);

impl<F> PollHook for OnTerminalHookAdapter<F>
where
    F: FnMut(&PollPhase) + Send + Sync + 'static,
{
    fn on_terminal(&mut self, phase: &PollPhase) {
        (self.0)(phase);
    }
}
