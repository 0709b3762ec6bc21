use crate::internal::poller::structs::poll_phase::PollPhase;
use crate::internal::states::observable::ObservableProperty;

/// 轮询器可观察状态
#[derive(Debug)]
pub struct PollerReactiveState {
    /// 轮询阶段（只读）：内部驱动状态机，外部通过 watch 监听
    pub phase: ObservableProperty<PollPhase>,
    /// 最近一次生效刷新的百分比（只读）：内部更新，外部通过 watch 监听
    pub percent: ObservableProperty<u32>,
}

impl PollerReactiveState {
    pub(crate) fn new() -> Self {
        Self {
            phase: ObservableProperty::new(PollPhase::Idle),
            percent: ObservableProperty::new(0),
        }
    }
}
