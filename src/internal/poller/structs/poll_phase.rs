/// 轮询阶段（由轮询器内部维护，外部只读监听）
///
/// `Idle → Polling → { Done | Failed }`；只有 Polling 会循环，
/// Done 和 Failed 为终态，之后不再有任何迁移。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollPhase {
    Idle,
    Polling,
    Done,
    Failed,
}
