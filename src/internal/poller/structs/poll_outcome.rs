/// 会话正常结束时的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// 文件输入守卫未通过，什么都没发生
    Skipped,
    /// 进度到达 100%，会话完整跑完
    Completed,
}
