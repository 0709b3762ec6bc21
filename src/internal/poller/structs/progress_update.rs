//! 管道分隔进度响应的解析与展示格式化。

/// 一次响应解析出的进度快照，按位置取自
/// `_|percent|completed|total|rate|remaining`（第 0 位忽略）。
///
/// 解析本身永不失败：字段缺失或不合法只会让这份快照不满足
/// [`has_payload`](ProgressUpdate::has_payload) /
/// [`status_line`](ProgressUpdate::status_line) 的条件，本轮跳过刷新，
/// 轮询照常继续。
#[derive(Debug, Clone, Default)]
pub struct ProgressUpdate {
    /// 完成百分比（0～100）；字段缺失或非整数时为 `None`
    pub percent: Option<u32>,
    /// 已完成字节数（展示原文）
    pub completed: String,
    /// 总字节数（展示原文）
    pub total: String,
    /// 传输速率（展示原文）
    pub rate: String,
    /// 剩余时间（展示原文）
    pub remaining: String,
}

impl ProgressUpdate {
    /// 解析一份响应体。
    pub fn parse(body: &str) -> Self {
        let mut fields = body.split('|');
        // 第 0 位忽略
        let _ = fields.next();

        let percent = fields.next().and_then(|s| s.parse().ok());
        let completed = fields.next().unwrap_or_default().to_string();
        let total = fields.next().unwrap_or_default().to_string();
        let rate = fields.next().unwrap_or_default().to_string();
        let remaining = fields.next().unwrap_or_default().to_string();

        Self {
            percent,
            completed,
            total,
            rate,
            remaining,
        }
    }

    /// 本轮是否携带了有效载荷：已完成字节数非空且不为零。
    ///
    /// 非数字的 completed 视为非零，比较是宽松的。
    pub fn has_payload(&self) -> bool {
        !self.completed.is_empty()
            && self.completed.parse::<u64>().map_or(true, |v| v != 0)
    }

    /// 进度是否到达 100%。
    pub fn is_complete(&self) -> bool {
        self.percent == Some(100)
    }

    /// 进度条宽度值，形如 `"42%"`；百分比缺失时为 `None`。
    pub fn bar_width(&self) -> Option<String> {
        Some(format!("{}%", self.percent?))
    }

    /// 状态行摘要，形如
    /// `"42% finished, 4200 of 10000 at 500kb/s; 00:10"`；
    /// 百分比缺失时为 `None`。
    pub fn status_line(&self) -> Option<String> {
        Some(format!(
            "{}% finished, {} of {} at {}; {}",
            self.percent?, self.completed, self.total, self.rate, self.remaining
        ))
    }
}
