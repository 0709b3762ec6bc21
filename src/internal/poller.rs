//! 轮询器领域模块：上传进度轮询会话的全部语义。
//!
//! 使用方式：`ProgressPoller::new(config, page, transport).with_hook(hook).start().await`
//! 对外导出以 [`crate::poller`] 为准，此处仅做模块划分，不重复 pub use。

pub mod structs;
pub mod traits;
