//! 传输模块：进度端点的 GET 能力抽象与 reqwest 实现。

pub mod structs;
pub mod traits;
