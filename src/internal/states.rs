//! 状态模块：可观察属性，供轮询器对外暴露阶段与进度。

pub mod observable;
