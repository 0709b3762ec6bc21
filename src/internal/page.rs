//! 页面模块：承载进度展示的宿主页面抽象。
//!
//! 把「按 id 取元素、写文本、改样式」收敛为一个可注入的
//! [`traits::page_access::PageAccess`] 能力，不依赖任何环境全局对象。

pub mod structs;
pub mod traits;
