/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::session::*;

pub mod page {
    use crate::internal;
    pub use internal::page::structs::element_id::ElementId;
    pub use internal::page::traits::page_access::PageAccess;
}

/// 对外提供传输层抽象，不能限制死在入口函数中，以防有人自己要注入传输实现
pub mod transport {
    pub mod traits {
        use crate::internal;
        pub use internal::transport::traits::fetch::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::transport::structs::reqwest_transport::*;
    }
}

pub mod states {
    pub mod observable {
        use crate::internal;
        pub use internal::states::observable::*;
    }
}

pub mod poller {
    use crate::internal;
    // 结构体模型
    pub use internal::poller::structs::*;
    // 钩子 trait（以 lib 为中心，此处统一导出）
    pub use internal::poller::traits::poll_hook::PollHook;
}
