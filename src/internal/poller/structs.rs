pub mod hook_adapters;
pub mod poll_config;
pub mod poll_error;
pub mod poll_hooks_container;
pub mod poll_outcome;
pub mod poll_phase;
pub mod progress_poller;
pub mod progress_update;
pub mod reactive_state;

// 重导出公共类型
pub use poll_config::PollConfig;
pub use poll_error::PollError;
pub use poll_hooks_container::PollHooksContainer;
pub use poll_outcome::PollOutcome;
pub use poll_phase::PollPhase;
pub use progress_poller::ProgressPoller;
pub use progress_update::ProgressUpdate;
