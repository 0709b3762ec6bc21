use crate::internal::poller::structs::poll_phase::PollPhase;
use crate::internal::poller::structs::progress_update::ProgressUpdate;
use crate::internal::poller::traits::poll_hook::PollHook;

/// 钩子容器：持有多个钩子，按添加顺序依次执行。
#[derive(Default)]
pub struct PollHooksContainer {
    hooks: Vec<Box<dyn PollHook>>,
}

impl PollHooksContainer {
    /// 添加一个轮询钩子；支持多次调用以注册多个钩子。
    pub fn add(&mut self, hook: impl PollHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn run_on_update(&mut self, update: &ProgressUpdate) {
        for h in self.hooks.iter_mut() {
            h.on_update(update);
        }
    }

    pub fn run_on_terminal(&mut self, phase: &PollPhase) {
        for h in self.hooks.iter_mut() {
            h.on_terminal(phase);
        }
    }
}
