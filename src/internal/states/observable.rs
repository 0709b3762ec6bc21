//! # ObservableProperty — 可观察属性
//!
//! 轮询器内部维护、外部只读监听的状态载体：阶段机与最近一次进度百分比
//! 均基于本模块暴露。值更新走 `tokio::sync::watch`，读取无锁。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

/// 可观察属性统一错误类型
#[derive(Debug, Error)]
pub enum ObservableError {
    /// 属性已被销毁，监听结束
    #[error("属性已被销毁")]
    Closed,

    /// watch 通道接收失败
    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

/// 内部共享状态：值发送器 + 销毁标志。
#[derive(Debug)]
struct Inner<T> {
    sender: watch::Sender<Option<T>>,
    is_dropped: AtomicBool,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        self.is_dropped.store(true, Ordering::Relaxed);
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ObservableProperty ────────────────────────────

/// 可观察属性：提供 new / update / get_current / watch 基础能力。
///
/// Clone 只复制句柄，所有克隆体共享同一份值。
#[derive(Clone, Debug)]
pub struct ObservableProperty<T: Clone + Send + Sync> {
    inner: Arc<Inner<T>>,
    cache_receiver: watch::Receiver<Option<T>>,
}

impl<T> ObservableProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的可观察属性。
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(Some(value));
        let cache_receiver = sender.subscribe();
        Self {
            inner: Arc::new(Inner {
                sender,
                is_dropped: AtomicBool::new(false),
            }),
            cache_receiver,
        }
    }

    /// 更新属性的值，所有监听者都会收到通知。属性已销毁时静默忽略。
    pub fn update(&self, new_value: T) {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return;
        }
        let _ = self.inner.sender.send(Some(new_value));
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> Option<T> {
        self.cache_receiver.borrow().as_ref().cloned()
    }

    /// 获取当前值，属性已销毁时返回默认值。
    pub fn get_or_default(&self) -> T
    where
        T: Default,
    {
        self.get_current().unwrap_or_default()
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ObservableError> {
        self.receiver.changed().await?;
        match self.receiver.borrow().as_ref() {
            None => Err(ObservableError::Closed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }
}
