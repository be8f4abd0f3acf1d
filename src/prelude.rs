//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

pub use crate::observable::Observable;
pub use crate::observer::{BoxObserver, Observer, ObserverAll, SharedObserver};
pub use crate::scheduler::{
  ComputationScheduler, IoScheduler, Scheduler, SingleThreadScheduler, Task,
};
pub use crate::subscription::Disposable;
