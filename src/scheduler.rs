//! Scheduler abstraction: where a unit of work executes.
//!
//! Operators never run work themselves; they hand zero-argument tasks to a
//! [`Scheduler`]. Three pool-backed variants are provided, plus process-wide
//! default instances of each. Any caller-supplied type implementing
//! [`Scheduler`] works too — e.g. a test scheduler spawning one throwaway
//! thread per submission (valid, but with no ordering guarantee across
//! tasks).

use std::{
  panic::{catch_unwind, AssertUnwindSafe},
  sync::Arc,
};

use once_cell::sync::Lazy;

mod io_scheduler;
mod single_thread_scheduler;
mod thread_pool_scheduler;

pub use io_scheduler::IoScheduler;
pub use single_thread_scheduler::SingleThreadScheduler;
pub use thread_pool_scheduler::ComputationScheduler;

/// A unit of work submitted to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A Scheduler is an object that accepts units of work and executes them on
/// some execution context.
pub trait Scheduler {
  /// Submit `task` for execution and return immediately. Pool-backed
  /// variants never run the task inline on the caller's thread.
  fn execute(&self, task: Task);
}

impl<S> Scheduler for Arc<S>
where
  S: Scheduler + ?Sized,
{
  #[inline]
  fn execute(&self, task: Task) { (**self).execute(task) }
}

/// Runs one task on a worker thread.
///
/// A panicking task is caught and logged; the worker survives to run
/// whatever is submitted next. This is the crate-wide policy for failures
/// inside scheduled work: log and drop, never kill a pool worker.
pub(crate) fn run_task(task: Task) {
  if let Err(panic) = catch_unwind(AssertUnwindSafe(move || task())) {
    let msg = panic
      .downcast_ref::<&str>()
      .copied()
      .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
      .unwrap_or("<opaque panic payload>");
    log::error!("scheduled task panicked: {}", msg);
  }
}

static COMPUTATION: Lazy<ComputationScheduler> = Lazy::new(ComputationScheduler::new);
static IO: Lazy<IoScheduler> = Lazy::new(IoScheduler::new);
static SINGLE: Lazy<SingleThreadScheduler> = Lazy::new(SingleThreadScheduler::new);

/// The process-wide fixed pool, sized to the available parallelism.
pub fn computation() -> ComputationScheduler { COMPUTATION.clone() }

/// The process-wide cached pool for short, possibly-blocking work.
pub fn io() -> IoScheduler { IO.clone() }

/// The process-wide dedicated worker; tasks run in submission order.
pub fn single() -> SingleThreadScheduler { SINGLE.clone() }
