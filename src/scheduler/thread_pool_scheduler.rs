use std::thread::available_parallelism;

use futures::{executor::ThreadPool, future};

use crate::scheduler::{run_task, Scheduler, Task};

/// Fixed-size worker pool; queued tasks run once a worker frees.
///
/// The default width is the machine's available parallelism, which suits
/// CPU-bound work. Cloning shares the pool.
#[derive(Clone)]
pub struct ComputationScheduler {
  pool: ThreadPool,
}

impl ComputationScheduler {
  pub fn new() -> Self {
    Self::with_pool_size(available_parallelism().map(|n| n.get()).unwrap_or(1))
  }

  /// A pool of exactly `size` workers.
  pub fn with_pool_size(size: usize) -> Self {
    let pool = ThreadPool::builder()
      .pool_size(size)
      .name_prefix("rx-computation-")
      .create()
      .expect("failed to create computation thread pool");
    ComputationScheduler { pool }
  }
}

impl Default for ComputationScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for ComputationScheduler {
  fn execute(&self, task: Task) {
    self.pool.spawn_ok(future::lazy(move |_| run_task(task)));
  }
}

#[cfg(test)]
mod test {
  use std::{sync::mpsc::channel, thread, time::Duration};

  use super::*;

  #[test]
  fn task_runs_off_the_calling_thread() {
    let scheduler = ComputationScheduler::new();
    let (done, wait) = channel();
    scheduler.execute(Box::new(move || {
      done.send(thread::current().id()).unwrap();
    }));

    let worker = wait.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_ne!(worker, thread::current().id());
  }

  #[test]
  fn queued_tasks_all_run_on_a_narrow_pool() {
    let scheduler = ComputationScheduler::with_pool_size(1);
    let (done, wait) = channel();
    for i in 0..8 {
      let done = done.clone();
      scheduler.execute(Box::new(move || done.send(i).unwrap()));
    }

    let mut received: Vec<i32> = Vec::new();
    for _ in 0..8 {
      received.push(wait.recv_timeout(Duration::from_secs(2)).unwrap());
    }
    received.sort_unstable();
    assert_eq!(received, (0..8).collect::<Vec<_>>());
  }
}
