use std::{
  sync::{
    mpsc::{channel, Sender},
    Arc, Mutex,
  },
  thread,
};

use crate::scheduler::{run_task, Scheduler, Task};

/// Cached worker pool: hands a task to an idle worker when one exists,
/// spawns a new worker otherwise.
///
/// Suited to high-count, short, possibly-blocking work. Workers are kept
/// for the life of the process — pools in this crate have unbounded
/// lifetime and model no shutdown. Cloning shares the pool.
#[derive(Clone, Default)]
pub struct IoScheduler {
  idle: Arc<Mutex<Vec<Sender<Task>>>>,
}

impl IoScheduler {
  pub fn new() -> Self { Self::default() }

  fn spawn_worker(&self, first: Task) {
    let idle = self.idle.clone();
    thread::Builder::new()
      .name("rx-io".into())
      .spawn(move || {
        let (sender, tasks) = channel();
        run_task(first);
        loop {
          // register as idle, then wait; a task sent between the two is
          // buffered by the channel
          idle.lock().unwrap().push(sender.clone());
          match tasks.recv() {
            Ok(task) => run_task(task),
            Err(_) => break,
          }
        }
      })
      .expect("failed to spawn io worker");
  }
}

impl Scheduler for IoScheduler {
  fn execute(&self, task: Task) {
    let worker = self.idle.lock().unwrap().pop();
    match worker {
      Some(worker) => worker.send(task).expect("io worker terminated"),
      None => self.spawn_worker(task),
    }
  }
}
