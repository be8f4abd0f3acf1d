use std::{
  sync::mpsc::{channel, Sender},
  thread,
};

use crate::scheduler::{run_task, Scheduler, Task};

/// Exactly one dedicated worker; tasks run strictly in submission order
/// relative to each other.
///
/// The worker exits once every clone of the scheduler has been dropped.
#[derive(Clone)]
pub struct SingleThreadScheduler {
  queue: Sender<Task>,
}

impl SingleThreadScheduler {
  pub fn new() -> Self {
    let (queue, tasks) = channel::<Task>();
    thread::Builder::new()
      .name("rx-single".into())
      .spawn(move || {
        for task in tasks {
          run_task(task);
        }
      })
      .expect("failed to spawn single worker");
    SingleThreadScheduler { queue }
  }
}

impl Default for SingleThreadScheduler {
  fn default() -> Self { Self::new() }
}

impl Scheduler for SingleThreadScheduler {
  fn execute(&self, task: Task) {
    self.queue.send(task).expect("single worker terminated");
  }
}

#[cfg(test)]
mod test {
  use std::{
    sync::{mpsc::channel, Arc, Mutex},
    time::Duration,
  };

  use super::*;

  #[test]
  fn tasks_run_in_submission_order() {
    let scheduler = SingleThreadScheduler::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for i in 0..100 {
      let order = order.clone();
      scheduler.execute(Box::new(move || order.lock().unwrap().push(i)));
    }
    let (done, wait) = channel();
    scheduler.execute(Box::new(move || done.send(()).unwrap()));
    wait.recv_timeout(Duration::from_secs(2)).unwrap();

    assert_eq!(*order.lock().unwrap(), (0..100).collect::<Vec<_>>());
  }
}
