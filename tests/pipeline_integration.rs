//! Integration tests for whole pipelines
//!
//! Operator chains, threading behavior through schedulers, and disposal,
//! exercised through the public surface only.

use std::{
  sync::{mpsc::channel, Arc, Mutex},
  thread,
  time::Duration,
};

use rxflow::{prelude::*, scheduler};

#[test]
fn map_over_created_source() {
  let received = Arc::new(Mutex::new(Vec::new()));
  let c_received = received.clone();

  Observable::<i32, ()>::create(|mut emitter| {
    emitter.next(1);
    emitter.next(2);
    emitter.next(3);
    emitter.complete();
  })
  .map(|x| Ok(x * 2))
  .subscribe_all(move |v| c_received.lock().unwrap().push(v), |_| {}, || {});

  assert_eq!(*received.lock().unwrap(), vec![2, 4, 6]);
}

#[test]
fn filter_then_map_chain() {
  let received = Arc::new(Mutex::new(Vec::new()));
  let completions = Arc::new(Mutex::new(0));
  let (c_received, c_completions) = (received.clone(), completions.clone());

  Observable::<i32, ()>::create(|mut emitter| {
    emitter.next(10);
    emitter.next(20);
    emitter.next(30);
    emitter.next(15);
    emitter.next(12);
    emitter.complete();
  })
  .filter(|x| Ok(*x > 16))
  .map(|x| Ok(format!("value: {}", x)))
  .subscribe_all(
    move |v| c_received.lock().unwrap().push(v),
    |_| {},
    move || *c_completions.lock().unwrap() += 1,
  );

  assert_eq!(
    *received.lock().unwrap(),
    vec!["value: 20".to_string(), "value: 30".to_string()]
  );
  assert_eq!(*completions.lock().unwrap(), 1);
}

#[test]
fn flat_map_interleaves_synchronous_inners() {
  let received = Arc::new(Mutex::new(Vec::new()));
  let c_received = received.clone();

  Observable::<i32, ()>::create(|mut emitter| {
    emitter.next(1);
    emitter.next(2);
    emitter.complete();
  })
  .flat_map(|x| {
    Ok(Observable::create(move |mut inner| {
      inner.next(x * 10);
      inner.next(x * 100);
      inner.complete();
    }))
  })
  .subscribe_all(move |v| c_received.lock().unwrap().push(v), |_| {}, || {});

  assert_eq!(*received.lock().unwrap(), vec![10, 100, 20, 200]);
}

#[test]
fn predicate_failure_reaches_observer_once() {
  let received = Arc::new(Mutex::new(Vec::new()));
  let errors = Arc::new(Mutex::new(Vec::new()));
  let completions = Arc::new(Mutex::new(0));
  let (c_received, c_errors, c_completions) =
    (received.clone(), errors.clone(), completions.clone());

  Observable::<i32, String>::create(|mut emitter| {
    emitter.next(1);
    emitter.next(2);
    emitter.next(3);
    emitter.complete();
  })
  .filter(|x| {
    if *x == 2 {
      Err("illegal state".to_string())
    } else {
      Ok(true)
    }
  })
  .subscribe_all(
    move |v| c_received.lock().unwrap().push(v),
    move |e| c_errors.lock().unwrap().push(e),
    move || *c_completions.lock().unwrap() += 1,
  );

  // the source emitted 3 and completed after the failure; neither got
  // through
  assert_eq!(*received.lock().unwrap(), vec![1]);
  assert_eq!(*errors.lock().unwrap(), vec!["illegal state".to_string()]);
  assert_eq!(*completions.lock().unwrap(), 0);
}

#[test]
fn flat_map_mapper_failure_reaches_observer() {
  let errors = Arc::new(Mutex::new(Vec::new()));
  let c_errors = errors.clone();

  Observable::<i32, String>::create(|mut emitter| {
    emitter.next(1);
    emitter.next(2);
    emitter.complete();
  })
  .flat_map(|x| {
    if x == 2 {
      Err("runtime failure".to_string())
    } else {
      Ok(Observable::of(x))
    }
  })
  .subscribe_all(|_| {}, move |e| c_errors.lock().unwrap().push(e), || {});

  assert_eq!(*errors.lock().unwrap(), vec!["runtime failure".to_string()]);
}

/// One throwaway thread per submission: a valid caller-supplied scheduler
/// with no cross-task ordering guarantee.
struct SpawnScheduler;

impl Scheduler for SpawnScheduler {
  fn execute(&self, task: Task) {
    thread::spawn(move || task());
  }
}

#[test]
fn adhoc_scheduler_moves_subscription() {
  let producer_thread = Arc::new(Mutex::new(None));
  let c_producer = producer_thread.clone();
  let (done, finished) = channel();

  Observable::<&str, ()>::create(move |mut emitter| {
    *c_producer.lock().unwrap() = Some(thread::current().id());
    emitter.next("rx");
    emitter.next("flow");
    emitter.complete();
  })
  .subscribe_on(SpawnScheduler)
  .subscribe_all(|_| {}, |_| {}, move || done.send(()).unwrap());

  finished.recv_timeout(Duration::from_secs(2)).unwrap();
  assert_ne!(
    producer_thread.lock().unwrap().unwrap(),
    thread::current().id()
  );
}

#[test]
fn full_chain_across_schedulers() {
  let received = Arc::new(Mutex::new(Vec::new()));
  let delivery_threads = Arc::new(Mutex::new(Vec::new()));
  let (c_received, c_threads) = (received.clone(), delivery_threads.clone());
  let (done, finished) = channel();

  Observable::<i32, String>::create(|mut emitter| {
    for v in [10, 20, 30, 15, 12] {
      emitter.next(v);
    }
    emitter.complete();
  })
  .subscribe_on(scheduler::computation())
  .filter(|v| Ok(*v > 16))
  .map(|v| Ok(format!("value: {}", v)))
  .observe_on(scheduler::single())
  .subscribe_all(
    move |v| {
      c_received.lock().unwrap().push(v);
      c_threads.lock().unwrap().push(thread::current().id());
    },
    |_| {},
    move || done.send(()).unwrap(),
  );

  finished.recv_timeout(Duration::from_secs(5)).unwrap();
  assert_eq!(
    *received.lock().unwrap(),
    vec!["value: 20".to_string(), "value: 30".to_string()]
  );
  for id in delivery_threads.lock().unwrap().iter() {
    assert_ne!(*id, thread::current().id());
  }
}

#[test]
fn dispose_reports_disposed() {
  let received = Arc::new(Mutex::new(false));
  let c_received = received.clone();

  let disposable = Observable::<&str, ()>::create(|mut emitter| {
    emitter.next("one");
    emitter.next("two");
    emitter.complete();
  })
  .subscribe_all(move |_| *c_received.lock().unwrap() = true, |_| {}, || {});

  disposable.dispose();
  assert!(disposable.is_disposed());
  assert!(*received.lock().unwrap());
}

#[test]
fn one_scheduler_shared_across_pipelines() {
  let shared: Arc<dyn Scheduler + Send + Sync> = Arc::new(scheduler::io());
  let (done_a, finished_a) = channel();
  let (done_b, finished_b) = channel();

  Observable::<i32, ()>::from_iter(0..3)
    .observe_on(shared.clone())
    .subscribe_all(|_| {}, |_| {}, move || done_a.send(()).unwrap());
  Observable::<i32, ()>::from_iter(0..3)
    .observe_on(shared)
    .subscribe_all(|_| {}, |_| {}, move || done_b.send(()).unwrap());

  finished_a.recv_timeout(Duration::from_secs(2)).unwrap();
  finished_b.recv_timeout(Duration::from_secs(2)).unwrap();
}
