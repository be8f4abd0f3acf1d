use std::sync::Arc;

use crate::{
  observable::Observable,
  observer::{BoxObserver, Observer, SharedObserver},
  scheduler::Scheduler,
};

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Moves notification *delivery* onto `scheduler`: every `next`, `error`
  /// and `complete` is submitted as its own task. Production stays where
  /// the upstream runs.
  ///
  /// With a multi-worker scheduler the tasks are submitted in order but may
  /// execute out of order across workers; use [`SingleThreadScheduler`]
  /// when in-order delivery is required.
  ///
  /// [`SingleThreadScheduler`]: crate::scheduler::SingleThreadScheduler
  pub fn observe_on<S>(&self, scheduler: S) -> Observable<Item, Err>
  where
    S: Scheduler + Send + Sync + 'static,
  {
    let source = self.clone();
    let scheduler = Arc::new(scheduler);
    Observable::create(move |observer: BoxObserver<Item, Err>| {
      source.subscribe(ObserveOnObserver {
        observer: SharedObserver::own(observer),
        scheduler: scheduler.clone(),
      });
    })
  }
}

struct ObserveOnObserver<O, S> {
  observer: SharedObserver<O>,
  scheduler: Arc<S>,
}

impl<O, S, Item, Err> Observer<Item, Err> for ObserveOnObserver<O, S>
where
  O: Observer<Item, Err> + Send + 'static,
  S: Scheduler,
  Item: Send + 'static,
  Err: Send + 'static,
{
  fn next(&mut self, value: Item) {
    let mut observer = self.observer.clone();
    self.scheduler.execute(Box::new(move || observer.next(value)));
  }

  fn error(&mut self, err: Err) {
    let mut observer = self.observer.clone();
    self.scheduler.execute(Box::new(move || observer.error(err)));
  }

  fn complete(&mut self) {
    let mut observer = self.observer.clone();
    self.scheduler.execute(Box::new(move || observer.complete()));
  }
}
