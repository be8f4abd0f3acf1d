use std::sync::Arc;

use crate::{
  observable::Observable,
  observer::BoxObserver,
  scheduler::Scheduler,
};

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Defers invoking the upstream subscription function to a task on
  /// `scheduler` instead of the subscriber's thread.
  ///
  /// `subscribe` therefore returns its [`Disposable`] before the upstream
  /// has necessarily started producing anything.
  ///
  /// [`Disposable`]: crate::subscription::Disposable
  pub fn subscribe_on<S>(&self, scheduler: S) -> Observable<Item, Err>
  where
    S: Scheduler + Send + Sync + 'static,
  {
    let source = self.clone();
    let scheduler = Arc::new(scheduler);
    Observable::create(move |observer: BoxObserver<Item, Err>| {
      let source = source.clone();
      scheduler.execute(Box::new(move || {
        source.subscribe(observer);
      }));
    })
  }
}
