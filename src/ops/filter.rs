use std::sync::Arc;

use crate::{
  observable::Observable,
  observer::{BoxObserver, Observer},
};

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Emits only the items that pass the predicate test.
  ///
  /// Predicate failures follow the same rule as `map`: the `Err` is
  /// delivered downstream as the terminal `error`.
  pub fn filter<F>(&self, predicate: F) -> Observable<Item, Err>
  where
    F: Fn(&Item) -> Result<bool, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let predicate = Arc::new(predicate);
    Observable::create(move |observer: BoxObserver<Item, Err>| {
      source.subscribe(FilterObserver { observer, predicate: predicate.clone() });
    })
  }
}

struct FilterObserver<O, F> {
  observer: O,
  predicate: Arc<F>,
}

impl<O, F, Item, Err> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: Fn(&Item) -> Result<bool, Err>,
{
  fn next(&mut self, value: Item) {
    match (self.predicate)(&value) {
      Ok(true) => self.observer.next(value),
      Ok(false) => {}
      Err(err) => self.observer.error(err),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }
}
