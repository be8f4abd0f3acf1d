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
  /// Creates a new stream which calls `f` on each element and emits its
  /// value.
  ///
  /// An `Err` returned by the mapper is delivered downstream as the
  /// terminal `error` and the item is dropped. The upstream producer is
  /// not cancelled; anything it emits afterwards dies at the downstream
  /// terminal latch.
  pub fn map<Out, F>(&self, f: F) -> Observable<Out, Err>
  where
    Out: Send + 'static,
    F: Fn(Item) -> Result<Out, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let f = Arc::new(f);
    Observable::create(move |observer: BoxObserver<Out, Err>| {
      source.subscribe(MapObserver { observer, f: f.clone() });
    })
  }
}

struct MapObserver<O, F> {
  observer: O,
  f: Arc<F>,
}

impl<O, F, Item, Out, Err> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<Out, Err>,
  F: Fn(Item) -> Result<Out, Err>,
{
  fn next(&mut self, value: Item) {
    match (self.f)(value) {
      Ok(mapped) => self.observer.next(mapped),
      Err(err) => self.observer.error(err),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }
}
