use std::sync::Arc;

use crate::{
  observable::Observable,
  observer::{BoxObserver, Observer, SharedObserver},
};

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// For each upstream item, subscribes to the observable produced by `f`
  /// and forwards every inner item downstream.
  ///
  /// Inner completions are swallowed; the *outer* completion is what
  /// completes the downstream observer, and it is not gated on spawned
  /// inners having finished — with asynchronous inners, downstream
  /// completion can pass while inner work is still in flight. There is no
  /// limit on simultaneously active inners. Mapper failures follow the
  /// same rule as `map`.
  pub fn flat_map<Out, F>(&self, f: F) -> Observable<Out, Err>
  where
    Out: Send + 'static,
    F: Fn(Item) -> Result<Observable<Out, Err>, Err> + Send + Sync + 'static,
  {
    let source = self.clone();
    let f = Arc::new(f);
    Observable::create(move |observer: BoxObserver<Out, Err>| {
      source.subscribe(FlatMapObserver {
        observer: SharedObserver::own(observer),
        f: f.clone(),
      });
    })
  }
}

struct FlatMapObserver<O, F> {
  observer: SharedObserver<O>,
  f: Arc<F>,
}

impl<O, F, Item, Out, Err> Observer<Item, Err> for FlatMapObserver<O, F>
where
  O: Observer<Out, Err> + Send + 'static,
  F: Fn(Item) -> Result<Observable<Out, Err>, Err>,
  Out: Send + 'static,
  Err: Send + 'static,
{
  fn next(&mut self, value: Item) {
    match (self.f)(value) {
      Ok(inner) => {
        // each inner subscription has its own disposal scope; its handle
        // is not retained
        inner.subscribe(InnerObserver { observer: self.observer.clone() });
      }
      Err(err) => self.observer.error(err),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }
}

struct InnerObserver<O> {
  observer: SharedObserver<O>,
}

impl<O, Out, Err> Observer<Out, Err> for InnerObserver<O>
where
  O: Observer<Out, Err>,
{
  fn next(&mut self, value: Out) { self.observer.next(value) }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  // inner completion is swallowed; only the outer stream completes the
  // downstream observer
  fn complete(&mut self) {}
}
