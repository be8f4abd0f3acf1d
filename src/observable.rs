//! Observable core: `create` and `subscribe`.
//!
//! An [`Observable`] is a cold, reusable description of a push-based
//! computation: it wraps exactly one subscription function and does nothing
//! until [`subscribe`](Observable::subscribe) is called. Operators compose
//! by wrapping — each returns a new `Observable` whose subscription
//! function subscribes to the upstream with a transforming observer.

use std::sync::Arc;

use crate::{
  observer::{BoxObserver, Observer, ObserverAll},
  subscription::Disposable,
};

type SubscribeFn<Item, Err> = dyn Fn(BoxObserver<Item, Err>) + Send + Sync;

/// A representation of any set of values over any amount of time. This is
/// the most basic building block of the crate.
///
/// Cheap to clone; clones share the subscription function. Every clone (and
/// the original) can be subscribed any number of times, each subscription
/// running the subscription function afresh.
pub struct Observable<Item, Err> {
  on_subscribe: Arc<SubscribeFn<Item, Err>>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  fn clone(&self) -> Self { Observable { on_subscribe: self.on_subscribe.clone() } }
}

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Wraps `on_subscribe`, the function invoked for every subscription.
  ///
  /// The function is given the subscriber's observer (already wrapped for
  /// safe delivery), to which new values can be `next`ed, a failure
  /// `error`ed, or a successful end `complete`d. It may emit synchronously,
  /// block, or hand work to a [`Scheduler`]; `create` itself has no side
  /// effects.
  ///
  /// [`Scheduler`]: crate::scheduler::Scheduler
  pub fn create<F>(on_subscribe: F) -> Self
  where
    F: Fn(BoxObserver<Item, Err>) + Send + Sync + 'static,
  {
    Observable { on_subscribe: Arc::new(on_subscribe) }
  }

  /// Creates an observable producing a single value.
  ///
  /// Completes immediately after emitting the value given. Never emits an
  /// error.
  pub fn of(value: Item) -> Self
  where
    Item: Clone + Sync,
  {
    Self::create(move |mut observer| {
      observer.next(value.clone());
      observer.complete();
    })
  }

  /// Creates an observable that produces values from an iterator.
  ///
  /// Completes when all elements have been emitted. Never emits an error.
  /// The iterator is cloned for every subscription, keeping the observable
  /// cold and re-subscribable.
  pub fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = Item> + Clone + Send + Sync + 'static,
  {
    Self::create(move |mut observer| {
      for value in iter.clone() {
        observer.next(value);
      }
      observer.complete();
    })
  }

  /// Begins producing notifications into `observer`.
  ///
  /// The subscription function runs synchronously on the calling thread
  /// (unless the chain contains `subscribe_on`) with a safe wrapper around
  /// `observer`: delivery stops once the returned [`Disposable`] is
  /// disposed, and at most one terminal notification ever gets through.
  ///
  /// A subscription function that panics propagates to the caller of
  /// `subscribe`; the pipeline does not catch it.
  pub fn subscribe<O>(&self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    let disposable = Disposable::new();
    let safe = SafeObserver { observer, disposable: disposable.clone() };
    (self.on_subscribe)(Box::new(safe));
    disposable
  }

  /// Subscribes with three callbacks instead of an [`Observer`] value.
  pub fn subscribe_all<N, E, C>(&self, next: N, error: E, complete: C) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.subscribe(ObserverAll::new(next, error, complete))
  }
}

/// Wrapper installed around the subscriber's observer by `subscribe`.
///
/// Shares the disposal flag with the [`Disposable`] handed back to the
/// caller. `next` is dropped once the flag is set; terminal notifications
/// are delivered only by the one caller that wins the latch, which is what
/// enforces the at-most-one-terminal contract under concurrent delivery.
struct SafeObserver<O> {
  observer: O,
  disposable: Disposable,
}

impl<O, Item, Err> Observer<Item, Err> for SafeObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if !self.disposable.is_disposed() {
      self.observer.next(value);
    }
  }

  fn error(&mut self, err: Err) {
    if self.disposable.try_terminate() {
      self.observer.error(err);
    }
  }

  fn complete(&mut self) {
    if self.disposable.try_terminate() {
      self.observer.complete();
    }
  }
}
