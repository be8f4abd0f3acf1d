//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for failures), and
//! complete (for stream completion).

use std::sync::{Arc, Mutex};

/// Observer trait: the consumer of data in reactive programming
///
/// An Observer receives values, errors, and completion notifications from
/// an [`Observable`]. The pipeline guarantees that after one terminal call
/// (`error` or `complete`) no further call of any kind is delivered; an
/// implementation does not have to defend against out-of-contract callers.
///
/// [`Observable`]: crate::observable::Observable
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable.
  fn next(&mut self, value: Item);

  /// Receive a terminal failure. No more notifications follow.
  fn error(&mut self, err: Err);

  /// Receive the completion of the stream. No more notifications follow.
  fn complete(&mut self);
}

/// The erased observer a subscription function is handed.
///
/// Subscription functions don't need to know the concrete observer type
/// down the chain (a `MapObserver`, a `SharedObserver`, the subscriber's
/// own type); they emit through this boxed facade.
pub type BoxObserver<Item, Err> = Box<dyn Observer<Item, Err> + Send>;

impl<Item, Err, T> Observer<Item, Err> for Box<T>
where
  T: Observer<Item, Err> + ?Sized,
{
  #[inline]
  fn next(&mut self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&mut self, err: Err) { (**self).error(err) }

  #[inline]
  fn complete(&mut self) { (**self).complete() }
}

/// Shared-ownership observer: several producers delivering into one
/// downstream observer.
///
/// `flat_map` hands a clone to every inner subscription, `observe_on` to
/// every scheduled task. The mutex serializes delivery into the inner
/// observer; each notification holds the lock only for its own call.
pub struct SharedObserver<O>(Arc<Mutex<O>>);

impl<O> SharedObserver<O> {
  pub fn own(observer: O) -> Self { SharedObserver(Arc::new(Mutex::new(observer))) }
}

impl<O> Clone for SharedObserver<O> {
  fn clone(&self) -> Self { SharedObserver(self.0.clone()) }
}

impl<O, Item, Err> Observer<Item, Err> for SharedObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) { self.0.lock().unwrap().next(value) }

  fn error(&mut self, err: Err) { self.0.lock().unwrap().error(err) }

  fn complete(&mut self) { self.0.lock().unwrap().complete() }
}

/// Observer assembled from three callbacks.
///
/// Backs [`Observable::subscribe_all`]; also usable directly with
/// `subscribe` when a named observer type is not worth writing.
///
/// [`Observable::subscribe_all`]: crate::observable::Observable::subscribe_all
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self { ObserverAll { next, error, complete } }
}

impl<N, E, C, Item, Err> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Err),
  C: FnMut(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(&mut self, err: Err) { (self.error)(err) }

  #[inline]
  fn complete(&mut self) { (self.complete)() }
}
