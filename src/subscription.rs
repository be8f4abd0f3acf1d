//! Disposal handle for an active subscription.

use std::{
  fmt::{Debug, Formatter},
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
};

/// Handle returned from [`Observable::subscribe`] to allow cancelling
/// delivery before the stream has finished.
///
/// A `Disposable` owns nothing but a flag shared with the safe observer
/// installed around the subscriber; disposing flips the flag, and every
/// notification checks it before reaching the subscriber. Cancellation is
/// cooperative: the producer is never interrupted, and a notification
/// already past the flag check still lands.
///
/// Cloning shares the flag, so any clone can dispose the subscription.
///
/// [`Observable::subscribe`]: crate::observable::Observable::subscribe
#[derive(Clone, Default)]
pub struct Disposable {
  flag: Arc<AtomicBool>,
}

impl Disposable {
  pub fn new() -> Self { Self::default() }

  /// Stop delivering notifications to the subscriber. Idempotent.
  pub fn dispose(&self) { self.flag.store(true, Ordering::Release); }

  /// Whether delivery has stopped. Also reports `true` once a terminal
  /// notification (`error` or `complete`) has been delivered, since the
  /// flag doubles as the terminal latch.
  pub fn is_disposed(&self) -> bool { self.flag.load(Ordering::Acquire) }

  /// Claims the right to deliver the one terminal notification. Returns
  /// `true` for exactly one caller over the lifetime of the flag, and
  /// never after `dispose`.
  pub(crate) fn try_terminate(&self) -> bool {
    self
      .flag
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .is_ok()
  }
}

impl Debug for Disposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Disposable")
      .field("is_disposed", &self.is_disposed())
      .finish()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn dispose_is_idempotent() {
    let d = Disposable::new();
    assert!(!d.is_disposed());
    d.dispose();
    assert!(d.is_disposed());
    d.dispose();
    assert!(d.is_disposed());
  }

  #[test]
  fn clones_share_the_flag() {
    let d = Disposable::new();
    let c = d.clone();
    c.dispose();
    assert!(d.is_disposed());
  }

  #[test]
  fn terminate_claims_once() {
    let d = Disposable::new();
    assert!(d.try_terminate());
    assert!(!d.try_terminate());
    assert!(d.is_disposed());
  }

  #[test]
  fn no_terminate_after_dispose() {
    let d = Disposable::new();
    d.dispose();
    assert!(!d.try_terminate());
  }
}
