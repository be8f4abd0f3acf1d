//! # rxflow: a minimal Reactive Extensions for Rust
//!
//! A push-based pipeline abstraction: data notifications flow from a
//! producer to an [`Observer`], optionally transformed by composable
//! operators and redirected onto different execution contexts by a
//! [`Scheduler`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rxflow::prelude::*;
//!
//! Observable::<i32, ()>::from_iter(0..10)
//!   .filter(|v| Ok(v % 2 == 0))
//!   .map(|v| Ok(v * 2))
//!   .subscribe_all(|v| println!("Value: {}", v), |_| {}, || {});
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | Cold, reusable description of a push-based computation |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` notifications |
//! | [`Disposable`] | Handle to cancel delivery for one subscription |
//! | [`Scheduler`] | Where a unit of work executes |
//!
//! Pipelines are cold: nothing runs until `subscribe`, and every subscribe
//! runs the chain afresh. Cancellation is cooperative — disposing stops
//! delivery to the subscriber but never interrupts the producer.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Disposable`]: subscription::Disposable
//! [`Scheduler`]: scheduler::Scheduler

pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod scheduler;
pub mod subscription;

pub use prelude::*;
