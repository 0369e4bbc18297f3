//! Shapes of the zero-argument callbacks accepted by [crate::Outcome]

use std::panic::UnwindSafe;

use trait_set::trait_set;

trait_set! {
  /// A lazily evaluated fallback. Invoked at most once, and only on the path
  /// that needs it.
  pub trait Supplier<T> = FnOnce() -> T;
  /// A computation run inside a panic boundary
  pub trait Operation<T> = FnOnce() -> T + UnwindSafe;
}
