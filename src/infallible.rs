//! Outcomes that cannot fail

use never::Never;

use crate::outcome::Outcome;

/// An outcome with an impossible failure mode
pub type Always<T> = Outcome<T, Never>;

/// Wrap value in an outcome with an impossible failure mode
pub fn always<T>(t: T) -> Always<T> { Outcome::Success(t) }

impl<T> Outcome<T, Never> {
  /// Take the value out. Unlike [Outcome::unwrap] this has no panic path.
  pub fn into_success(self) -> T {
    match self {
      Self::Success(t) => t,
      Self::Failure(e) => match e {},
    }
  }
}

impl<E> Outcome<Never, E> {
  /// Take the failure out of an outcome that can never succeed
  pub fn into_failure(self) -> E {
    match self {
      Self::Success(t) => match t {},
      Self::Failure(e) => e,
    }
  }
}
