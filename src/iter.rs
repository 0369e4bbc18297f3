//! Working with many outcomes at once. An outcome still holds at most one
//! failure; collecting stops at the first one.

use itertools::{process_results, Either, Itertools};

use crate::outcome::Outcome;

impl<T, E, C: FromIterator<T>> FromIterator<Outcome<T, E>> for Outcome<C, E> {
  fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
    let res = process_results(iter.into_iter().map(Outcome::into_result), |values| values.collect::<C>());
    Self::from(res)
  }
}

/// Split outcomes into their values and their failures. Order is preserved
/// within each side.
pub fn partition<T, E>(outcomes: impl IntoIterator<Item = Outcome<T, E>>) -> (Vec<T>, Vec<E>) {
  outcomes.into_iter().partition_map(|o| match o {
    Outcome::Success(t) => Either::Left(t),
    Outcome::Failure(e) => Either::Right(e),
  })
}
