//! The two-variant result algebra

use std::any::Any;
use std::fmt;

use crate::callback::Supplier;
use crate::classify::IntoOutcome;
use crate::panic::Panic;
use crate::trace::trace_event;

/// Either a computed value or the failure that prevented computing it.
///
/// Outcomes are never modified in place. Every combinator consumes the
/// outcome and builds a new one, possibly with different type parameters, so
/// an outcome can be shared freely between readers once constructed.
///
/// Neither side can be empty: the constructors take their payload by value,
/// so an outcome always holds exactly one `T` or exactly one `E`.
#[must_use = "this outcome may be a failure, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
  /// The computation produced a value
  Success(T),
  /// The computation failed
  Failure(E),
}

impl<T, E> Outcome<T, E> {
  /// Wrap a computed value
  pub fn success(value: T) -> Self { Self::Success(value) }

  /// Wrap a failure
  pub fn failure(error: E) -> Self { Self::Failure(error) }

  /// Build an outcome from a value that may or may not represent a failure.
  /// Which side the value lands on is decided by its [IntoOutcome] impl;
  /// anything implementing [crate::Fault] is a failure, plain data is a
  /// success.
  ///
  /// ```
  /// use outcome::Outcome;
  ///
  /// let plain: Outcome<i32, String> = Outcome::from_value(4i32);
  /// assert_eq!(plain, Outcome::success(4));
  /// ```
  pub fn from_value(value: impl IntoOutcome<T, E>) -> Self { value.into_outcome() }

  /// `true` if this holds a value. Exactly one of this and
  /// [Outcome::is_failure] is true.
  pub fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }

  /// `true` if this holds a failure
  pub fn is_failure(&self) -> bool { !self.is_success() }

  /// The success payload, discarding any failure
  pub fn value(self) -> Option<T> {
    match self {
      Self::Success(t) => Some(t),
      Self::Failure(_) => None,
    }
  }

  /// The failure payload, discarding any success value
  pub fn error(self) -> Option<E> {
    match self {
      Self::Success(_) => None,
      Self::Failure(e) => Some(e),
    }
  }

  /// Borrow both sides without consuming the outcome
  pub fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Success(t) => Outcome::Success(t),
      Self::Failure(e) => Outcome::Failure(e),
    }
  }

  /// Take the value out, or raise the held failure as a panic.
  ///
  /// The panic payload is the failure value itself, not a message built from
  /// it, so a caller that catches the panic can downcast it back to `E`.
  /// A [Panic] captured by [Outcome::from_operation] is not raised again as a
  /// `Panic`; unwinding resumes with the payload it originally carried.
  /// [Outcome::from_raised] is the matching boundary that turns it back into
  /// a failure. To propagate the failure with `?` instead, use
  /// [Outcome::into_result].
  ///
  /// ```should_panic
  /// use outcome::Outcome;
  ///
  /// Outcome::<(), &str>::failure("no route to host").unwrap();
  /// ```
  pub fn unwrap(self) -> T
  where E: Send + 'static {
    match self {
      Self::Success(t) => t,
      Self::Failure(e) => {
        trace_event!(failure = std::any::type_name::<E>(), "unwrap raised the held failure");
        let mut slot = Some(e);
        let held: &mut dyn Any = &mut slot;
        if let Some(panic) = held.downcast_mut::<Option<Panic>>().and_then(Option::take) {
          panic.resume()
        }
        match slot {
          Some(e) => std::panic::panic_any(e),
          None => unreachable!("only a captured panic is taken out of the slot"),
        }
      },
    }
  }

  /// Take the value out, or fall back to a default that was computed
  /// up front
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Success(t) => t,
      Self::Failure(_) => default,
    }
  }

  /// Take the value out, or compute a fallback. The supplier only runs on a
  /// failure, so it may be expensive or have side effects.
  pub fn unwrap_or_else(self, supplier: impl Supplier<T>) -> T {
    match self {
      Self::Success(t) => t,
      Self::Failure(_) => supplier(),
    }
  }

  /// Convert into a [std::result::Result] to propagate the failure with `?`
  pub fn into_result(self) -> Result<T, E> {
    match self {
      Self::Success(t) => Ok(t),
      Self::Failure(e) => Err(e),
    }
  }

  /// Transform the success value. A failure is passed along untouched and
  /// `f` is not called.
  ///
  /// Panics raised by `f` are not caught; a panicking mapper is a bug in the
  /// mapper, not a failure of the computation that produced the value.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Self::Success(t) => Outcome::Success(f(t)),
      Self::Failure(e) => Outcome::Failure(e),
    }
  }

  /// Fold both sides into one type. Exactly one of the two callbacks runs:
  /// `f` on the success value or `fallback` on the failure.
  pub fn map_or_else<U>(self, f: impl FnOnce(T) -> U, fallback: impl FnOnce(E) -> U) -> U {
    match self {
      Self::Success(t) => f(t),
      Self::Failure(e) => fallback(e),
    }
  }

  /// Transform the failure. A success is passed along untouched.
  pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Self::Success(t) => Outcome::Success(t),
      Self::Failure(e) => Outcome::Failure(f(e)),
    }
  }

  /// Chain a computation that may itself fail. Stops at the first failure.
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Success(t) => f(t),
      Self::Failure(e) => Outcome::Failure(e),
    }
  }

  /// Keep this value if there is one, otherwise select `other` as it is.
  /// `other` is already constructed, so nothing is computed here.
  pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Self::Success(t) => Outcome::Success(t),
      Self::Failure(_) => other,
    }
  }

  /// Keep this value if there is one, otherwise replace the failure with a
  /// new one from `supplier`, which only runs on this path.
  pub fn or_else<F>(self, supplier: impl Supplier<F>) -> Outcome<T, F> {
    match self {
      Self::Success(t) => Outcome::Success(t),
      Self::Failure(_) => Outcome::Failure(supplier()),
    }
  }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  fn from(value: Result<T, E>) -> Self {
    match value {
      Ok(t) => Self::Success(t),
      Err(e) => Self::Failure(e),
    }
  }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  fn from(value: Outcome<T, E>) -> Self { value.into_result() }
}

impl<T, E> IntoIterator for Outcome<T, E> {
  type IntoIter = std::option::IntoIter<T>;
  type Item = T;
  fn into_iter(self) -> Self::IntoIter { self.value().into_iter() }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Success(t) => write!(f, "Success({t})"),
      Self::Failure(e) => write!(f, "Failure({e})"),
    }
  }
}

#[cfg(test)]
mod test {
  use std::cell::Cell;
  use std::panic;

  use hashbrown::HashSet;

  use super::Outcome;

  #[derive(Clone, Debug, PartialEq, Eq, Hash)]
  struct Overdrawn {
    balance: i64,
  }

  fn overdrawn() -> Overdrawn { Overdrawn { balance: -5 } }

  type Balance = Outcome<i32, Overdrawn>;

  fn counted<'a, A, R>(calls: &'a Cell<usize>, f: impl FnOnce(A) -> R + 'a) -> impl FnOnce(A) -> R + 'a {
    move |a| {
      calls.set(calls.get() + 1);
      f(a)
    }
  }

  #[test]
  fn predicates_are_exclusive() {
    let ok = Balance::success(1);
    let bad = Balance::failure(overdrawn());
    assert!(ok.is_success() && !ok.is_failure());
    assert!(bad.is_failure() && !bad.is_success());
  }

  #[test]
  fn unwrap_success() {
    assert_eq!(Balance::success(1).unwrap(), 1);
  }

  #[test]
  fn unwrap_raises_the_held_failure() {
    let raised = panic::catch_unwind(|| Balance::failure(overdrawn()).unwrap())
      .expect_err("unwrapping a failure must panic");
    assert_eq!(raised.downcast_ref::<Overdrawn>(), Some(&overdrawn()), "payload is the failure itself");
  }

  #[test]
  fn unwrap_or() {
    assert_eq!(Balance::success(1).unwrap_or(7), 1);
    assert_eq!(Balance::failure(overdrawn()).unwrap_or(7), 7);
  }

  #[test]
  fn unwrap_or_else_is_lazy() {
    let calls = Cell::new(0);
    let supplier = || {
      calls.set(calls.get() + 1);
      777
    };
    assert_eq!(Balance::success(1).unwrap_or_else(supplier), 1);
    assert_eq!(calls.get(), 0, "supplier must not run on success");
    assert_eq!(Balance::failure(overdrawn()).unwrap_or_else(supplier), 777);
    assert_eq!(calls.get(), 1, "supplier runs exactly once on failure");
  }

  #[test]
  fn map_success() {
    assert_eq!(Balance::success(1).map(|v| v * 2), Outcome::success(2));
    assert_eq!(Balance::success(1).map(|v| v * 2).unwrap(), 2);
  }

  #[test]
  fn map_skips_failure() {
    let calls = Cell::new(0);
    let mapped = Balance::failure(overdrawn()).map(counted(&calls, |v: i32| v * 2));
    assert_eq!(mapped, Outcome::failure(overdrawn()));
    assert_eq!(calls.get(), 0, "mapper must not run on failure");
  }

  #[test]
  fn map_does_not_catch_mapper_panics() {
    let raised = panic::catch_unwind(|| Balance::success(1).map(|_| -> i32 { panic!("bad mapper") }));
    assert!(raised.is_err());
  }

  #[test]
  fn map_or_else_runs_one_branch() {
    let hits = Cell::new(0);
    let misses = Cell::new(0);
    let folded =
      Balance::success(1).map_or_else(counted(&hits, |v: i32| v * 2), counted(&misses, |_: Overdrawn| 0));
    assert_eq!(folded, 2);
    assert_eq!((hits.get(), misses.get()), (1, 0));
    let folded = Balance::failure(overdrawn())
      .map_or_else(counted(&hits, |v: i32| v * 2), counted(&misses, |e: Overdrawn| e.balance as i32));
    assert_eq!(folded, -5);
    assert_eq!((hits.get(), misses.get()), (1, 1));
  }

  #[test]
  fn map_failure_and_then() {
    assert_eq!(Balance::failure(overdrawn()).map_failure(|e| e.balance), Outcome::failure(-5));
    assert_eq!(Balance::success(3).map_failure(|e| e.balance), Outcome::success(3));
    let halve = |v: i32| if v % 2 == 0 { Outcome::success(v / 2) } else { Outcome::failure(overdrawn()) };
    assert_eq!(Balance::success(8).and_then(halve), Outcome::success(4));
    assert_eq!(Balance::success(3).and_then(halve), Outcome::failure(overdrawn()));
    assert_eq!(Balance::failure(overdrawn()).and_then(halve), Outcome::failure(overdrawn()));
  }

  #[test]
  fn or_selects() {
    let other = Outcome::<i32, &str>::success(7);
    assert_eq!(Balance::success(1).or(other), Outcome::success(1));
    assert_eq!(Balance::success(1).or(Outcome::<i32, &str>::failure("x")), Outcome::success(1));
    assert_eq!(Balance::failure(overdrawn()).or(other), other);
    assert_eq!(Balance::failure(overdrawn()).or(Outcome::<i32, &str>::failure("x")), Outcome::failure("x"));
  }

  #[test]
  fn or_else_is_lazy() {
    let calls = Cell::new(0);
    let supplier = || {
      calls.set(calls.get() + 1);
      "ill-formed locale"
    };
    let kept = Balance::success(1).or_else(supplier);
    assert_eq!(kept, Outcome::success(1));
    assert_eq!(calls.get(), 0, "supplier must not run on success");
    let replaced = Balance::failure(overdrawn()).or_else(supplier);
    assert_eq!(replaced, Outcome::failure("ill-formed locale"));
    assert_eq!(calls.get(), 1, "supplier runs exactly once on failure");
  }

  #[test]
  fn optional_views() {
    for outcome in [Balance::success(1), Balance::failure(overdrawn())] {
      let value = outcome.clone().value();
      let error = outcome.clone().error();
      assert_eq!(value.is_some(), outcome.is_success());
      assert_eq!(error.is_some(), outcome.is_failure());
      assert!(value.is_some() != error.is_some(), "exactly one side is present");
    }
    assert_eq!(Balance::success(1).value(), Some(1));
    assert_eq!(Balance::failure(overdrawn()).error(), Some(overdrawn()));
  }

  #[test]
  fn structural_equality() {
    assert_eq!(Outcome::<_, ()>::success(1), Outcome::success(1));
    assert_ne!(Outcome::<i32, i32>::success(1), Outcome::failure(1));
    assert_ne!(Outcome::<(), _>::failure("a"), Outcome::failure("b"));
    let set: HashSet<Outcome<i32, &str>> =
      [Outcome::success(1), Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 3, "equal outcomes hash equally");
  }

  #[test]
  fn std_interop() {
    let ok: Result<i32, Overdrawn> = Balance::success(1).into();
    assert_eq!(ok, Ok(1));
    assert_eq!(Balance::from(Err(overdrawn())), Outcome::failure(overdrawn()));
    fn propagate(o: Balance) -> Result<i32, Overdrawn> { Ok(o.into_result()? + 1) }
    assert_eq!(propagate(Balance::success(1)), Ok(2));
    assert_eq!(propagate(Balance::failure(overdrawn())), Err(overdrawn()));
  }

  #[test]
  fn as_ref_and_iter() {
    let held = Balance::success(4);
    assert_eq!(held.as_ref().map(|v| v + 1), Outcome::success(5));
    assert_eq!(held.into_iter().collect::<Vec<_>>(), vec![4]);
    assert_eq!(Balance::failure(overdrawn()).into_iter().count(), 0);
  }

  #[test]
  fn display() {
    assert_eq!(Outcome::<i32, &str>::success(3).to_string(), "Success(3)");
    assert_eq!(Outcome::<i32, &str>::failure("gone").to_string(), "Failure(gone)");
  }
}
