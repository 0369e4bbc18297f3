//! Deciding which side of an [Outcome] a value belongs on

use std::error::Error;
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};
use std::str::Utf8Error;
use std::string::FromUtf8Error;
use std::sync::Arc;
use std::{fmt, io};

use crate::fault::Fault;
use crate::outcome::Outcome;
use crate::panic::Panic;

/// Values that know whether they represent a success or a failure. This is
/// what [Outcome::from_value] dispatches on.
///
/// Failure representations ([Fault] implementors, erased faults, captured
/// panics and the std error types) settle on the failure side; plain data settles on the success
/// side. Implement this for your own success types to make them accepted by
/// [Outcome::from_value].
pub trait IntoOutcome<T, E> {
  /// Wrap self in the variant it belongs to
  fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
  fn into_outcome(self) -> Outcome<T, E> { self }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
  fn into_outcome(self) -> Outcome<T, E> { self.into() }
}

impl<T, F: Fault> IntoOutcome<T, F> for F {
  fn into_outcome(self) -> Outcome<T, F> { Outcome::Failure(self) }
}

impl<T> IntoOutcome<T, Arc<dyn Fault>> for Arc<dyn Fault> {
  fn into_outcome(self) -> Outcome<T, Arc<dyn Fault>> { Outcome::Failure(self) }
}

impl<T> IntoOutcome<T, Box<dyn Fault>> for Box<dyn Fault> {
  fn into_outcome(self) -> Outcome<T, Box<dyn Fault>> { Outcome::Failure(self) }
}

impl<T> IntoOutcome<T, Panic> for Panic {
  fn into_outcome(self) -> Outcome<T, Panic> { Outcome::Failure(self) }
}

macro_rules! success_values {
  ($($t:ty),+ $(,)?) => {
    $(
      impl<E> IntoOutcome<$t, E> for $t {
        fn into_outcome(self) -> Outcome<$t, E> { Outcome::Success(self) }
      }
    )+
  };
}

macro_rules! failure_values {
  ($($t:ty),+ $(,)?) => {
    $(
      impl<T> IntoOutcome<T, $t> for $t {
        fn into_outcome(self) -> Outcome<T, $t> { Outcome::Failure(self) }
      }
    )+
  };
}

failure_values!(
  io::Error, fmt::Error, ParseIntError, ParseFloatError, TryFromIntError, Utf8Error,
  FromUtf8Error, Box<dyn Error + Send + Sync>,
);

success_values!(
  (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
  String, &'static str,
);
