//! The boundary between panics and explicit failures.
//!
//! [Outcome::from_operation] captures every unwinding panic raised by the
//! wrapped computation. [Outcome::from_raised] is the narrow form: it only
//! captures panics whose payload has the declared failure type, which is what
//! [Outcome::unwrap] raises, and lets every other panic keep unwinding.
//!
//! Neither can observe a panic if the crate is built with `panic = "abort"`.
//! Both run after the process-wide panic hook, so unless the caller replaced
//! it with [std::panic::set_hook] the default hook has already written its
//! `thread '..' panicked at` report to stderr by the time the panic is
//! captured.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{catch_unwind, resume_unwind};

use crate::callback::Operation;
use crate::outcome::Outcome;
use crate::trace::{debug_event, trace_event};

/// A panic caught at the boundary. The payload is stored exactly as it was
/// raised, so it can be downcast to its original type or re-raised unchanged.
pub struct Panic(Box<dyn Any + Send>);
impl Panic {
  /// Wrap a payload obtained from [std::panic::catch_unwind]
  pub fn new(payload: Box<dyn Any + Send>) -> Self { Self(payload) }

  /// The panic message, if the payload is one of the string types `panic!`
  /// produces
  pub fn message(&self) -> Option<&str> {
    self.0
      .downcast_ref::<&'static str>()
      .copied()
      .or_else(|| self.0.downcast_ref::<String>().map(String::as_str))
  }

  /// Check the type of the payload
  pub fn is<P: Any>(&self) -> bool { self.0.is::<P>() }

  /// Borrow the payload as its original type
  pub fn downcast_ref<P: Any>(&self) -> Option<&P> { self.0.downcast_ref() }

  /// Take the payload as its original type, or get the panic back if the
  /// type is wrong
  pub fn downcast<P: Any>(self) -> Result<P, Self> {
    self.0.downcast::<P>().map(|p| *p).map_err(Self)
  }

  /// Give up the type-erased payload
  pub fn into_payload(self) -> Box<dyn Any + Send> { self.0 }

  /// Continue unwinding with the original payload
  pub fn resume(self) -> ! { resume_unwind(self.0) }
}

impl fmt::Debug for Panic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.message() {
      Some(msg) => write!(f, "Panic({msg:?})"),
      None => write!(f, "Panic(..)"),
    }
  }
}

impl fmt::Display for Panic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.message() {
      Some(msg) => write!(f, "panicked: {msg}"),
      None => write!(f, "panicked with a non-string payload"),
    }
  }
}

impl Error for Panic {}

impl<T> Outcome<T, Panic> {
  /// Run a computation, capturing any panic it raises as a failure.
  ///
  /// ```
  /// use outcome::Outcome;
  ///
  /// assert_eq!(Outcome::from_operation(|| 1 + 1).value(), Some(2));
  /// ```
  pub fn from_operation(op: impl Operation<T>) -> Self {
    match catch_unwind(op) {
      Ok(t) => Self::Success(t),
      Err(payload) => {
        let panic = Panic(payload);
        debug_event!(panic_message = panic.message(), "operation panicked, captured as failure");
        Self::Failure(panic)
      },
    }
  }
}

impl<T, E: Any + Send> Outcome<T, E> {
  /// Run a computation, capturing panics whose payload is an `E` as a
  /// failure. Panics carrying anything else are not caught.
  pub fn from_raised(op: impl Operation<T>) -> Self {
    match catch_unwind(op) {
      Ok(t) => Self::Success(t),
      Err(payload) => match payload.downcast::<E>() {
        Ok(e) => {
          debug_event!(failure = std::any::type_name::<E>(), "operation raised a failure");
          Self::Failure(*e)
        },
        Err(other) => {
          trace_event!(expected = std::any::type_name::<E>(), "operation panicked with a foreign payload");
          resume_unwind(other)
        },
      },
    }
  }
}
