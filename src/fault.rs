//! Type-erased failure representations

use std::any::Any;
use std::error::Error;
use std::fmt::{Debug, Display};
use std::sync::Arc;

use dyn_clone::DynClone;

/// A value that represents a failure. Implementing this marks a type as
/// belonging on the failure side of [crate::Outcome::from_value], and makes
/// it upcastable into the shared and boxed failure objects.
pub trait Fault: Display + Send + Sync + DynClone + Any {
  /// Convert into a shared trait object
  #[must_use]
  fn rc(self) -> Arc<dyn Fault>
  where Self: Sized {
    Arc::new(self)
  }

  /// Convert into an owned, clonable trait object
  #[must_use]
  fn boxed(self) -> Box<dyn Fault>
  where Self: Sized {
    Box::new(self)
  }

  /// Upcast for downcasting
  fn as_any(&self) -> &dyn Any;
}

dyn_clone::clone_trait_object!(Fault);

impl dyn Fault {
  /// Check whether the erased failure is of a concrete type
  pub fn is<F: Fault>(&self) -> bool { self.as_any().is::<F>() }

  /// Recover the concrete failure, if it has this type
  pub fn downcast_ref<F: Fault>(&self) -> Option<&F> { self.as_any().downcast_ref() }
}

impl Debug for dyn Fault {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "Fault({self})") }
}

impl Error for dyn Fault {}

/// Shorthand for implementing [Fault] on a type that is already
/// [Display] and [Clone]
#[macro_export]
macro_rules! fault {
  ($($t:ty),+ $(,)?) => {
    $(
      impl $crate::Fault for $t {
        fn as_any(&self) -> &dyn ::std::any::Any { self }
      }
    )+
  };
}
