#![warn(missing_docs)]
//! A two-variant result algebra. An [Outcome] holds either a computed value or
//! the failure that prevented computing it, and a fixed set of combinators
//! inspects, transforms and recovers from it without using panics for control
//! flow.
//!
//! Panics only enter the picture at two explicit boundaries:
//! [Outcome::from_operation] and [Outcome::from_raised] turn a panic into a
//! failure, and [Outcome::unwrap] turns a failure back into a panic. Everything
//! else is ordinary data flow.
//!
//! ```
//! use outcome::Outcome;
//!
//! let port: Outcome<u16, &str> = Outcome::success(8080);
//! let fallback = port.map(|p| p + 1).or_else(|| "no port configured");
//! assert_eq!(fallback.unwrap_or(80), 8081);
//! ```
pub mod callback;
pub mod classify;
pub mod fault;
pub mod infallible;
pub mod iter;
pub mod outcome;
pub mod panic;
mod trace;

pub use callback::{Operation, Supplier};
pub use classify::IntoOutcome;
pub use fault::Fault;
pub use infallible::{always, Always};
pub use iter::partition;
pub use outcome::Outcome;
pub use panic::Panic;
