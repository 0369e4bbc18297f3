//! Diagnostics emitted at the panic boundary. With the `tracing` feature
//! disabled these expand to nothing, so the crate never produces output of
//! its own.

/// Forward to [tracing::debug] if the feature is on
macro_rules! debug_event {
  ($($arg:tt)*) => {{
    #[cfg(feature = "tracing")]
    tracing::debug!($($arg)*);
  }};
}

/// Forward to [tracing::trace] if the feature is on
macro_rules! trace_event {
  ($($arg:tt)*) => {{
    #[cfg(feature = "tracing")]
    tracing::trace!($($arg)*);
  }};
}

pub(crate) use {debug_event, trace_event};
