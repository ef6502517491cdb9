//! Event macros that forward to `tracing` when the `tracing` feature is enabled, and expand to nothing otherwise.

macro_rules! trace_event {
  ($($arg:tt)*) => {{
    #[cfg(feature = "tracing")]
    ::tracing::trace!($($arg)*);
  }};
}
pub(crate) use trace_event;

macro_rules! debug_event {
  ($($arg:tt)*) => {{
    #[cfg(feature = "tracing")]
    ::tracing::debug!($($arg)*);
  }};
}
pub(crate) use debug_event;
