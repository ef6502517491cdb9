use crate::log::debug_event;

/// Error returned when an argument that must always resolve to a value is absent.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, thiserror::Error)]
pub enum NullError {
  #[error("The {name} can not be absent")]
  InvalidArgument { name: &'static str },
}

impl NullError {
  #[inline]
  pub const fn invalid_argument(name: &'static str) -> Self { Self::InvalidArgument { name } }

  /// Name of the argument that was absent.
  #[inline]
  pub const fn argument_name(&self) -> &'static str {
    match self {
      Self::InvalidArgument { name } => name,
    }
  }
}

pub(crate) const DEFAULT_VALUE: &str = "default value";
pub(crate) const CALLBACK: &str = "callback";

/// Unwraps `argument`, or returns [`NullError::InvalidArgument`] naming it when it is absent.
#[inline]
pub(crate) fn require<A>(argument: Option<A>, name: &'static str) -> Result<A, NullError> {
  match argument {
    Some(argument) => Ok(argument),
    None => {
      debug_event!(argument = name, "required argument is absent");
      Err(NullError::invalid_argument(name))
    }
  }
}
