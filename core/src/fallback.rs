use crate::error::{DEFAULT_VALUE, NullError, require};

/// Returns `input` if present, otherwise `fallback`.
///
/// The fallback must always resolve to a value: returns [`NullError::InvalidArgument`] if `fallback` is `None`, even
/// when `input` is present.
#[inline]
pub fn value_or<T>(input: Option<T>, fallback: Option<T>) -> Result<T, NullError> {
  let fallback = require(fallback, DEFAULT_VALUE)?;
  Ok(input.unwrap_or(fallback))
}

/// Returns `input` if present, otherwise `T::default()`.
#[inline]
pub fn value_or_default<T: Default>(input: Option<T>) -> T { input.unwrap_or_default() }

#[inline]
pub fn or_empty_string(input: Option<impl Into<String>>) -> String { input.map_or_else(String::new, Into::into) }

#[inline]
pub fn or_zero<T: From<u8>>(input: Option<T>) -> T { input.unwrap_or_else(|| T::from(0)) }

#[inline]
pub fn or_false(input: Option<bool>) -> bool { input.unwrap_or(false) }
