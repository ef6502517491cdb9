//! Branch on presence, then attach the complementary branch.
//!
//! The first branch is evaluated eagerly by [`when_present`], [`when_absent`], [`when_first_present`], or
//! [`when_first_nullable_present`]. The returned [`Chain`] holds on to the value so that the complementary branch
//! can be attached afterwards, which is evaluated only when the follow-up is called.

use std::marker::PhantomData;

use crate::error::{CALLBACK, NullError, require};
use crate::log::trace_event;
use crate::util::nullable::Nullable;

/// Marker for a [`Chain`] whose present branch has already been evaluated.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AfterPresent {}

/// Marker for a [`Chain`] whose absent branch has already been evaluated.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AfterAbsent {}

/// Optional value held after one branch has been evaluated, with `B` recording which one.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Chain<T, B> {
  value: Option<T>,
  _branch: PhantomData<B>,
}

/// Returned after the present branch ran; attach the absent branch with [`when_absent`](Chain::when_absent).
pub type ChainAfterPresent<T> = Chain<T, AfterPresent>;

/// Returned after the absent branch ran; attach the present branch with [`when_present`](Chain::when_present).
pub type ChainAfterAbsent<T> = Chain<T, AfterAbsent>;

impl<T, B> Chain<T, B> {
  #[inline]
  fn new(value: Option<T>) -> Self { Self { value, _branch: PhantomData } }

  #[inline]
  pub fn value(&self) -> Option<&T> { self.value.as_ref() }

  #[inline]
  pub fn into_value(self) -> Option<T> { self.value }
}

impl<T, B> Nullable for Chain<T, B> {
  type Value = T;

  #[inline]
  fn is_absent(&self) -> bool { self.value.is_none() }

  #[inline]
  fn into_option(self) -> Option<T> { self.value }
}

impl<T> ChainAfterPresent<T> {
  /// Calls `on_absent` if the held value is absent.
  ///
  /// Returns [`NullError::InvalidArgument`] without calling anything if `on_absent` is `None`.
  pub fn when_absent(self, on_absent: Option<impl FnOnce()>) -> Result<(), NullError> {
    let on_absent = require(on_absent, CALLBACK)?;
    self.otherwise(on_absent);
    Ok(())
  }

  /// Calls `on_absent` if the held value is absent.
  #[inline]
  pub fn otherwise(self, on_absent: impl FnOnce()) {
    if self.value.is_none() {
      trace_event!(branch = "absent", "chained branch taken");
      on_absent();
    }
  }
}

impl<T> ChainAfterAbsent<T> {
  /// Calls `on_present` with the held value if it is present.
  ///
  /// Returns [`NullError::InvalidArgument`] without calling anything if `on_present` is `None`.
  pub fn when_present(self, on_present: Option<impl FnOnce(T)>) -> Result<(), NullError> {
    let on_present = require(on_present, CALLBACK)?;
    self.otherwise(on_present);
    Ok(())
  }

  /// Calls `on_present` with the held value if it is present.
  #[inline]
  pub fn otherwise(self, on_present: impl FnOnce(T)) {
    if let Some(value) = self.value {
      trace_event!(branch = "present", "chained branch taken");
      on_present(value);
    }
  }
}


/// Calls `on_present` with `value` if it is present, returning a chain to attach the absent branch to.
///
/// Returns [`NullError::InvalidArgument`] without calling anything if `on_present` is `None`.
pub fn when_present<T>(value: Option<T>, on_present: Option<impl FnOnce(&T)>) -> Result<ChainAfterPresent<T>, NullError> {
  let on_present = require(on_present, CALLBACK)?;
  Ok(present_branch(value, on_present))
}

/// Calls `on_absent` if `value` is absent, returning a chain to attach the present branch to.
///
/// Returns [`NullError::InvalidArgument`] without calling anything if `on_absent` is `None`.
pub fn when_absent<T>(value: Option<T>, on_absent: Option<impl FnOnce()>) -> Result<ChainAfterAbsent<T>, NullError> {
  let on_absent = require(on_absent, CALLBACK)?;
  Ok(absent_branch(value, on_absent))
}

/// Calls `on_present` with the first element of `collection` if the collection is present and is not empty.
///
/// The returned chain holds the first element, or is absent if the collection is absent or empty. Returns
/// [`NullError::InvalidArgument`] without calling anything if `on_present` is `None`. For collections whose elements
/// may themselves be absent, use [`when_first_nullable_present`].
pub fn when_first_present<C: IntoIterator>(
  collection: Option<C>,
  on_present: Option<impl FnOnce(&C::Item)>,
) -> Result<ChainAfterPresent<C::Item>, NullError> {
  let on_present = require(on_present, CALLBACK)?;
  Ok(present_branch(first_of(collection), on_present))
}

/// Calls `on_present` with the first element of `collection` if the collection is present, is not empty, and its
/// first element is present. Only the first element is inspected.
///
/// The returned chain holds the first element, or is absent if any of those conditions failed. Returns
/// [`NullError::InvalidArgument`] without calling anything if `on_present` is `None`.
pub fn when_first_nullable_present<C, T>(
  collection: Option<C>,
  on_present: Option<impl FnOnce(&T)>,
) -> Result<ChainAfterPresent<T>, NullError> where
  C: IntoIterator,
  C::Item: Nullable<Value=T>,
{
  let on_present = require(on_present, CALLBACK)?;
  let first = first_of(collection).and_then(Nullable::into_option);
  Ok(present_branch(first, on_present))
}

#[inline]
fn first_of<C: IntoIterator>(collection: Option<C>) -> Option<C::Item> {
  collection.and_then(|collection| collection.into_iter().next())
}


#[inline]
pub(crate) fn present_branch<T>(value: Option<T>, on_present: impl FnOnce(&T)) -> ChainAfterPresent<T> {
  if let Some(value) = &value {
    trace_event!(branch = "present", "branch taken");
    on_present(value);
  }
  Chain::new(value)
}

#[inline]
pub(crate) fn absent_branch<T>(value: Option<T>, on_absent: impl FnOnce()) -> ChainAfterAbsent<T> {
  if value.is_none() {
    trace_event!(branch = "absent", "branch taken");
    on_absent();
  }
  Chain::new(value)
}
