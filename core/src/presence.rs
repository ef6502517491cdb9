use std::ops::Deref;

use crate::util::nullable::Nullable;
use crate::util::sequence::Sequence;

/// Returns the absent value of any `T`.
#[inline]
pub const fn absent<T>() -> Option<T> { None }

#[inline]
pub fn is_absent<N: Nullable>(value: &N) -> bool { value.is_absent() }

#[inline]
pub fn is_present<N: Nullable>(value: &N) -> bool { !is_absent(value) }

/// Returns `true` if `collection` is present and has at least one element.
///
/// Accepts owned or borrowed optional collections, e.g. `Option<&[T]>`, `&Option<Vec<T>>` or `Option<String>`.
#[inline]
pub fn is_present_and_non_empty<N, C>(collection: N) -> bool where
  N: Nullable,
  N::Value: Deref<Target=C>,
  C: Sequence + ?Sized,
{
  collection.into_option().is_some_and(|collection| !Sequence::is_empty(&*collection))
}
