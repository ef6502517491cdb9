/// A value that is either present or absent.
///
/// Implemented for [`Option<T>`] and `&Option<T>`, so helpers can accept both owned and borrowed optionals.
pub trait Nullable {
  /// Type of the value when present.
  type Value;

  fn is_absent(&self) -> bool;

  #[inline]
  fn is_present(&self) -> bool { !self.is_absent() }

  /// Converts into an [`Option`], `None` when absent.
  fn into_option(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
  type Value = T;

  #[inline]
  fn is_absent(&self) -> bool { self.is_none() }

  #[inline]
  fn into_option(self) -> Option<T> { self }
}

impl<'a, T> Nullable for &'a Option<T> {
  type Value = &'a T;

  #[inline]
  fn is_absent(&self) -> bool { self.is_none() }

  #[inline]
  fn into_option(self) -> Option<&'a T> { self.as_ref() }
}
