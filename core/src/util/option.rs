use crate::chain::{absent_branch, present_branch, ChainAfterAbsent, ChainAfterPresent};

/// Method forms of the presence helpers for [`Option`].
///
/// A closure passed by value can never be absent, so unlike the free functions in [`chain`](crate::chain) these
/// cannot fail.
pub trait NullableExt<T> {
  /// Calls `on_present` with the value if present. See [`when_present`](crate::chain::when_present).
  fn when_present(self, on_present: impl FnOnce(&T)) -> ChainAfterPresent<T>;

  /// Calls `on_absent` if the value is absent. See [`when_absent`](crate::chain::when_absent).
  fn when_absent(self, on_absent: impl FnOnce()) -> ChainAfterAbsent<T>;

  fn value_or_else_default(self) -> T where T: Default;
}

impl<T> NullableExt<T> for Option<T> {
  #[inline]
  fn when_present(self, on_present: impl FnOnce(&T)) -> ChainAfterPresent<T> {
    present_branch(self, on_present)
  }

  #[inline]
  fn when_absent(self, on_absent: impl FnOnce()) -> ChainAfterAbsent<T> {
    absent_branch(self, on_absent)
  }

  #[inline]
  fn value_or_else_default(self) -> T where T: Default {
    crate::fallback::value_or_default(self)
  }
}
