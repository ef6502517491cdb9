use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A collection that can be tested for emptiness.
pub trait Sequence {
  fn is_empty(&self) -> bool;
}

impl<T> Sequence for [T] {
  #[inline]
  fn is_empty(&self) -> bool { <[T]>::is_empty(self) }
}
impl<T, const N: usize> Sequence for [T; N] {
  #[inline]
  fn is_empty(&self) -> bool { N == 0 }
}
impl Sequence for str {
  #[inline]
  fn is_empty(&self) -> bool { str::is_empty(self) }
}
impl Sequence for String {
  #[inline]
  fn is_empty(&self) -> bool { String::is_empty(self) }
}

macro_rules! impl_sequence {
  ($ty:ident<$($param:ident),+>) => {
    impl<$($param),+> Sequence for $ty<$($param),+> {
      #[inline]
      fn is_empty(&self) -> bool { $ty::is_empty(self) }
    }
  };
}
impl_sequence!(Vec<T>);
impl_sequence!(VecDeque<T>);
impl_sequence!(LinkedList<T>);
impl_sequence!(BinaryHeap<T>);
impl_sequence!(BTreeSet<T>);
impl_sequence!(BTreeMap<K, V>);
impl_sequence!(HashSet<T, S>);
impl_sequence!(HashMap<K, V, S>);
