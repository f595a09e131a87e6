use std::cmp::Ordering;
use std::fmt::Debug;
use crate::capability::*;

/// What is known about the length of a sequence.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Cardinality {

  /// Bounded, and both ends step with exact arithmetic.
  Finite,

  /// Never ends.
  Infinite,

  /// Bounded, but nothing guarantees that the bound is ever reached.
  Unknown
}


/// The end of a sequence of `V` values.
///
/// A bound of type `V` gives a plain half-open (or closed) range.
/// A bound of another type is a sentinel: it is only compared with values,
/// never subtracted from them, unless it also implements [`SizedBound`].
pub trait Bound<V> : Clone + Debug {

  const CARDINALITY: Cardinality = Cardinality::Unknown;

  /// Has the sequence reached this bound?
  fn is_end(&self, value: &V) -> bool;

  /// Is this bound ordered before `from`?
  /// `None` when bound and value are not ordered with each other.
  fn is_before(&self, _from: &V) -> Option<bool> { None }

  /// Bounds on the number of values left before `value` reaches this bound,
  /// as in `Iterator::size_hint`.
  fn size_hint(&self, _value: &V) -> (usize, Option<usize>) { (0, None) }
}


/// Bounds that can count the steps left until they are reached.
pub trait SizedBound<V: Advanceable> : Bound<V> {

  /// The number of steps from `value` to this bound.
  fn distance_from(&self, value: &V) -> V::Distance;
}


/// A bound that is never reached.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct Unreachable;

impl<V: Incrementable> Bound<V> for Unreachable {
  const CARDINALITY: Cardinality = Cardinality::Infinite;
  fn is_end(&self, _value: &V) -> bool { false }
  fn size_hint(&self, _value: &V) -> (usize, Option<usize>) { (usize::MAX, None) }
}


impl<V: Incrementable> Bound<V> for V {

  const CARDINALITY: Cardinality =
    if V::EXACT { Cardinality::Finite } else { Cardinality::Unknown };

  fn is_end(&self, value: &V) -> bool { value == self }

  fn is_before(&self, from: &V) -> Option<bool> {
    from.order(self).map(|o| o == Ordering::Greater)
  }

  fn size_hint(&self, value: &V) -> (usize, Option<usize>) {
    match value.steps_to(self) {
      Some(n) => (n, Some(n)),
      None    => (0, None)
    }
  }
}

impl<V: Advanceable> SizedBound<V> for V {
  fn distance_from(&self, value: &V) -> V::Distance { value.distance(self) }
}
