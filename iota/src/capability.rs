// Capability tiers of the values a sequence can produce.

use std::cmp::Ordering;
use std::fmt::{Debug,Display};
use num::traits::{PrimInt,Signed};

/// Signed integers used to count the steps between two values.
pub trait Distance : PrimInt + Signed + Debug + Display {}

impl<T: PrimInt + Signed + Debug + Display> Distance for T {}


/// The minimum a value needs to be the element of a sequence.
pub trait Incrementable : Clone + PartialEq + Debug {

  /// Does the type step with exact integral arithmetic?
  /// Bounded sequences of exact types are known to be finite.
  const EXACT: bool = false;

  /// Move to the next value.
  fn increment(&mut self);

  /// Compare two values, if the type is ordered.
  /// Used to reject inverted bounds when a sequence is made.
  fn order(&self, _other: &Self) -> Option<Ordering> { None }

  /// The number of increments from `self` to `other`, if it is known and
  /// fits in a `usize`. Used for iterator size hints.
  fn steps_to(&self, _other: &Self) -> Option<usize> { None }
}


/// Values that can also step backwards.
pub trait Decrementable : Incrementable {

  /// Move to the previous value.
  fn decrement(&mut self);
}


/// Values that can jump by an arbitrary number of steps and measure
/// how many steps separate two of them, in constant time.
///
/// `Ord` alone does not enable the inverted bounds check when a sequence
/// is made: implementations must also override `Incrementable::order`,
/// agreeing with `Ord`, or `iota_to(5, 1)` is accepted and runs until the
/// values overflow.
pub trait Advanceable : Decrementable + Ord {

  /// Wide enough to hold the distance between any two values, except for
  /// types that are already as wide as `i128` (`i128`, `u128`, bignums).
  /// For those a distance that does not fit is reported as
  /// `ContractViolation::DistanceOverflow`.
  type Distance : Distance;

  /// Move by `n` steps, backwards when `n` is negative.
  fn advance(&mut self, n: Self::Distance);

  /// The number of steps from `self` to `other`.
  fn distance(&self, other: &Self) -> Self::Distance;
}
