// Cursors over half-open, sentinel-bounded, and unbounded sequences.

use std::iter::FusedIterator;
use num::traits::Zero;
use crate::capability::*;
use crate::bound::*;
use crate::error::ContractViolation;

/// A position in a sequence whose bound is excluded.
/// The end is not stored: a cursor is at the end when its bound says so.
#[derive(Clone,Debug)]
pub struct Cursor<V, B = Unreachable> {
  current: V,
  bound:   B
}

impl<V: Incrementable, B: Bound<V>> Cursor<V, B> {

  pub(crate) fn new(current: V, bound: B) -> Self {
    Cursor { current, bound }
  }

  /// The value at this position.
  pub fn read(&self) -> V {
    if self.at_end() || self.past_end() { ContractViolation::ReadPastEnd.raise() }
    self.current.clone()
  }

  /// The value at this position, without the end check.
  pub fn current(&self) -> &V { &self.current }

  pub fn bound(&self) -> &B { &self.bound }

  /// Is this the position just past the last element?
  pub fn at_end(&self) -> bool { self.bound.is_end(&self.current) }

  /// Is the value ordered after the bound?
  fn past_end(&self) -> bool { self.bound.is_before(&self.current) == Some(true) }

  /// Move to the next position.
  pub fn step(&mut self) {
    if self.at_end() || self.past_end() { ContractViolation::StepPastEnd.raise() }
    self.current.increment()
  }

  /// Do the two cursors point at the same position?
  pub fn equals(&self, other: &Self) -> bool { self.current == other.current }
}

impl<V: Decrementable, B: Bound<V>> Cursor<V, B> {

  /// Move to the previous position.
  /// Stepping back from the first position of a sequence is a
  /// contract violation; it is only caught if the value underflows.
  pub fn step_back(&mut self) { self.current.decrement() }
}

impl<V: Advanceable, B: Bound<V>> Cursor<V, B> {

  /// Jump `n` positions, backwards if `n` is negative.
  /// Jumping beyond the end is caught when the bound is ordered with the
  /// values; the cursor is left where it was.
  pub fn advance(&mut self, n: V::Distance) {
    let mut next = self.current.clone();
    next.advance(n);
    if n > V::Distance::zero() && self.bound.is_before(&next) == Some(true) {
      ContractViolation::JumpPastBound { requested: n.to_string()
                                       , bound:     format!("{:?}", self.bound)
                                       }.raise()
    }
    self.current = next
  }

  /// The number of positions from this cursor to `other`.
  pub fn distance_to(&self, other: &Self) -> V::Distance {
    self.current.distance(&other.current)
  }
}

impl<V: Advanceable, B: SizedBound<V>> Cursor<V, B> {

  /// The number of positions left before the end.
  pub fn distance_to_end(&self) -> V::Distance {
    self.bound.distance_from(&self.current)
  }
}

impl<V: Incrementable, B: Bound<V>> PartialEq for Cursor<V, B> {
  fn eq(&self, other: &Self) -> bool { self.equals(other) }
}


impl<V: Incrementable, B: Bound<V>> Iterator for Cursor<V, B> {
  type Item = V;
  fn next(&mut self) -> Option<Self::Item> {
    if self.at_end() { return None }
    let result = self.current.clone();
    self.current.increment();
    Some(result)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    if self.at_end() { return (0, Some(0)) }
    self.bound.size_hint(&self.current)
  }
}

impl<V: Incrementable, B: Bound<V>> FusedIterator for Cursor<V, B> {}

/// Iterating from the back moves the bound, which is this cursor's own copy.
impl<V: Decrementable> DoubleEndedIterator for Cursor<V, V> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.at_end() { return None }
    self.bound.decrement();
    Some(self.bound.clone())
  }
}



#[cfg(test)]
mod test {
  use super::*;

  /// Ends a sequence of bytes at a wider integer.
  #[derive(Clone,Debug)]
  struct Limit(i64);

  impl Bound<u8> for Limit {
    fn is_end(&self, value: &u8) -> bool { *value as i64 == self.0 }
    fn is_before(&self, from: &u8) -> Option<bool> {
      Some(self.0 < *from as i64)
    }
  }

  impl SizedBound<u8> for Limit {
    fn distance_from(&self, value: &u8) -> i16 { (self.0 - *value as i64) as i16 }
  }

  #[test]
  fn half_open_walk() {
    let mut c = Cursor::new(1_i32, 3_i32);
    assert_eq!(c.read(), 1);
    c.step();
    c.step();
    assert!(c.at_end());
    c.step_back();
    assert_eq!(c.read(), 2);
    assert_eq!(c.distance_to_end(), 1);
  }

  #[test]
  #[should_panic(expected = "cannot read")]
  fn read_at_end() {
    Cursor::new(3_u8, 3_u8).read();
  }

  #[test]
  #[should_panic(expected = "cannot step")]
  fn step_at_end() {
    Cursor::new(3_u8, 3_u8).step();
  }

  #[test]
  #[should_panic(expected = "cannot jump 10 positions past bound 5")]
  fn jump_past_bound() {
    let mut c = Cursor::new(0_u32, 5_u32);
    c.advance(10);
  }

  #[test]
  fn failed_jump_leaves_cursor() {
    let mut c = Cursor::new(0_i16, 5_i16);
    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| c.advance(6)));
    assert!(r.is_err());
    assert_eq!(c.read(), 0);
    c.advance(5);
    assert!(c.at_end());
  }

  #[test]
  #[should_panic(expected = "cannot jump 4 positions past bound Limit(253)")]
  fn jump_past_sentinel() {
    let mut c = Cursor::new(250_u8, Limit(253));
    c.advance(4);
  }

  #[test]
  fn size_hints() {
    assert_eq!(Cursor::new(3_i8, 10_i8).size_hint(), (7, Some(7)));
    assert_eq!(Cursor::new(0_u64, Unreachable).size_hint(), (usize::MAX, None));
    assert_eq!(Cursor::new(250_u8, Limit(253)).size_hint(), (0, None));
    let mut c = Cursor::new(0_u8, 2_u8);
    assert_eq!(c.len(), 2);
    c.next();
    c.next();
    assert_eq!(c.size_hint(), (0, Some(0)));
    assert_eq!(c.next(), None);
    assert_eq!(c.next(), None);
  }

  #[test]
  fn sentinel_walk() {
    let c = Cursor::new(250_u8, Limit(253));
    assert_eq!(c.distance_to_end(), 3);
    assert_eq!(c.collect::<Vec<_>>(), vec![250, 251, 252]);
  }

  #[test]
  fn random_access() {
    let a = Cursor::new(10_u32, Unreachable);
    let mut b = a.clone();
    b.advance(7);
    assert_eq!(a.distance_to(&b), 7);
    assert_eq!(b.distance_to(&a), -7);
    b.advance(-7);
    assert!(a == b);
  }

  #[test]
  fn both_ends() {
    let mut c = Cursor::new(0_i8, 5_i8);
    assert_eq!(c.next_back(), Some(4));
    assert_eq!(c.next(), Some(0));
    assert_eq!(c.by_ref().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(c.next(), None);
  }

  #[test]
  fn back_to_minimum() {
    let c = Cursor::new(i8::MIN, i8::MIN + 2);
    assert_eq!(c.rev().collect::<Vec<_>>(), vec![i8::MIN + 1, i8::MIN]);
  }
}
