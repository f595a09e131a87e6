// Cursors over sequences that include their bound.
//
// The positions of a closed sequence [from, to] are the values from..=to
// followed by one exhausted position, so a closed cursor is a value plus a
// flag. Position k of the sequence is at `from.distance(current) + exhausted`.

use std::iter::FusedIterator;
use num::traits::{Zero,One};
use crate::capability::*;
use crate::bound::*;
use crate::error::ContractViolation;

#[derive(Clone,Debug)]
pub struct ClosedCursor<V, B = V> {
  current:   V,
  bound:     B,
  exhausted: bool
}

fn flag<D: Distance>(b: bool) -> D { if b { D::one() } else { D::zero() } }

impl<V: Incrementable, B: Bound<V>> ClosedCursor<V, B> {

  pub(crate) fn new(current: V, bound: B, exhausted: bool) -> Self {
    ClosedCursor { current, bound, exhausted }
  }

  /// The value at this position.
  pub fn read(&self) -> V {
    if self.exhausted { ContractViolation::ReadPastEnd.raise() }
    self.current.clone()
  }

  /// The last value read, or to be read, at this position.
  pub fn current(&self) -> &V { &self.current }

  pub fn bound(&self) -> &B { &self.bound }

  /// Has the cursor moved past the bound?
  pub fn is_exhausted(&self) -> bool { self.exhausted }

  /// Move to the next position.
  /// Stepping from the bound does not change the value, only the flag,
  /// so a closed sequence may end at the largest value of its type.
  pub fn step(&mut self) {
    if self.exhausted { ContractViolation::StepPastEnd.raise() }
    if self.bound.is_end(&self.current) {
      self.exhausted = true
    } else {
      self.current.increment()
    }
  }

  pub fn equals(&self, other: &Self) -> bool {
    self.exhausted == other.exhausted && self.current == other.current
  }
}

impl<V: Decrementable, B: Bound<V>> ClosedCursor<V, B> {

  /// Move to the previous position.
  pub fn step_back(&mut self) {
    if self.exhausted {
      self.exhausted = false
    } else {
      self.current.decrement()
    }
  }
}

impl<V: Advanceable, B: SizedBound<V>> ClosedCursor<V, B> {

  /// Jump `n` positions, backwards if `n` is negative.
  /// Jumping exactly to the end leaves the value on the bound and sets
  /// the exhausted flag, the extra position absorbs one step.
  pub fn advance(&mut self, n: V::Distance) {
    let zero = V::Distance::zero();
    let one  = V::Distance::one();

    if n > zero {
      let ahead = self.bound.distance_from(&self.current);
      if ahead < n - one + flag(self.exhausted) {
        ContractViolation::JumpPastEnd { requested: n.to_string()
                                       , ahead:     ahead.to_string()
                                       }.raise()
      }
      // here the cursor is live, or the check above failed
      let lands = ahead <= n - one;
      self.exhausted = lands;
      self.current.advance(if lands { n - one } else { n })
    } else if n < zero {
      let back = n + flag(self.exhausted);
      self.exhausted = false;
      self.current.advance(back)
    }
  }

  /// The number of positions left before the exhausted position.
  pub fn distance_to_end(&self) -> V::Distance {
    let ahead: V::Distance = self.bound.distance_from(&self.current);
    ahead + V::Distance::one() - flag(self.exhausted)
  }
}

impl<V: Advanceable, B: Bound<V>> ClosedCursor<V, B> {

  /// The number of positions from this cursor to `other`.
  /// The flags count as one extra position each.
  pub fn distance_to(&self, other: &Self) -> V::Distance {
    let d: V::Distance = self.current.distance(&other.current);
    d + flag(other.exhausted) - flag(self.exhausted)
  }
}

impl<V: Incrementable, B: Bound<V>> PartialEq for ClosedCursor<V, B> {
  fn eq(&self, other: &Self) -> bool { self.equals(other) }
}


impl<V: Incrementable, B: Bound<V>> Iterator for ClosedCursor<V, B> {
  type Item = V;
  fn next(&mut self) -> Option<Self::Item> {
    if self.exhausted { return None }
    let result = self.current.clone();
    self.step();
    Some(result)
  }

  /// The bound itself is one more value than a half-open range would give.
  fn size_hint(&self) -> (usize, Option<usize>) {
    if self.exhausted { return (0, Some(0)) }
    let (lo, hi) = self.bound.size_hint(&self.current);
    (lo.saturating_add(1), hi.and_then(|n| n.checked_add(1)))
  }
}

impl<V: Incrementable, B: Bound<V>> FusedIterator for ClosedCursor<V, B> {}

impl<V: Decrementable> DoubleEndedIterator for ClosedCursor<V, V> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.exhausted { return None }
    let result = self.bound.clone();
    if self.current == self.bound {
      self.exhausted = true
    } else {
      self.bound.decrement()
    }
    Some(result)
  }
}



#[cfg(test)]
mod test {
  use super::*;
  use rand::{Rng,SeedableRng};
  use rand::rngs::StdRng;

  #[test]
  fn walk_to_the_end() {
    let mut c = ClosedCursor::new(4_u8, 5_u8, false);
    c.step();
    assert_eq!(c.read(), 5);
    c.step();
    assert!(c.is_exhausted());
    assert_eq!(c.current(), &5);
    c.step_back();
    assert!(!c.is_exhausted());
    assert_eq!(c.read(), 5);
  }

  #[test]
  fn ends_at_maximum() {
    let c = ClosedCursor::new(u8::MAX - 2, u8::MAX, false);
    assert_eq!(c.collect::<Vec<_>>(), vec![253, 254, 255]);
  }

  #[test]
  fn exhaustion_is_part_of_equality() {
    let live = ClosedCursor::new(5_i32, 5_i32, false);
    let done = ClosedCursor::new(5_i32, 5_i32, true);
    assert!(live != done);
    assert_eq!(live.distance_to(&done), 1);
    assert_eq!(done.distance_to(&live), -1);
  }

  #[test]
  fn jump_onto_the_end() {
    let mut c = ClosedCursor::new(0_i32, 5_i32, false);
    c.advance(6);
    assert!(c == ClosedCursor::new(5_i32, 5_i32, true));
    assert_eq!(c.distance_to_end(), 0);
    c.advance(-1);
    assert!(!c.is_exhausted());
    assert_eq!(c.read(), 5);
    c.advance(-5);
    assert_eq!(c.read(), 0);
    assert_eq!(c.distance_to_end(), 6);
  }

  #[test]
  fn jump_short_of_the_end() {
    let mut c = ClosedCursor::new(0_u16, 5_u16, false);
    c.advance(5);
    assert!(!c.is_exhausted());
    assert_eq!(c.read(), 5);
    c.advance(1);
    assert!(c.is_exhausted());
  }

  #[test]
  #[should_panic(expected = "cannot jump 7 positions")]
  fn jump_past_the_end() {
    let mut c = ClosedCursor::new(0_i64, 5_i64, false);
    c.advance(7);
  }

  #[test]
  #[should_panic(expected = "cannot jump 1 positions")]
  fn jump_from_exhausted() {
    let mut c = ClosedCursor::new(5_i64, 5_i64, true);
    c.advance(1);
  }

  #[test]
  #[should_panic(expected = "cannot step")]
  fn step_from_exhausted() {
    ClosedCursor::new(5_u32, 5_u32, true).step();
  }

  #[test]
  fn size_hints() {
    let mut c = ClosedCursor::new(0_u8, u8::MAX, false);
    assert_eq!(c.len(), 256);
    c.advance(256);
    assert_eq!(c.size_hint(), (0, Some(0)));
    assert_eq!(c.next(), None);
    assert_eq!(c.next(), None);
    let c = ClosedCursor::new(0_u64, Unreachable, false);
    assert_eq!(c.size_hint(), (usize::MAX, None));
    let c = ClosedCursor::new(-3_i64, 10_i32, false);
    assert_eq!(c.size_hint(), (14, Some(14)));
  }

  #[test]
  fn both_ends() {
    let mut c = ClosedCursor::new(1_u64, 3_u64, false);
    assert_eq!(c.next_back(), Some(3));
    assert_eq!(c.next(), Some(1));
    assert_eq!(c.next_back(), Some(2));
    assert_eq!(c.next(), None);
    assert_eq!(c.next_back(), None);
  }

  #[test]
  fn back_to_minimum() {
    let c = ClosedCursor::new(i16::MIN, i16::MIN + 1, false);
    assert_eq!(c.rev().collect::<Vec<_>>(), vec![i16::MIN + 1, i16::MIN]);
  }

  /// Random jumps agree with a plain index into the sequence.
  #[test]
  fn random_walk() {
    let mut rng = StdRng::seed_from_u64(0x107a);
    for _ in 0 .. 64 {
      let from: i32 = rng.gen_range(-1000 .. 1000);
      let len:  i64 = rng.gen_range(0 .. 50);
      let to = from + len as i32;
      let start = ClosedCursor::new(from, to, false);
      let mut c = start.clone();
      let mut ix = 0_i64;
      for _ in 0 .. 100 {
        let target = rng.gen_range(0 ..= len + 1);
        c.advance(target - ix);
        ix = target;
        assert_eq!(start.distance_to(&c), ix);
        assert_eq!(c.distance_to_end(), len + 1 - ix);
        assert_eq!(c.is_exhausted(), ix == len + 1);
        if ix <= len { assert_eq!(c.read(), from + ix as i32) }
      }
    }
  }
}
