// Capabilities of arbitrary precision integers.
// Values never overflow, but distances are measured in i128 and so can.

use std::cmp::Ordering;
use num::{BigInt,BigUint};
use num::traits::CheckedSub;
use crate::capability::*;
use crate::arith;
use crate::error::ContractViolation;

impl Incrementable for BigInt {
  const EXACT: bool = true;
  fn increment(&mut self) { *self += 1_u32 }
  fn order(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Decrementable for BigInt {
  fn decrement(&mut self) { *self -= 1_u32 }
}

impl Advanceable for BigInt {
  type Distance = i128;
  fn advance(&mut self, n: i128) { arith::advance_generic(self, n) }
  fn distance(&self, other: &Self) -> i128 {
    arith::distance_generic(self, other)
  }
}


impl Incrementable for BigUint {
  const EXACT: bool = true;
  fn increment(&mut self) { *self += 1_u32 }
  fn order(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Decrementable for BigUint {
  fn decrement(&mut self) { self.advance(-1) }
}

impl Advanceable for BigUint {
  type Distance = i128;

  /// Same split as for the unsigned primitives: negative steps subtract.
  fn advance(&mut self, n: i128) {
    let m = BigUint::from(n.unsigned_abs());
    if n >= 0 { *self += m; return }
    match CheckedSub::checked_sub(&*self, &m) {
      Some(v) => *self = v,
      None    =>
        ContractViolation::Overflow { value: self.to_string()
                                    , step:  n.to_string()
                                    , ty:    "BigUint"
                                    }.raise()
    }
  }

  fn distance(&self, other: &Self) -> i128 {
    arith::distance_unsigned(self, other)
  }
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::view::*;

  #[test]
  fn big_unsigned_steps() {
    let mut x = BigUint::from(5_u32);
    x.advance(-3);
    assert_eq!(x, BigUint::from(2_u32));
    assert_eq!(x.distance(&BigUint::from(0_u32)), -2);
  }

  #[test]
  #[should_panic(expected = "out of range for BigUint")]
  fn big_unsigned_underflow() {
    let mut x = BigUint::from(2_u32);
    x.advance(-5);
  }

  #[test]
  fn big_sequences_are_finite() {
    let from = BigInt::from(-2);
    let to   = BigInt::from(2);
    let seq  = iota_to(from, to);
    assert_eq!(seq.cardinality(), crate::Cardinality::Finite);
    let xs: Vec<BigInt> = seq.into_iter().collect();
    assert_eq!(xs, (-2 .. 2).map(BigInt::from).collect::<Vec<_>>());
  }

  #[test]
  #[should_panic(expected = "does not fit in i128")]
  fn big_distance_too_wide() {
    let far = BigInt::from(u128::MAX) * 4_u32;
    let _ = BigInt::from(0).distance(&far);
  }
}
