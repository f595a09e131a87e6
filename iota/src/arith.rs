// Overflow-safe stepping and distances, one function per kind of value:
//   * unsigned primitives
//   * signed primitives
//   * anything else that knows how to add and subtract.

use std::any::type_name;
use std::fmt::Debug;
use std::ops::{AddAssign,Sub};
use num::traits::{PrimInt,NumCast,ToPrimitive};
use crate::capability::Distance;
use crate::error::ContractViolation;


fn overflow<T: Debug, D: Debug>(value: &T, step: D) -> ! {
  ContractViolation::Overflow { value: format!("{:?}", value)
                              , step:  format!("{:?}", step)
                              , ty:    type_name::<T>()
                              }.raise()
}

fn distance_overflow<T: Debug, D>(from: &T, to: &T) -> ! {
  ContractViolation::DistanceOverflow { from: format!("{:?}", from)
                                      , to:   format!("{:?}", to)
                                      , ty:   type_name::<D>()
                                      }.raise()
}


/// Step an unsigned value by `n`.
/// Negative steps subtract the magnitude, so no negative intermediate
/// is ever formed in the unsigned domain.
pub fn advance_unsigned<U, D>(value: &mut U, n: D)
  where U: PrimInt + Debug, D: Distance {

  let next =
    if n >= D::zero() {
      <U as NumCast>::from(n).and_then(|m| value.checked_add(&m))
    } else {
      // -(n + 1) is always representable, the last unit is taken separately
      let m = -(n + D::one());
      <U as NumCast>::from(m).and_then(|m| value.checked_sub(&m))
                             .and_then(|v| v.checked_sub(&U::one()))
    };

  match next {
    Some(v) => *value = v,
    None    => overflow(&*value, n)
  }
}

/// Step a signed value by `n`, computing in the wider distance type.
pub fn advance_signed<I, D>(value: &mut I, n: D)
  where I: PrimInt + Debug, D: Distance {

  let next = <D as NumCast>::from(*value)
               .and_then(|v| v.checked_add(&n))
               .and_then(|v| <I as NumCast>::from(v));

  match next {
    Some(v) => *value = v,
    None    => overflow(&*value, n)
  }
}

/// Step any other value by direct compound addition.
pub fn advance_generic<V, D>(value: &mut V, n: D)
  where V: AddAssign<D> {
  *value += n
}


/// Steps from `from` to `to` for unsigned values.
/// The smaller value is subtracted from the larger one at native width,
/// the sign is attached afterwards.
pub fn distance_unsigned<U, D>(from: &U, to: &U) -> D
  where U: Ord + Clone + Sub<Output = U> + ToPrimitive + Debug, D: Distance {

  let d = if from > to {
            <D as NumCast>::from(from.clone() - to.clone()).map(|m| -m)
          } else {
            <D as NumCast>::from(to.clone() - from.clone())
          };
  d.unwrap_or_else(|| distance_overflow::<U,D>(from, to))
}

/// Steps from `from` to `to` for signed values.
/// Both values are widened before subtracting.
pub fn distance_signed<I, D>(from: I, to: I) -> D
  where I: PrimInt + Debug, D: Distance {

  match (<D as NumCast>::from(from), <D as NumCast>::from(to)) {
    (Some(a), Some(b)) =>
      match b.checked_sub(&a) {
        Some(d) => d,
        None    => distance_overflow::<I,D>(&from, &to)
      },
    _ => distance_overflow::<I,D>(&from, &to)
  }
}

/// Steps from `from` to `to` for values of the widest primitive types,
/// where subtracting the smaller from the larger may itself overflow.
pub fn distance_wide<W, D>(from: W, to: W) -> D
  where W: PrimInt + Debug, D: Distance {

  let d = if from > to {
            from.checked_sub(&to).and_then(|m| <D as NumCast>::from(m)).map(|m| -m)
          } else {
            to.checked_sub(&from).and_then(|m| <D as NumCast>::from(m))
          };
  d.unwrap_or_else(|| distance_overflow::<W,D>(&from, &to))
}

/// Steps from `from` to `to` for values with their own exact subtraction.
pub fn distance_generic<V, D>(from: &V, to: &V) -> D
  where V: Clone + Sub<Output = V> + ToPrimitive + Debug, D: Distance {

  <D as NumCast>::from(to.clone() - from.clone())
    .unwrap_or_else(|| distance_overflow::<V,D>(from, to))
}
