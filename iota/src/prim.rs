// Capabilities of the primitive integer types.
// The distance type is the next wider signed integer, or i128 when
// there is nothing wider.

use std::cmp::Ordering;
use num::traits::NumCast;
use crate::capability::*;
use crate::bound::*;
use crate::cursor::Cursor;
use crate::closed::ClosedCursor;
use crate::arith;

macro_rules! unsigned_iota {
  ( $( $t:ty => $d:ty ),* ) => { $(

    impl Incrementable for $t {
      const EXACT: bool = true;
      fn increment(&mut self) { arith::advance_unsigned(self, 1 as $d) }
      fn order(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
      fn steps_to(&self, other: &Self) -> Option<usize> {
        if other < self { return None }
        <usize as NumCast>::from(*other - *self)
      }
    }

    impl Decrementable for $t {
      fn decrement(&mut self) { arith::advance_unsigned(self, -1 as $d) }
    }

    impl Advanceable for $t {
      type Distance = $d;
      fn advance(&mut self, n: $d) { arith::advance_unsigned(self, n) }
      fn distance(&self, other: &Self) -> $d {
        arith::distance_unsigned(self, other)
      }
    }

  )* };
}

macro_rules! signed_iota {
  ( $( $t:ty => $d:ty ),* ) => { $(

    impl Incrementable for $t {
      const EXACT: bool = true;
      fn increment(&mut self) { arith::advance_signed(self, 1 as $d) }
      fn order(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
      fn steps_to(&self, other: &Self) -> Option<usize> {
        if other < self { return None }
        (*other as i128).checked_sub(*self as i128)
                        .and_then(|n| <usize as NumCast>::from(n))
      }
    }

    impl Decrementable for $t {
      fn decrement(&mut self) { arith::advance_signed(self, -1 as $d) }
    }

    impl Advanceable for $t {
      type Distance = $d;
      fn advance(&mut self, n: $d) { arith::advance_signed(self, n) }
      fn distance(&self, other: &Self) -> $d {
        arith::distance_signed(*self, *other)
      }
    }

  )* };
}

unsigned_iota!{ u8 => i16, u16 => i32, u32 => i64, u64 => i128
              , usize => i128, u128 => i128 }

signed_iota!{ i8 => i16, i16 => i32, i32 => i64, i64 => i128
            , isize => i128, i128 => i128 }


// Bounds of another integer type with the same signedness.
// Both sides are compared in the widest type of that signedness.
macro_rules! mixed_bounds {
  ( $wide:ty ; $( $from:ty => [ $( $to:ty ),* ] ),* ) => { $( $(

    impl Bound<$from> for $to {
      const CARDINALITY: Cardinality = Cardinality::Finite;

      fn is_end(&self, value: &$from) -> bool {
        *value as $wide == *self as $wide
      }

      fn is_before(&self, from: &$from) -> Option<bool> {
        Some((*self as $wide) < (*from as $wide))
      }

      fn size_hint(&self, value: &$from) -> (usize, Option<usize>) {
        match (*value as $wide).steps_to(&(*self as $wide)) {
          Some(n) => (n, Some(n)),
          None    => (0, None)
        }
      }
    }

    impl SizedBound<$from> for $to {
      fn distance_from(&self, value: &$from) -> <$from as Advanceable>::Distance {
        arith::distance_wide(*value as $wide, *self as $wide)
      }
    }

  )* )* };
}

mixed_bounds!{ u128 ;
    u8    => [ u16, u32, u64, u128, usize ]
  , u16   => [ u8, u32, u64, u128, usize ]
  , u32   => [ u8, u16, u64, u128, usize ]
  , u64   => [ u8, u16, u32, u128, usize ]
  , u128  => [ u8, u16, u32, u64, usize ]
  , usize => [ u8, u16, u32, u64, u128 ] }

mixed_bounds!{ i128 ;
    i8    => [ i16, i32, i64, i128, isize ]
  , i16   => [ i8, i32, i64, i128, isize ]
  , i32   => [ i8, i16, i64, i128, isize ]
  , i64   => [ i8, i16, i32, i128, isize ]
  , i128  => [ i8, i16, i32, i64, isize ]
  , isize => [ i8, i16, i32, i64, i128 ] }


// Same-typed ranges whose length always fits in a usize.
macro_rules! exact_size {
  ( cursor: $( $t:ty ),* ; closed: $( $c:ty ),* ) => {
    $( impl ExactSizeIterator for Cursor<$t, $t> {} )*
    $( impl ExactSizeIterator for ClosedCursor<$c, $c> {} )*
  };
}

exact_size!{ cursor: u8, u16, u32, usize, i8, i16, i32, isize
           ; closed: u8, u16, i8, i16 }
