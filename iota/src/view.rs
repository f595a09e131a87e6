// Sequences, and the functions that make them.

use num::traits::PrimInt;
use crate::capability::*;
use crate::bound::*;
use crate::cursor::Cursor;
use crate::closed::ClosedCursor;
use crate::error::ContractViolation;

fn check_bounds<V: Incrementable, B: Bound<V>>(from: &V, to: &B)
  -> Result<(), ContractViolation> {
  if to.is_before(from) == Some(true) {
    return Err(ContractViolation::InvertedBounds { from: format!("{:?}", from)
                                                 , to:   format!("{:?}", to)
                                                 })
  }
  Ok(())
}


/// The values `from`, `from + 1`, ... up to, but not including, `to`.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct Iota<V, B = Unreachable> {
  from: V,
  to:   B
}

impl<V: Incrementable, B: Bound<V>> Iota<V, B> {

  pub const CARDINALITY: Cardinality = B::CARDINALITY;

  /// Make a sequence, or explain why the bounds are not valid.
  pub fn try_new(from: V, to: B) -> Result<Self, ContractViolation> {
    check_bounds(&from, &to)?;
    tracing::trace!(?from, ?to, cardinality = ?Self::CARDINALITY, "iota");
    Ok(Iota { from, to })
  }

  /// Make a sequence. Panics if `from` is ordered after `to`.
  pub fn new(from: V, to: B) -> Self {
    Self::try_new(from, to).unwrap_or_else(|e| e.raise())
  }

  /// The first value, if the sequence is not empty.
  pub fn start(&self) -> &V { &self.from }

  pub fn bound(&self) -> &B { &self.to }

  pub fn cardinality(&self) -> Cardinality { Self::CARDINALITY }

  /// A cursor at the first position.
  pub fn begin(&self) -> Cursor<V, B> {
    Cursor::new(self.from.clone(), self.to.clone())
  }

  pub fn iter(&self) -> Cursor<V, B> { self.begin() }

  pub fn is_empty(&self) -> bool { self.begin().at_end() }
}

impl<V: Incrementable> Iota<V, V> {

  /// A cursor just past the last element.
  pub fn end(&self) -> Cursor<V, V> {
    Cursor::new(self.to.clone(), self.to.clone())
  }
}

impl<V: Advanceable, B: SizedBound<V>> Iota<V, B> {

  /// The number of elements.
  pub fn size(&self) -> V::Distance { self.begin().distance_to_end() }
}

impl<V: Incrementable, B: Bound<V>> IntoIterator for Iota<V, B> {
  type Item     = V;
  type IntoIter = Cursor<V, B>;
  fn into_iter(self) -> Self::IntoIter { Cursor::new(self.from, self.to) }
}

impl<'a, V: Incrementable, B: Bound<V>> IntoIterator for &'a Iota<V, B> {
  type Item     = V;
  type IntoIter = Cursor<V, B>;
  fn into_iter(self) -> Self::IntoIter { self.begin() }
}


/// The values `from`, `from + 1`, ... up to and including `to`.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct ClosedIota<V, B = V> {
  from: V,
  to:   B
}

impl<V: Incrementable, B: Bound<V>> ClosedIota<V, B> {

  pub const CARDINALITY: Cardinality = B::CARDINALITY;

  pub fn try_new(from: V, to: B) -> Result<Self, ContractViolation> {
    check_bounds(&from, &to)?;
    tracing::trace!(?from, ?to, cardinality = ?Self::CARDINALITY, "closed iota");
    Ok(ClosedIota { from, to })
  }

  /// Make a sequence. Panics if `from` is ordered after `to`.
  pub fn new(from: V, to: B) -> Self {
    Self::try_new(from, to).unwrap_or_else(|e| e.raise())
  }

  pub fn start(&self) -> &V { &self.from }

  pub fn bound(&self) -> &B { &self.to }

  pub fn cardinality(&self) -> Cardinality { Self::CARDINALITY }

  pub fn begin(&self) -> ClosedCursor<V, B> {
    ClosedCursor::new(self.from.clone(), self.to.clone(), false)
  }

  pub fn iter(&self) -> ClosedCursor<V, B> { self.begin() }
}

impl<V: Incrementable> ClosedIota<V, V> {

  /// The exhausted position, one past `to`.
  pub fn end(&self) -> ClosedCursor<V, V> {
    ClosedCursor::new(self.to.clone(), self.to.clone(), true)
  }
}

impl<V: Advanceable, B: SizedBound<V>> ClosedIota<V, B> {

  /// The number of elements.
  pub fn size(&self) -> V::Distance { self.begin().distance_to_end() }
}

impl<V: Incrementable, B: Bound<V>> IntoIterator for ClosedIota<V, B> {
  type Item     = V;
  type IntoIter = ClosedCursor<V, B>;
  fn into_iter(self) -> Self::IntoIter {
    ClosedCursor::new(self.from, self.to, false)
  }
}

impl<'a, V: Incrementable, B: Bound<V>> IntoIterator for &'a ClosedIota<V, B> {
  type Item     = V;
  type IntoIter = ClosedCursor<V, B>;
  fn into_iter(self) -> Self::IntoIter { self.begin() }
}


/// `from`, `from + 1`, ... without end.
pub fn iota<V: Incrementable>(from: V) -> Iota<V> {
  Iota::new(from, Unreachable)
}

/// `from` up to, but not including, `to`.
/// `to` may be a value or a sentinel; see [`Bound`].
pub fn iota_to<V: Incrementable, B: Bound<V>>(from: V, to: B) -> Iota<V, B> {
  Iota::new(from, to)
}

pub fn try_iota_to<V: Incrementable, B: Bound<V>>(from: V, to: B)
  -> Result<Iota<V, B>, ContractViolation> {
  Iota::try_new(from, to)
}

/// `from` up to and including `to`.
pub fn closed_iota<V: Incrementable, B: Bound<V>>(from: V, to: B)
  -> ClosedIota<V, B> {
  ClosedIota::new(from, to)
}

pub fn try_closed_iota<V: Incrementable, B: Bound<V>>(from: V, to: B)
  -> Result<ClosedIota<V, B>, ContractViolation> {
  ClosedIota::try_new(from, to)
}

/// Integers in `[from, to)`.
pub fn ints<I: PrimInt + Advanceable>(from: I, to: I) -> Iota<I, I> {
  Iota::new(from, to)
}

/// Integers from `from`, without end.
pub fn ints_from<I: PrimInt + Advanceable>(from: I) -> Iota<I> {
  Iota::new(from, Unreachable)
}
