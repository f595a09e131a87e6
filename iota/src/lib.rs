//! Lazy sequences of consecutive values, "iota" ranges.
//!
//! A sequence starts at a value and is either unbounded, bounded by a value
//! of the same type (half-open with [`iota_to`], closed with
//! [`closed_iota`]), or bounded by a sentinel of another type.
//! Cursors expose as much traversal as the value type supports:
//! stepping for [`Incrementable`] values, stepping back for
//! [`Decrementable`] ones, and constant time jumps and distances for
//! [`Advanceable`] ones. All arithmetic is checked; misuse panics with a
//! [`ContractViolation`] rather than wrapping.

pub mod capability;
pub mod arith;
pub mod prim;
#[cfg(feature = "bigint")]
pub mod bigint;
pub mod bound;
pub mod error;
pub mod cursor;
pub mod closed;
pub mod view;

#[cfg(test)]
pub mod proptest;

pub use crate::capability::{Incrementable,Decrementable,Advanceable,Distance};
pub use crate::bound::{Bound,SizedBound,Unreachable,Cardinality};
pub use crate::cursor::Cursor;
pub use crate::closed::ClosedCursor;
pub use crate::error::ContractViolation;
pub use crate::view::{Iota,ClosedIota};
pub use crate::view::{iota,iota_to,try_iota_to,closed_iota,try_closed_iota};
pub use crate::view::{ints,ints_from};
