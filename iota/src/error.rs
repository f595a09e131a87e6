use thiserror::Error;

/// Misuse of a sequence or cursor.
/// These are programmer errors: the panicking entry points report them
/// through [`ContractViolation::raise`], the `try_*` constructors return them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {

  /// The lower bound of a sequence is ordered after its upper bound.
  #[error("lower bound {from} is past upper bound {to}")]
  InvertedBounds { from: String, to: String },

  #[error("cannot read a cursor at the end of its sequence")]
  ReadPastEnd,

  #[error("cannot step a cursor past the end of its sequence")]
  StepPastEnd,

  /// A closed cursor was asked to jump beyond its exhausted position.
  #[error("cannot jump {requested} positions, the bound is {ahead} steps ahead")]
  JumpPastEnd { requested: String, ahead: String },

  /// A cursor was asked to jump beyond the bound of its sequence.
  #[error("cannot jump {requested} positions past bound {bound}")]
  JumpPastBound { requested: String, bound: String },

  /// Stepping `value` by `step` leaves the range of `ty`.
  #[error("{value} stepped by {step} is out of range for {ty}")]
  Overflow { value: String, step: String, ty: &'static str },

  /// The number of steps between two values does not fit the distance type.
  #[error("distance from {from} to {to} does not fit in {ty}")]
  DistanceOverflow { from: String, to: String, ty: &'static str },
}

impl ContractViolation {

  /// Report the violation and abort the current operation.
  #[track_caller]
  pub fn raise(self) -> ! {
    tracing::error!(violation = %self, "iota contract violation");
    panic!("{}", self)
  }
}


#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn messages() {
    let e = ContractViolation::InvertedBounds { from: "5".into(), to: "1".into() };
    assert_eq!(e.to_string(), "lower bound 5 is past upper bound 1");
    let e = ContractViolation::Overflow { value: "2".into()
                                        , step:  "-5".into()
                                        , ty:    "u32" };
    assert_eq!(e.to_string(), "2 stepped by -5 is out of range for u32");
  }

  #[test]
  #[should_panic(expected = "cannot read a cursor")]
  fn raise_panics() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    ContractViolation::ReadPastEnd.raise()
  }
}
