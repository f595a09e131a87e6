// Test support: drive properties through proptest.

use std::fmt::Debug;
use proptest::strategy::*;
use proptest::test_runner::*;

/// Check a property on values drawn from `strategy`.
/// The property returns `None` to reject inputs it does not apply to.
pub fn do_test<T: Debug>
    ( strategy: impl Strategy<Value = T>
    , p:        impl Fn(T) -> Option<bool>
    ) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&strategy, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}
