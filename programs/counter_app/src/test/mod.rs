
use anchor_lang::prelude::*;

/// Asserts that `result` failed with `expected`, comparing program error codes
pub fn assert_error<T: std::fmt::Debug>(
    result: Result<T>,
    expected: impl Into<anchor_lang::error::Error>,
) {
    let actual = result.expect_err("expected an error");
    assert_eq!(ProgramError::from(actual), ProgramError::from(expected.into()));
}
