//! Purpose: Error taxonomy for the field-access protocol.
//! Exports: `AccessError`.
//! Invariants: Display texts are stable; they are the logged diagnostic
//! payloads the Kotlin side greps for.
//! Invariants: Errors never cross the ABI; callers observe log lines only.

use std::error::Error as StdError;
use std::fmt;

/// Failure modes of `describe`. Both are non-fatal: each is logged at ERROR
/// severity and the operation returns without interrupting the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessError {
    /// The peer's runtime class could not be determined.
    ClassResolution,
    /// The resolved class does not declare the expected field.
    FieldResolution,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::ClassResolution => write!(f, "Failed to get class for MyKotlinObject"),
            AccessError::FieldResolution => write!(f, "Failed to get field ID for myString"),
        }
    }
}

impl StdError for AccessError {}
