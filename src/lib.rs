//! Purpose: Native library behind the Kotlin `NativeLib` wrapper.
//! Exports: `abi` (JNI entry points), `accessor`, `env`, `error`, `jvm`.
//! Role: Loaded via `System.loadLibrary("nativelib")`; holds no state and has
//! no side effects beyond the diagnostic log.
//! Invariants: Every runtime reference acquired during a call is released
//! before that call returns, on success and failure paths alike.
pub mod abi;
pub mod accessor;
pub mod env;
pub mod error;
pub mod jvm;

#[cfg(test)]
mod mock;
