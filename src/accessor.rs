//! Purpose: The foreign accessor: the two operations behind the ABI surface.
//! Exports: `greet`, `describe`, `field_display`, protocol constants.
//! Role: Portable call logic; everything runtime-specific goes through
//! `ForeignEnv`, which is what keeps these operations testable off-device.
//! Invariants: `describe` emits exactly one log line per call. Release order
//! on success is native buffer, string value, class handle, and all three
//! happen before the line is emitted.

use crate::env::ForeignEnv;
use crate::error::AccessError;

/// Literal returned by `greet`.
pub const GREETING: &str = "Hello from C++";
/// Field read off the peer object's runtime class.
pub const FIELD_NAME: &str = "myString";
/// JVM type signature of `FIELD_NAME`.
pub const FIELD_SIG: &str = "Ljava/lang/String;";
/// Display fallback when the field holds no value.
pub const NULL_DISPLAY: &str = "null";
/// Log target; the hosting runtime surfaces it as the logcat tag.
pub const LOG_TAG: &str = "NativeCode";

/// Marshals the fixed greeting into a caller-owned string.
///
/// Takes no input besides the environment and depends on no prior state, so
/// every call yields the same text.
pub fn greet<E: ForeignEnv>(env: &mut E) -> Option<E::Text> {
    env.new_text(GREETING)
}

/// Reads `myString` off `peer` and writes its value to the diagnostic log.
///
/// Resolution failures produce one ERROR line and nothing else. A resolvable
/// peer whose field holds no value logs the `"null"` fallback; that is valid
/// domain data, not an error. The caller's control flow is never interrupted.
pub fn describe<E: ForeignEnv>(env: &mut E, peer: &E::Peer) {
    match field_display(env, peer) {
        Ok(display) => log::info!(target: LOG_TAG, "String from Kotlin: {display}"),
        Err(err) => log::error!(target: LOG_TAG, "{err}"),
    }
}

/// Resolves class and field, reads the value, and picks the display text.
///
/// Every handle acquired here is dropped before this returns, so `describe`
/// logs only after all runtime references have been released. The `?` exits
/// release whatever was acquired up to that point the same way.
pub fn field_display<E: ForeignEnv>(env: &mut E, peer: &E::Peer) -> Result<String, AccessError> {
    let class = env.resolve_class(peer).ok_or(AccessError::ClassResolution)?;
    let field = env
        .resolve_field(&class, FIELD_NAME, FIELD_SIG)
        .ok_or(AccessError::FieldResolution)?;
    let display = match env.read_field(peer, &field) {
        Some(value) => env
            .to_native(&value)
            .unwrap_or_else(|| NULL_DISPLAY.to_string()),
        None => NULL_DISPLAY.to_string(),
    };
    Ok(display)
}
