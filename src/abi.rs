//! Purpose: Exported JNI symbols under the fixed `Java_*` naming convention.
//! Exports: `Java_com_example_nativelib_NativeLib_stringFromJNI`,
//! `Java_com_example_nativelib_NativeLib_stringFromKotlin`.
//! Role: Stable ABI surface reached through `System.loadLibrary("nativelib")`.
//! Invariants: Failures surface only on the diagnostic log; no exception or
//! error value ever propagates back to the managed caller.
//! Notes: Symbol names encode the owning class `com.example.nativelib.NativeLib`.

use jni::JNIEnv;
use jni::objects::JObject;
use jni::sys::jstring;

use crate::accessor;
use crate::jvm::JvmEnv;

/// Returns the fixed greeting as a caller-owned Java string. Marshaling a
/// short ASCII literal is assumed to succeed; if it does not, the caller
/// receives null rather than an exception.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_nativelib_NativeLib_stringFromJNI<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    init_logging();
    let mut jvm = JvmEnv::new(&mut env);
    match accessor::greet(&mut jvm) {
        Some(text) => text.into_raw(),
        None => std::ptr::null_mut(),
    }
}

/// Reads `myString` off the peer object and logs it; returns nothing.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_nativelib_NativeLib_stringFromKotlin<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    peer: JObject<'local>,
) {
    init_logging();
    let mut jvm = JvmEnv::new(&mut env);
    accessor::describe(&mut jvm, &peer);
}

/// Installs the logcat sink once per process. Off Android this is a no-op;
/// the embedder decides whether a `log` sink is present.
fn init_logging() {
    #[cfg(target_os = "android")]
    {
        use std::sync::Once;

        static INIT: Once = Once::new();
        INIT.call_once(|| {
            android_logger::init_once(
                android_logger::Config::default()
                    .with_max_level(log::LevelFilter::Info)
                    .with_tag(accessor::LOG_TAG),
            );
        });
    }
}
