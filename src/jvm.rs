//! Purpose: `ForeignEnv` implementation over the JVM via the `jni` crate.
//! Exports: `JvmEnv`.
//! Role: Production runtime adapter used by the ABI entry points.
//! Invariants: Local references ride in `AutoLocal` guards; the native
//! character buffer (`JavaStr`) never outlives `to_native`.
//! Invariants: A pending Java exception raised by a failed lookup is cleared
//! before returning, so the caller never observes a throw from this library.

use jni::JNIEnv;
use jni::objects::{AutoLocal, JClass, JFieldID, JObject, JString};
use jni::signature::ReturnType;

use crate::env::ForeignEnv;

/// One-call adapter over a borrowed `JNIEnv`.
pub struct JvmEnv<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
}

impl<'a, 'local> JvmEnv<'a, 'local> {
    pub fn new(env: &'a mut JNIEnv<'local>) -> Self {
        JvmEnv { env }
    }

    /// Failed lookups leave a Java exception pending; swallow it so the
    /// failure surfaces only through the diagnostic log.
    fn clear_pending_exception(&mut self) {
        if self.env.exception_check().unwrap_or(false) {
            let _ = self.env.exception_clear();
        }
    }
}

impl<'a, 'local> ForeignEnv for JvmEnv<'a, 'local> {
    type Peer = JObject<'local>;
    type Class = AutoLocal<'local, JClass<'local>>;
    type Field = JFieldID;
    type Value = AutoLocal<'local, JString<'local>>;
    type Text = JString<'local>;

    fn resolve_class(&mut self, peer: &Self::Peer) -> Option<Self::Class> {
        match self.env.get_object_class(peer) {
            Ok(class) if !class.as_raw().is_null() => Some(self.env.auto_local(class)),
            Ok(_) | Err(_) => {
                self.clear_pending_exception();
                None
            }
        }
    }

    fn resolve_field(&mut self, class: &Self::Class, name: &str, sig: &str) -> Option<Self::Field> {
        match self.env.get_field_id(&**class, name, sig) {
            Ok(field) => Some(field),
            Err(_) => {
                self.clear_pending_exception();
                None
            }
        }
    }

    fn read_field(&mut self, peer: &Self::Peer, field: &Self::Field) -> Option<Self::Value> {
        let value = match self.env.get_field_unchecked(peer, *field, ReturnType::Object) {
            Ok(value) => value,
            Err(_) => {
                self.clear_pending_exception();
                return None;
            }
        };
        let obj = value.l().ok()?;
        if obj.as_raw().is_null() {
            // Field holds no value; valid domain data.
            return None;
        }
        // The declared signature Ljava/lang/String; pins the runtime type.
        let text = unsafe { JString::from_raw(obj.into_raw()) };
        Some(self.env.auto_local(text))
    }

    fn to_native(&mut self, value: &Self::Value) -> Option<String> {
        match self.env.get_string(&**value) {
            Ok(native) => Some(native.into()),
            Err(_) => {
                self.clear_pending_exception();
                None
            }
        }
    }

    fn new_text(&mut self, text: &str) -> Option<Self::Text> {
        match self.env.new_string(text) {
            Ok(text) => Some(text),
            Err(_) => {
                self.clear_pending_exception();
                None
            }
        }
    }
}
