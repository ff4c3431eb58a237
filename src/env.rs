//! Purpose: Capability seam between the accessor logic and the hosting runtime.
//! Exports: `ForeignEnv`.
//! Role: Lets the field-access protocol run against the JVM in production and
//! against an in-process double in tests.
//! Invariants: `Class` and `Value` handles release their runtime reference on
//! drop; absence is a discriminated outcome (`None`), never a panic.

/// Capability surface a managed-runtime caller supplies for one call.
///
/// Implementations are scoped to a single entry-point invocation. Handles
/// produced here must not outlive the call, and dropping a `Class` or `Value`
/// handle releases the underlying runtime reference, so release is guaranteed
/// structurally rather than sequenced by hand on every branch.
pub trait ForeignEnv {
    /// Borrowed reference to the caller-owned peer object.
    type Peer;
    /// Resolved runtime class handle; dropping it releases the reference.
    type Class;
    /// Field identifier on a resolved class. Plain token, nothing to release.
    type Field;
    /// String value fetched off the peer; dropping it releases the reference.
    type Value;
    /// String object handed back to the caller.
    type Text;

    /// Resolves the runtime class of `peer`. `None` when the runtime cannot
    /// determine the class.
    fn resolve_class(&mut self, peer: &Self::Peer) -> Option<Self::Class>;

    /// Resolves the field named `name` with type signature `sig` on `class`.
    /// `None` when the class declares no such field.
    fn resolve_field(
        &mut self,
        class: &Self::Class,
        name: &str,
        sig: &str,
    ) -> Option<Self::Field>;

    /// Reads the field's current value off `peer`. `None` means the field
    /// holds no value; that is valid domain data, not a failure.
    fn read_field(&mut self, peer: &Self::Peer, field: &Self::Field) -> Option<Self::Value>;

    /// Converts a runtime string value to a native string. Any native
    /// character buffer acquired for the conversion is released before this
    /// returns.
    fn to_native(&mut self, value: &Self::Value) -> Option<String>;

    /// Marshals `text` into a caller-owned string object.
    fn new_text(&mut self, text: &str) -> Option<Self::Text>;
}
