//! Purpose: Test doubles for the `ForeignEnv` seam plus a capturing log sink.
//! Exports: `MockEnv`, `MockPeer`, `logger::capture`.
//! Role: Unit-test support; compiled only under `cfg(test)`.
//! Invariants: Guard drops bump the shared release counters, which is what
//! lets tests assert the release-on-every-path discipline.

use std::cell::Cell;
use std::rc::Rc;

use crate::accessor::{FIELD_NAME, FIELD_SIG};
use crate::env::ForeignEnv;

/// Caller-side stand-in: controls how far resolution gets and what the field
/// holds.
#[derive(Clone, Default)]
pub struct MockPeer {
    resolvable: bool,
    has_field: bool,
    my_string: Option<String>,
}

impl MockPeer {
    pub fn with_string(text: &str) -> Self {
        MockPeer {
            resolvable: true,
            has_field: true,
            my_string: Some(text.to_string()),
        }
    }

    /// Field exists but holds no value.
    pub fn with_null_string() -> Self {
        MockPeer {
            resolvable: true,
            has_field: true,
            my_string: None,
        }
    }

    /// Class resolves but declares no `myString` field.
    pub fn without_field() -> Self {
        MockPeer {
            resolvable: true,
            has_field: false,
            my_string: None,
        }
    }

    /// Degenerate reference whose class cannot be determined.
    pub fn unresolvable() -> Self {
        MockPeer::default()
    }
}

/// Class handle double; flips the shared release counter on drop.
pub struct MockClass {
    peer: MockPeer,
    releases: Rc<Cell<usize>>,
}

impl Drop for MockClass {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// String value double; flips the shared release counter on drop.
pub struct MockValue {
    text: String,
    releases: Rc<Cell<usize>>,
}

impl Drop for MockValue {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

#[derive(Default)]
pub struct MockEnv {
    pub classes_acquired: usize,
    pub values_acquired: usize,
    pub field_lookups: usize,
    /// When set, `to_native` reports conversion failure for present values.
    pub conversion_fails: bool,
    pub class_releases: Rc<Cell<usize>>,
    pub value_releases: Rc<Cell<usize>>,
}

impl ForeignEnv for MockEnv {
    type Peer = MockPeer;
    type Class = MockClass;
    type Field = ();
    type Value = MockValue;
    type Text = String;

    fn resolve_class(&mut self, peer: &MockPeer) -> Option<MockClass> {
        if !peer.resolvable {
            return None;
        }
        self.classes_acquired += 1;
        Some(MockClass {
            peer: peer.clone(),
            releases: Rc::clone(&self.class_releases),
        })
    }

    fn resolve_field(&mut self, class: &MockClass, name: &str, sig: &str) -> Option<()> {
        self.field_lookups += 1;
        (class.peer.has_field && name == FIELD_NAME && sig == FIELD_SIG).then_some(())
    }

    fn read_field(&mut self, peer: &MockPeer, _field: &()) -> Option<MockValue> {
        let text = peer.my_string.clone()?;
        self.values_acquired += 1;
        Some(MockValue {
            text,
            releases: Rc::clone(&self.value_releases),
        })
    }

    fn to_native(&mut self, value: &MockValue) -> Option<String> {
        if self.conversion_fails {
            return None;
        }
        Some(value.text.clone())
    }

    fn new_text(&mut self, text: &str) -> Option<String> {
        Some(text.to_string())
    }
}

pub mod logger {
    //! Capturing `log::Log` sink so tests can assert exact diagnostic lines.
    //! Logging tests are serialized through the guard returned by `capture`;
    //! the process-wide logger is installed once and never torn down.

    use std::sync::{Mutex, MutexGuard, Once};

    use log::{Level, Log, Metadata, Record};

    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Line {
        pub level: Level,
        pub target: String,
        pub message: String,
    }

    struct Capture {
        lines: Mutex<Vec<Line>>,
    }

    impl Log for Capture {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.lines.lock().unwrap().push(Line {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            });
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        lines: Mutex::new(Vec::new()),
    };
    static INSTALL: Once = Once::new();
    static SERIAL: Mutex<()> = Mutex::new(());

    /// Installs the capture sink (first call only), clears captured lines,
    /// and holds a lock so concurrent logging tests cannot interleave.
    pub fn capture() -> CaptureGuard {
        INSTALL.call_once(|| {
            log::set_logger(&CAPTURE).expect("install capture logger");
            log::set_max_level(log::LevelFilter::Trace);
        });
        let serial = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        CAPTURE.lines.lock().unwrap().clear();
        CaptureGuard { _serial: serial }
    }

    pub struct CaptureGuard {
        _serial: MutexGuard<'static, ()>,
    }

    impl CaptureGuard {
        pub fn lines(&self) -> Vec<Line> {
            CAPTURE.lines.lock().unwrap().clone()
        }
    }
}
