//! Clipboard seam.
//!
//! The toolkit never talks to a clipboard directly; callers hand in an
//! ordered list of writers (primary first, then fallbacks) and get back
//! whether any of them accepted the text.

use tracing::{debug, warn};

use crate::error::DirectoryResult;

/// Something that can place plain text on a clipboard.
pub trait ClipboardWriter {
    /// Short name used in logs, e.g. "pbcopy" or "osc52".
    fn name(&self) -> &str;

    fn write_text(&self, text: &str) -> DirectoryResult<()>;
}

/// Try each writer in order until one succeeds. Never fails; returns
/// whether the text reached a clipboard.
pub fn write_with_fallback(text: &str, writers: &[&dyn ClipboardWriter]) -> bool {
    for writer in writers {
        match writer.write_text(text) {
            Ok(()) => {
                debug!(backend = writer.name(), bytes = text.len(), "copied to clipboard");
                return true;
            }
            Err(e) => warn!(backend = writer.name(), "clipboard write failed: {e}"),
        }
    }
    false
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;
    use crate::error::DirectoryError;

    /// Records what it was given; optionally refuses every write.
    pub struct RecordingClipboard {
        pub name: &'static str,
        pub fail: bool,
        pub written: RefCell<Vec<String>>,
    }

    impl RecordingClipboard {
        pub fn working(name: &'static str) -> Self {
            RecordingClipboard {
                name,
                fail: false,
                written: RefCell::new(Vec::new()),
            }
        }

        pub fn broken(name: &'static str) -> Self {
            RecordingClipboard {
                fail: true,
                ..Self::working(name)
            }
        }

        pub fn calls(&self) -> usize {
            self.written.borrow().len()
        }
    }

    impl ClipboardWriter for RecordingClipboard {
        fn name(&self) -> &str {
            self.name
        }

        fn write_text(&self, text: &str) -> DirectoryResult<()> {
            self.written.borrow_mut().push(text.to_string());
            if self.fail {
                Err(DirectoryError::Clipboard {
                    backend: self.name.to_string(),
                    reason: "refused".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingClipboard;
    use super::*;

    #[test]
    fn test_primary_success_skips_fallback() {
        let primary = RecordingClipboard::working("primary");
        let fallback = RecordingClipboard::working("fallback");

        assert!(write_with_fallback("hello", &[&primary, &fallback]));
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 0);
    }

    #[test]
    fn test_falls_back_when_primary_fails() {
        let primary = RecordingClipboard::broken("primary");
        let fallback = RecordingClipboard::working("fallback");

        assert!(write_with_fallback("hello", &[&primary, &fallback]));
        assert_eq!(fallback.written.borrow()[0], "hello");
    }

    #[test]
    fn test_all_failing_reports_false() {
        let primary = RecordingClipboard::broken("primary");
        let fallback = RecordingClipboard::broken("fallback");

        assert!(!write_with_fallback("hello", &[&primary, &fallback]));
        assert!(!write_with_fallback("hello", &[]));
    }
}
