//! Change-notification plumbing shared by commands and the history manager.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use uuid::Uuid;

/// Handle returned when an observer is registered, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(Uuid);

impl CallbackId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({})", &self.0.to_string()[..8])
    }
}

/// Run `callback`, containing any panic it raises.
///
/// Returns `false` if the callback panicked.
pub(crate) fn invoke_isolated(callback: &dyn Fn(), context: &str) -> bool {
    match catch_unwind(AssertUnwindSafe(callback)) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!("Panic in {} callback", context);
            false
        }
    }
}
