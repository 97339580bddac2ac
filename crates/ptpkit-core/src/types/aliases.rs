//! Type aliases for the editing session's shared state.
//!
//! The editor runs on a single thread: every command transition and every
//! persistence call happens synchronously on the caller. Shared state is
//! therefore `Rc<RefCell<T>>`, never a lock.
//!
//! ```rust
//! use ptpkit_core::types::{shared, Shared};
//! use ptpkit_core::Path;
//!
//! let live: Shared<Path> = shared(Path::new());
//! assert!(live.borrow().is_empty());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// The live path and the project manager are held this way so that commands
/// sitting in the history can write their snapshots back into them.
pub type Shared<T> = Rc<RefCell<T>>;

/// A change-notification callback with no parameters or return value.
///
/// Reference counted so one callback can be attached to many commands.
pub type ChangeCallback = Rc<dyn Fn()>;

/// Wrap a value in a new [`Shared`] cell.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
