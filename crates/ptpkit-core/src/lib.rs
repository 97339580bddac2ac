//! # PTPKit Core
//!
//! Core types and contracts shared by every PTPKit crate:
//! the robot path model, the path codec contract with its default JSON
//! implementation, and the single-threaded shared-state aliases used by the
//! editing session.

pub mod codec;
pub mod error;
pub mod model;
pub mod types;

pub use codec::{example_paths, JsonPathCodec, PathCodec, EXAMPLE_PATH_FILE};
pub use error::{CodecError, CodecResult};
pub use model::{
    ConstraintKind, Constraints, Path, PathElement, RangedConstraint, RotationTarget,
    TranslationTarget,
};
pub use types::{shared, ChangeCallback, Shared};
