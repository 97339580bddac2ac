//! Robot path model.
//!
//! A [`Path`] is an ordered sequence of [`PathElement`]s plus the kinematic
//! constraints that apply to it, either globally ([`Constraints`]) or over a
//! sub-range of the elements ([`RangedConstraint`]).
//!
//! Every type here has value semantics: `Clone` produces a fully independent
//! deep copy, which is what the history relies on to keep its snapshots apart
//! from the live path.

mod constraint;
mod element;
mod path;

pub use constraint::{ConstraintKind, Constraints, RangedConstraint};
pub(crate) use element::clamp_ratio;
pub use element::{PathElement, RotationTarget, TranslationTarget};
pub use path::Path;
