use serde::{Deserialize, Serialize};

use super::{Constraints, PathElement, RangedConstraint};

/// An editable robot path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Path {
    /// Targets in driving order
    pub path_elements: Vec<PathElement>,
    /// Path-wide constraint overrides
    pub constraints: Constraints,
    /// Constraint overrides for sub-ranges of the path
    pub ranged_constraints: Vec<RangedConstraint>,
}

impl Path {
    /// Create an empty path with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from its elements, with no constraints.
    pub fn from_elements(elements: impl IntoIterator<Item = PathElement>) -> Self {
        Self {
            path_elements: elements.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, element: impl Into<PathElement>) {
        self.path_elements.push(element.into());
    }

    pub fn len(&self) -> usize {
        self.path_elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path_elements.is_empty()
    }

    /// Number of translation targets (the waypoints ranged constraints index).
    pub fn translation_count(&self) -> usize {
        self.path_elements
            .iter()
            .filter(|element| element.is_translation())
            .count()
    }
}
