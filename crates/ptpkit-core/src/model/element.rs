use serde::{Deserialize, Serialize};

/// A waypoint the robot must drive through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationTarget {
    /// Field X coordinate in meters
    pub x_meters: f64,
    /// Field Y coordinate in meters
    pub y_meters: f64,
    /// Blending distance used when passing through this waypoint.
    ///
    /// `None` until a codec fills it from the project defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate_handoff_radius_meters: Option<f64>,
}

impl TranslationTarget {
    pub fn new(x_meters: f64, y_meters: f64) -> Self {
        Self {
            x_meters,
            y_meters,
            intermediate_handoff_radius_meters: None,
        }
    }

    pub fn with_handoff_radius(mut self, radius_meters: f64) -> Self {
        self.intermediate_handoff_radius_meters = Some(radius_meters);
        self
    }
}

/// A heading the robot must reach somewhere between two translation targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationTarget {
    /// Target heading in radians
    pub rotation_radians: f64,
    /// Position of the rotation between its neighbouring waypoints, in [0, 1]
    pub t_ratio: f64,
}

impl RotationTarget {
    /// Create a rotation target, clamping the position ratio into [0, 1].
    pub fn new(rotation_radians: f64, t_ratio: f64) -> Self {
        Self {
            rotation_radians,
            t_ratio: clamp_ratio(t_ratio),
        }
    }
}

/// One target in a [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathElement {
    Translation(TranslationTarget),
    Rotation(RotationTarget),
}

impl PathElement {
    /// The serialized type tag of this element.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Translation(_) => "translation",
            Self::Rotation(_) => "rotation",
        }
    }

    pub fn is_translation(&self) -> bool {
        matches!(self, Self::Translation(_))
    }
}

impl From<TranslationTarget> for PathElement {
    fn from(target: TranslationTarget) -> Self {
        Self::Translation(target)
    }
}

impl From<RotationTarget> for PathElement {
    fn from(target: RotationTarget) -> Self {
        Self::Rotation(target)
    }
}

pub(crate) fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}
