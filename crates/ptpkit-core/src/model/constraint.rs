use serde::{Deserialize, Serialize};

/// The kinematic limits a constraint can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    MaxVelocityMetersPerSec,
    MaxAccelerationMetersPerSec2,
    MaxVelocityDegPerSec,
    MaxAccelerationDegPerSec2,
    EndTranslationToleranceMeters,
    EndRotationToleranceDeg,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 6] = [
        Self::MaxVelocityMetersPerSec,
        Self::MaxAccelerationMetersPerSec2,
        Self::MaxVelocityDegPerSec,
        Self::MaxAccelerationDegPerSec2,
        Self::EndTranslationToleranceMeters,
        Self::EndRotationToleranceDeg,
    ];

    /// Key under which this constraint is stored, and under which its
    /// project-wide default is looked up.
    pub fn key(&self) -> &'static str {
        match self {
            Self::MaxVelocityMetersPerSec => "max_velocity_meters_per_sec",
            Self::MaxAccelerationMetersPerSec2 => "max_acceleration_meters_per_sec2",
            Self::MaxVelocityDegPerSec => "max_velocity_deg_per_sec",
            Self::MaxAccelerationDegPerSec2 => "max_acceleration_deg_per_sec2",
            Self::EndTranslationToleranceMeters => "end_translation_tolerance_meters",
            Self::EndRotationToleranceDeg => "end_rotation_tolerance_deg",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Path-wide constraint overrides. `None` means "use the project default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_velocity_meters_per_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_acceleration_meters_per_sec2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_velocity_deg_per_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_acceleration_deg_per_sec2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_translation_tolerance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_rotation_tolerance_deg: Option<f64>,
}

impl Constraints {
    pub fn get(&self, kind: ConstraintKind) -> Option<f64> {
        match kind {
            ConstraintKind::MaxVelocityMetersPerSec => self.max_velocity_meters_per_sec,
            ConstraintKind::MaxAccelerationMetersPerSec2 => self.max_acceleration_meters_per_sec2,
            ConstraintKind::MaxVelocityDegPerSec => self.max_velocity_deg_per_sec,
            ConstraintKind::MaxAccelerationDegPerSec2 => self.max_acceleration_deg_per_sec2,
            ConstraintKind::EndTranslationToleranceMeters => self.end_translation_tolerance_meters,
            ConstraintKind::EndRotationToleranceDeg => self.end_rotation_tolerance_deg,
        }
    }

    pub fn set(&mut self, kind: ConstraintKind, value: Option<f64>) {
        let slot = match kind {
            ConstraintKind::MaxVelocityMetersPerSec => &mut self.max_velocity_meters_per_sec,
            ConstraintKind::MaxAccelerationMetersPerSec2 => {
                &mut self.max_acceleration_meters_per_sec2
            }
            ConstraintKind::MaxVelocityDegPerSec => &mut self.max_velocity_deg_per_sec,
            ConstraintKind::MaxAccelerationDegPerSec2 => &mut self.max_acceleration_deg_per_sec2,
            ConstraintKind::EndTranslationToleranceMeters => {
                &mut self.end_translation_tolerance_meters
            }
            ConstraintKind::EndRotationToleranceDeg => &mut self.end_rotation_tolerance_deg,
        };
        *slot = value;
    }

    /// Whether no override is set at all.
    pub fn is_empty(&self) -> bool {
        ConstraintKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

/// A constraint override applying to the elements between two ordinals
/// (inclusive) of the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangedConstraint {
    pub key: ConstraintKind,
    pub value: f64,
    pub start_ordinal: usize,
    pub end_ordinal: usize,
}

impl RangedConstraint {
    /// Create a ranged constraint; the ordinals are ordered so that
    /// `start_ordinal <= end_ordinal`.
    pub fn new(key: ConstraintKind, value: f64, start_ordinal: usize, end_ordinal: usize) -> Self {
        Self {
            key,
            value,
            start_ordinal: start_ordinal.min(end_ordinal),
            end_ordinal: start_ordinal.max(end_ordinal),
        }
    }

    pub fn covers(&self, ordinal: usize) -> bool {
        (self.start_ordinal..=self.end_ordinal).contains(&ordinal)
    }
}
