//! Path codec contract and the default JSON codec.
//!
//! A codec converts a [`Path`] to and from the structure stored in a
//! `paths/*.json` file. Decoding takes a default lookup (`key -> Option<f64>`)
//! through which project-wide defaults are supplied for fields a saved file
//! omits, such as the intermediate handoff radius of a waypoint.
//!
//! Document shape written by [`JsonPathCodec`]:
//!
//! ```text
//! {
//!   "path_elements": [
//!     {"type": "translation", "x_meters": 0.0, "y_meters": 0.0,
//!      "intermediate_handoff_radius_meters": 0.2},
//!     {"type": "rotation", "rotation_radians": 1.57, "t_ratio": 0.5}
//!   ],
//!   "constraints": {"max_velocity_meters_per_sec": 3.0},
//!   "ranged_constraints": [
//!     {"key": "max_velocity_meters_per_sec", "value": 1.0,
//!      "start_ordinal": 1, "end_ordinal": 2}
//!   ]
//! }
//! ```

use serde_json::Value;

use crate::error::{CodecError, CodecResult};
use crate::model::{
    clamp_ratio, ConstraintKind, Path, PathElement, RotationTarget, TranslationTarget,
};

/// Default-lookup key for a waypoint's handoff radius.
pub const HANDOFF_RADIUS_KEY: &str = "intermediate_handoff_radius_meters";

/// File name of the example path seeded into a fresh project.
pub const EXAMPLE_PATH_FILE: &str = "example.json";

const ELEMENT_TYPES: [&str; 2] = ["translation", "rotation"];

/// Converts paths to and from their file-native structure.
pub trait PathCodec {
    /// Encode a path into a JSON structure.
    fn serialize(&self, path: &Path) -> CodecResult<Value>;

    /// Decode a path, using `defaults` for any per-field value the document omits.
    fn deserialize(&self, document: &Value, defaults: &dyn Fn(&str) -> Option<f64>)
        -> CodecResult<Path>;
}

/// The default codec, reading and writing the JSON document shape above.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPathCodec;

impl JsonPathCodec {
    pub fn new() -> Self {
        Self
    }
}

impl PathCodec for JsonPathCodec {
    fn serialize(&self, path: &Path) -> CodecResult<Value> {
        ensure_finite(path)?;
        Ok(serde_json::to_value(path)?)
    }

    fn deserialize(
        &self,
        document: &Value,
        defaults: &dyn Fn(&str) -> Option<f64>,
    ) -> CodecResult<Path> {
        let object = document
            .as_object()
            .ok_or_else(|| CodecError::InvalidDocument("expected a JSON object".to_string()))?;

        if let Some(elements) = object.get("path_elements") {
            let elements = elements.as_array().ok_or_else(|| {
                CodecError::InvalidDocument("path_elements must be an array".to_string())
            })?;
            for element in elements {
                let tag = element.get("type").and_then(Value::as_str).unwrap_or("");
                if !ELEMENT_TYPES.contains(&tag) {
                    return Err(CodecError::UnknownElementType(tag.to_string()));
                }
            }
        }

        let mut path: Path = serde_json::from_value(document.clone())?;
        let default_radius = defaults(HANDOFF_RADIUS_KEY);

        for element in &mut path.path_elements {
            match element {
                PathElement::Translation(target) => {
                    if target.intermediate_handoff_radius_meters.is_none() {
                        target.intermediate_handoff_radius_meters = default_radius;
                    }
                }
                PathElement::Rotation(target) => {
                    target.t_ratio = clamp_ratio(target.t_ratio);
                }
            }
        }

        Ok(path)
    }
}

/// JSON has no representation for NaN or infinity; such a value would be
/// written as `null` and the file could not be read back.
fn ensure_finite(path: &Path) -> CodecResult<()> {
    let non_finite = |what: String| CodecError::InvalidDocument(format!("{what} is not finite"));

    for (index, element) in path.path_elements.iter().enumerate() {
        let values = match element {
            PathElement::Translation(target) => vec![
                Some(target.x_meters),
                Some(target.y_meters),
                target.intermediate_handoff_radius_meters,
            ],
            PathElement::Rotation(target) => {
                vec![Some(target.rotation_radians), Some(target.t_ratio)]
            }
        };
        if values.into_iter().flatten().any(|value| !value.is_finite()) {
            return Err(non_finite(format!("path element {index}")));
        }
    }
    for kind in ConstraintKind::ALL {
        if path.constraints.get(kind).is_some_and(|value| !value.is_finite()) {
            return Err(non_finite(format!("constraint {}", kind.key())));
        }
    }
    for (index, ranged) in path.ranged_constraints.iter().enumerate() {
        if !ranged.value.is_finite() {
            return Err(non_finite(format!("ranged constraint {index}")));
        }
    }
    Ok(())
}

/// Paths written into an empty `paths/` directory when a project is bootstrapped.
pub fn example_paths() -> Vec<(&'static str, Path)> {
    let example = Path::from_elements([
        TranslationTarget::new(1.0, 1.0).into(),
        TranslationTarget::new(3.0, 1.5).into(),
        RotationTarget::new(std::f64::consts::FRAC_PI_2, 0.5).into(),
        TranslationTarget::new(5.0, 3.0).into(),
    ]);
    vec![(EXAMPLE_PATH_FILE, example)]
}
