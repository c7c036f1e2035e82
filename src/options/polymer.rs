use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Polymer Trace", inline)]
#[serde(default)]
/// Styling for backbone `sphere_sweep` traces. The viewer does not hand
/// over per-residue styling, so every trace uses these.
pub struct PolymerOptions {
    /// Tube radius at every trace point.
    #[schemars(title = "Radius", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub radius: f32,
    /// Tube color.
    #[schemars(skip)]
    pub color: Rgb,
}

impl Default for PolymerOptions {
    fn default() -> Self {
        Self {
            radius: 0.3,
            color: Rgb::BLUE,
        }
    }
}
