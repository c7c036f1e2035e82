use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Finish", inline)]
#[serde(default)]
/// The `#default { finish { ... } }` surface applied to every shape.
pub struct FinishOptions {
    /// Ambient term.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f32,
    /// Diffuse term.
    #[schemars(title = "Diffuse", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub diffuse: f32,
    /// Specular highlight strength.
    #[schemars(title = "Specular", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub specular: f32,
    /// Specular highlight roughness.
    #[schemars(title = "Roughness", range(min = 0.0005, max = 1.0), extend("step" = 0.001))]
    pub roughness: f32,
    /// Tint highlights with the surface color.
    #[schemars(title = "Metallic")]
    pub metallic: bool,
}

impl Default for FinishOptions {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.6,
            specular: 1.0,
            roughness: 0.001,
            metallic: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Surface finish and the two light sources.
pub struct LightingOptions {
    /// Light co-located with the camera.
    #[schemars(skip)]
    pub key_light: Rgb,
    /// Light offset up and to the left of the camera.
    #[schemars(skip)]
    pub fill_light: Rgb,
    /// Default surface finish.
    pub finish: FinishOptions,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            key_light: Rgb::WHITE,
            fill_light: Rgb::WHITE,
            finish: FinishOptions::default(),
        }
    }
}
