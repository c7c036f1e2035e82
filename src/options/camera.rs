use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement parameters.
pub struct CameraOptions {
    /// Extra margin multiplied into the camera distance so the molecule
    /// does not touch the image border.
    #[schemars(title = "Zoom Margin", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub zoom_margin: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self { zoom_margin: 1.1 }
    }
}

impl CameraOptions {
    /// Camera distance along +z for a viewer state.
    ///
    /// `rotation_radius * 2 * zoom_margin / (zoom_percent / 100)`.
    #[must_use]
    pub fn zoom(&self, rotation_radius: f32, zoom_percent: f32) -> f32 {
        rotation_radius * 2.0 * self.zoom_margin / (zoom_percent / 100.0)
    }
}
