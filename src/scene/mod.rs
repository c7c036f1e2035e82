//! Read-only scene snapshot handed over by the viewer for one export.
//!
//! Positions are stored untransformed; the exporter applies the camera
//! transform exactly once, right before a coordinate is written.

use std::path::Path;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ExportError;

/// Output or screen size in pixels.
///
/// Signed because callers may pass `0` or negative values to mean "not
/// set"; see [`Dimensions::is_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Dimensions {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether both sides are strictly positive.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// The smaller of width and height.
    #[must_use]
    pub fn min_dimension(self) -> i32 {
        self.width.min(self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

/// Camera parameters captured from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraState {
    /// Radius of the bounding sphere the viewer rotates about.
    pub rotation_radius: f32,
    /// Viewer zoom in percent (100 = fit).
    pub zoom_percent: f32,
    /// Unscaled view transform applied to every emitted position.
    pub transform: Mat4,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            rotation_radius: 10.0,
            zoom_percent: 100.0,
            transform: Mat4::IDENTITY,
        }
    }
}

/// One atom of one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Untransformed position.
    pub position: Vec3,
    /// Display radius; `0` hides the atom.
    pub radius: f32,
    /// Display color.
    pub color: Rgb,
    /// Index of the model this atom belongs to.
    pub model_index: usize,
}

impl Atom {
    /// Whether this atom produces any geometry.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.radius != 0.0
    }
}

/// One bond of one model.
///
/// `order` is the raw bond-order tag from the viewer; see
/// [`BondClass::from_order`](crate::export::bond::BondClass::from_order) for
/// how it maps onto geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Untransformed position of the first endpoint.
    pub start: Vec3,
    /// Untransformed position of the second endpoint.
    pub end: Vec3,
    /// Cylinder radius; `0` hides the bond.
    pub radius: f32,
    /// Color of the half at `start`.
    pub start_color: Rgb,
    /// Color of the half at `end`.
    pub end_color: Rgb,
    /// Raw bond-order tag.
    pub order: u16,
    /// Index of the model this bond belongs to.
    pub model_index: usize,
}

impl Bond {
    /// Build a bond between two atoms, copying their positions and colors.
    ///
    /// The bond takes the model index of `a`.
    #[must_use]
    pub fn between(a: &Atom, b: &Atom, order: u16, radius: f32) -> Self {
        Self {
            start: a.position,
            end: b.position,
            radius,
            start_color: a.color,
            end_color: b.color,
            order,
            model_index: a.model_index,
        }
    }

    /// Whether this bond produces any geometry.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.radius != 0.0
    }

    /// Whether both halves share one color.
    #[must_use]
    pub fn is_single_color(&self) -> bool {
        self.start_color == self.end_color
    }
}

/// Backbone trace of one polymer in one model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolymerTrace {
    /// Lead/mid points along the backbone. `None` means the viewer had no
    /// trace for this polymer; it is skipped.
    pub points: Option<Vec<Vec3>>,
    /// Index of the model this polymer belongs to.
    pub model_index: usize,
}

/// Everything the exporter reads for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Background color.
    pub background: Rgb,
    /// Camera parameters and view transform.
    pub camera: CameraState,
    /// Current viewer screen size, used when no output size is requested.
    pub screen: Dimensions,
    /// Number of models loaded.
    pub model_count: usize,
    /// Index of the model currently displayed.
    pub display_model: usize,
    /// All atoms across all models.
    pub atoms: Vec<Atom>,
    /// All bonds across all models.
    pub bonds: Vec<Bond>,
    /// All polymer traces across all models.
    pub polymers: Vec<PolymerTrace>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            camera: CameraState::default(),
            screen: Dimensions::default(),
            model_count: 1,
            display_model: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            polymers: Vec::new(),
        }
    }
}

impl Scene {
    /// Parse a scene snapshot from JSON. Missing top-level fields use
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json)
            .map_err(|e| ExportError::SceneParse(e.to_string()))
    }

    /// Load a scene snapshot from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize the snapshot to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::SceneParse(e.to_string()))
    }
}
