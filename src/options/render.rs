use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image format the renderer writes.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Uncompressed Targa.
    #[default]
    Tga,
    /// Run-length compressed Targa.
    CompressedTga,
    /// Portable Network Graphics.
    Png,
    /// Portable pixmap.
    Ppm,
}

impl OutputFormat {
    /// Single-letter code used by `Output_File_Type`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Tga => 'T',
            Self::CompressedTga => 'C',
            Self::Png => 'N',
            Self::Ppm => 'P',
        }
    }

    /// Conventional file extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tga | Self::CompressedTga => "tga",
            Self::Png => "png",
            Self::Ppm => "ppm",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
/// Settings written to the renderer's INI file next to the scene file.
pub struct RenderSettings {
    /// Image format.
    #[schemars(title = "Output Format")]
    pub output_format: OutputFormat,
    /// Write an alpha channel.
    #[schemars(title = "Output Alpha")]
    pub output_alpha: bool,
    /// Antialiasing threshold; `None` disables antialiasing.
    #[schemars(title = "Antialias Threshold")]
    pub antialias_threshold: Option<f32>,
    /// Show the image while it renders.
    #[schemars(title = "Display While Rendering")]
    pub display: bool,
    /// Mosaic preview as `(start, end)` block sizes in pixels, powers of two.
    #[schemars(skip)]
    pub mosaic_preview: Option<(u32, u32)>,
    /// Verbose renderer output.
    #[schemars(skip)]
    pub verbose: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Tga,
            output_alpha: false,
            antialias_threshold: Some(0.1),
            display: true,
            mosaic_preview: None,
            verbose: false,
        }
    }
}
