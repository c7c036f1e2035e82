//! Renderer settings file written next to a scene file.
//!
//! Describes how to render the scene (size, format, antialiasing and, for
//! animated exports, the clock sweep). Nothing here runs the renderer.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::format::Num;
use super::frame::FrameMode;
use crate::options::RenderSettings;
use crate::scene::Dimensions;

/// One render job: which scene file, at what size, over how many frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Scene file the renderer reads.
    pub input: PathBuf,
    /// Image size in pixels.
    pub size: Dimensions,
    /// Number of animation frames; `1` for a still.
    pub frames: usize,
}

impl RenderJob {
    /// A job for `input` at `size`, animated over every model when `mode`
    /// is [`FrameMode::All`].
    #[must_use]
    pub fn new(
        input: &Path,
        size: Dimensions,
        mode: FrameMode,
        model_count: usize,
    ) -> Self {
        let frames = match mode {
            FrameMode::All => model_count.max(1),
            FrameMode::Single(_) => 1,
        };
        Self {
            input: input.to_path_buf(),
            size,
            frames,
        }
    }

    /// Image file name: the input with the format's extension.
    #[must_use]
    pub fn output(&self, settings: &RenderSettings) -> PathBuf {
        self.input.with_extension(settings.output_format.extension())
    }
}

/// Write the settings file for `job`.
///
/// Animated jobs sweep the clock from `1` to `frames`, one integer step
/// per frame, which lands each frame in the middle of its model's clock
/// range.
pub fn write_ini<W: Write>(
    w: &mut W,
    settings: &RenderSettings,
    job: &RenderJob,
) -> io::Result<()> {
    writeln!(w, "Input_File_Name={}", job.input.display())?;
    writeln!(w, "Output_to_File=true")?;
    writeln!(w, "Output_File_Type={}", settings.output_format.code())?;
    writeln!(w, "Output_File_Name={}", job.output(settings).display())?;
    writeln!(w, "Width={}", job.size.width)?;
    writeln!(w, "Height={}", job.size.height)?;
    match settings.antialias_threshold {
        Some(threshold) => {
            writeln!(w, "Antialias=true")?;
            writeln!(w, "Antialias_Threshold={}", Num(threshold))?;
        }
        None => writeln!(w, "Antialias=false")?,
    }
    writeln!(w, "Output_Alpha={}", settings.output_alpha)?;
    writeln!(w, "Display={}", settings.display)?;
    writeln!(w, "Pause_When_Done={}", settings.display)?;
    if let Some((start, end)) = settings.mosaic_preview {
        writeln!(w, "Preview_Start_Size={start}")?;
        writeln!(w, "Preview_End_Size={end}")?;
    }
    if job.frames > 1 {
        writeln!(w, "Initial_Frame=1")?;
        writeln!(w, "Final_Frame={}", job.frames)?;
        writeln!(w, "Initial_Clock=1")?;
        writeln!(w, "Final_Clock={}", job.frames)?;
    }
    writeln!(w, "Verbose={}", settings.verbose)
}
