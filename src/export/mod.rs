//! Scene-file emission.
//!
//! [`SceneExporter`] writes one complete scene description in a single
//! pass: declarations, camera, background and lights, the macro catalog,
//! then atoms, bonds and polymer traces, each section guarded by its
//! `show*` toggle. The view transform is captured once at the start of
//! the export and passed explicitly to every geometry writer.

pub mod bond;
pub mod format;
pub mod frame;
pub mod ini;
pub mod macros;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::Mat4;

use self::bond::BondGeometry;
use self::format::{Num, Triple};
use self::frame::{FrameMode, FrameSelector};
use crate::color::to_channels;
use crate::error::ExportError;
use crate::options::{ExportOptions, PolymerOptions};
use crate::scene::{Atom, Dimensions, PolymerTrace, Scene};

const RULE: &str = "//***********************************************\n";

/// What one export wrote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSummary {
    /// Resolved image size.
    pub size: Dimensions,
    /// Camera distance declared as `zoom`.
    pub zoom: f32,
    /// `atom(...)` lines written.
    pub atoms: usize,
    /// Bond macro lines written.
    pub bonds: usize,
    /// `sphere_sweep` blocks written.
    pub polymers: usize,
}

impl ExportSummary {
    /// Whether the renderer can use the declared camera and image size.
    ///
    /// A zero zoom percent gives an infinite camera distance, and an unset
    /// size makes `Ratio = Width/Height` divide by zero. Both are still
    /// written as-is.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.zoom.is_finite() && self.size.is_set()
    }
}

/// Per-export state, fixed before the first byte is written.
#[derive(Debug, Clone, Copy)]
struct ViewFrame {
    transform: Mat4,
    zoom: f32,
    size: Dimensions,
}

/// Writes scene descriptions for the external ray tracer.
#[derive(Debug, Clone, Copy)]
pub struct SceneExporter<'a> {
    options: &'a ExportOptions,
}

impl<'a> SceneExporter<'a> {
    /// Create an exporter using `options`.
    #[must_use]
    pub const fn new(options: &'a ExportOptions) -> Self {
        Self { options }
    }

    /// Write `scene` to `sink`.
    ///
    /// `requested` is the output size; when absent or not strictly
    /// positive the scene's current screen size is used. On error the sink
    /// may hold a partial document.
    pub fn export<W: Write>(
        &self,
        scene: &Scene,
        sink: &mut W,
        mode: FrameMode,
        requested: Option<Dimensions>,
    ) -> Result<ExportSummary, ExportError> {
        let frame = self.view_frame(scene, requested);
        let selector = FrameSelector::new(mode, scene.model_count);

        self.write_header(sink, &frame)?;
        self.write_camera_and_lights(sink, scene)?;

        sink.write_all(RULE.as_bytes())?;
        sink.write_all(b"// Shape macros\n")?;
        sink.write_all(RULE.as_bytes())?;
        sink.write_all(b"\n")?;
        macros::write_macros(sink, &self.options.lighting.finish)?;

        let atoms = write_section(sink, "Atoms", "showAtoms", |w| {
            selector.emit(w, &scene.atoms, |a| a.model_index, |w, atom| {
                write_atom(w, atom, &frame.transform)
            })
        })?;
        let bonds = write_section(sink, "Bonds", "showBonds", |w| {
            selector.emit(w, &scene.bonds, |b| b.model_index, |w, bond| {
                match BondGeometry::from_bond(bond, &frame.transform) {
                    Some(geometry) => {
                        writeln!(w, "{}", geometry.call)?;
                        Ok(true)
                    }
                    None => Ok(false),
                }
            })
        })?;
        let polymer_style = &self.options.polymer;
        let polymers = write_section(sink, "Polymers", "showPolymers", |w| {
            selector.emit(w, &scene.polymers, |p| p.model_index, |w, trace| {
                write_polymer(w, trace, &frame.transform, polymer_style)
            })
        })?;

        let summary = ExportSummary {
            size: frame.size,
            zoom: frame.zoom,
            atoms,
            bonds,
            polymers,
        };
        log::info!(
            "exported {mode:?}: {}x{}, {atoms} atoms, {bonds} bonds, \
             {polymers} polymers",
            frame.size.width,
            frame.size.height,
        );
        Ok(summary)
    }

    fn view_frame(
        &self,
        scene: &Scene,
        requested: Option<Dimensions>,
    ) -> ViewFrame {
        let size = match requested {
            Some(size) if size.is_set() => size,
            _ => {
                log::debug!(
                    "no usable output size ({requested:?}), using screen {}x{}",
                    scene.screen.width,
                    scene.screen.height,
                );
                if !scene.screen.is_set() {
                    log::warn!(
                        "screen size {}x{} is not positive; Ratio will not \
                         evaluate",
                        scene.screen.width,
                        scene.screen.height,
                    );
                }
                scene.screen
            }
        };
        let zoom = self
            .options
            .camera
            .zoom(scene.camera.rotation_radius, scene.camera.zoom_percent);
        if zoom.is_finite() {
            log::debug!("camera zoom {zoom}");
        } else {
            log::warn!(
                "camera zoom is {zoom} (zoom percent {}); the renderer will \
                 reject the camera",
                scene.camera.zoom_percent,
            );
        }
        ViewFrame {
            transform: scene.camera.transform,
            zoom,
            size,
        }
    }

    fn write_header<W: Write>(
        &self,
        w: &mut W,
        frame: &ViewFrame,
    ) -> Result<(), ExportError> {
        let header = &self.options.header;
        let display = &self.options.display;

        w.write_all(RULE.as_bytes())?;
        writeln!(w, "// POV-Ray scene written by {}.", header.generator)?;
        if let Some(timestamp) = &header.timestamp {
            writeln!(w, "// Generated {timestamp}")?;
        }
        w.write_all(RULE.as_bytes())?;
        w.write_all(b"\n")?;
        w.write_all(
            b"// Width and Height set the aspect ratio; keep them in step\n\
              // with the render resolution.\n",
        )?;
        writeln!(w, "#declare Width = {};", frame.size.width)?;
        writeln!(w, "#declare Height = {};", frame.size.height)?;
        writeln!(
            w,
            "#declare minScreenDimension = {};",
            frame.size.min_dimension()
        )?;
        w.write_all(b"#declare Ratio = Width/Height;\n")?;
        writeln!(w, "#declare zoom = {};", Num(frame.zoom))?;
        writeln!(w, "#declare showAtoms = {};", display.show_atoms)?;
        writeln!(w, "#declare showBonds = {};", display.show_bonds)?;
        writeln!(w, "#declare showPolymers = {};", display.show_polymers)?;
        w.write_all(b"\n")?;
        Ok(())
    }

    fn write_camera_and_lights<W: Write>(
        &self,
        w: &mut W,
        scene: &Scene,
    ) -> Result<(), ExportError> {
        let lighting = &self.options.lighting;

        // The viewer's screen axes are left-handed; a negative right vector
        // flips the renderer into the same handedness.
        w.write_all(
            b"camera{\n\
              \x20 location <0,0,zoom>\n\
              \x20 right <-Ratio,0,0>\n\
              \x20 look_at <0,0,0>\n\
              }\n\n",
        )?;
        writeln!(
            w,
            "background {{ color {} }}\n",
            to_channels(scene.background).rgb()
        )?;
        writeln!(
            w,
            "light_source {{ <0,0,zoom> {} }}",
            to_channels(lighting.key_light).rgb()
        )?;
        writeln!(
            w,
            "light_source {{ <-zoom,zoom,zoom> {} }}\n",
            to_channels(lighting.fill_light).rgb()
        )?;
        Ok(())
    }
}

/// Write one `#if (toggle) ... #end` section with a banner comment.
fn write_section<W, F>(
    w: &mut W,
    title: &str,
    toggle: &str,
    body: F,
) -> Result<usize, ExportError>
where
    W: Write,
    F: FnOnce(&mut W) -> std::io::Result<usize>,
{
    w.write_all(RULE.as_bytes())?;
    writeln!(w, "// {title}")?;
    w.write_all(RULE.as_bytes())?;
    writeln!(w, "\n#if ({toggle})")?;
    let written = body(w)?;
    w.write_all(b"#end\n\n")?;
    Ok(written)
}

fn write_atom<W: Write>(
    w: &mut W,
    atom: &Atom,
    transform: &Mat4,
) -> std::io::Result<bool> {
    if !atom.is_visible() {
        return Ok(false);
    }
    let p = transform.transform_point3(atom.position);
    writeln!(
        w,
        "atom({},{},{})",
        Triple(p.to_array()),
        Num(atom.radius),
        to_channels(atom.color)
    )?;
    Ok(true)
}

/// `sphere_sweep` through the trace points. Traces without points, or
/// with fewer than the two a linear spline needs, are skipped.
fn write_polymer<W: Write>(
    w: &mut W,
    trace: &PolymerTrace,
    transform: &Mat4,
    style: &PolymerOptions,
) -> std::io::Result<bool> {
    let Some(points) = trace.points.as_deref() else {
        return Ok(false);
    };
    if points.len() < 2 {
        log::debug!("skipping polymer trace with {} points", points.len());
        return Ok(false);
    }
    writeln!(w, "sphere_sweep {{\n linear_spline\n {}", points.len())?;
    for point in points {
        let p = transform.transform_point3(*point);
        writeln!(w, " <{}>,{}", Triple(p.to_array()), Num(style.radius))?;
    }
    writeln!(w, " pigment{{{}}}\n}}", to_channels(style.color).rgb())?;
    Ok(true)
}

/// Export `scene` to a new file at `path`.
///
/// The file is buffered and flushed before returning; it is closed on
/// every path out of this function.
pub fn export_to_path(
    path: &Path,
    scene: &Scene,
    options: &ExportOptions,
    mode: FrameMode,
    requested: Option<Dimensions>,
) -> Result<ExportSummary, ExportError> {
    let mut sink = BufWriter::new(File::create(path)?);
    let summary =
        SceneExporter::new(options).export(scene, &mut sink, mode, requested)?;
    sink.flush()?;
    log::info!("wrote scene file {}", path.display());
    Ok(summary)
}

/// Write the renderer settings file for a scene exported to `job.input`.
pub fn save_ini(
    path: &Path,
    options: &ExportOptions,
    job: &ini::RenderJob,
) -> Result<(), ExportError> {
    let mut sink = BufWriter::new(File::create(path)?);
    ini::write_ini(&mut sink, &options.render, job)?;
    sink.flush()?;
    Ok(())
}
