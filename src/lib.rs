// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Export molecular scenes as POV-Ray scene descriptions.
//!
//! molpov turns a read-only snapshot of a molecular viewer (atoms, bonds,
//! polymer backbone traces, camera and background) into one text file for
//! the POV-Ray ray tracer. Geometry is written as invocations of a fixed
//! macro catalog, so the file stays small and easy to restyle by hand.
//!
//! # Key entry points
//!
//! - [`export::SceneExporter`] - writes one scene file to any `Write` sink
//! - [`export::export_to_path`] - the same, to a new buffered file
//! - [`scene::Scene`] - the snapshot the exporter reads
//! - [`export::frame::FrameMode`] - the displayed model only, or every model
//!   as an animation keyed to the renderer clock
//! - [`options::ExportOptions`] - styling and renderer settings with TOML
//!   preset support
//!
//! # Example
//!
//! ```
//! use molpov::color::Rgb;
//! use molpov::export::frame::FrameMode;
//! use molpov::export::SceneExporter;
//! use molpov::options::ExportOptions;
//! use molpov::scene::{Atom, Scene};
//!
//! let mut scene = Scene::default();
//! scene.atoms.push(Atom {
//!     position: glam::Vec3::ZERO,
//!     radius: 1.0,
//!     color: Rgb::WHITE,
//!     model_index: 0,
//! });
//!
//! let options = ExportOptions::default();
//! let mut out = Vec::new();
//! let summary = SceneExporter::new(&options)
//!     .export(&scene, &mut out, FrameMode::current(&scene), None)?;
//! assert_eq!(summary.atoms, 1);
//! # Ok::<(), molpov::error::ExportError>(())
//! ```

pub mod color;
pub mod error;
pub mod export;
pub mod options;
pub mod scene;
