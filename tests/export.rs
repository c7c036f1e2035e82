//! End-to-end scene exports.

use glam::{Mat4, Vec3};
use molpov::color::Rgb;
use molpov::export::bond::{BondGeometry, AROMATIC_ORDER};
use molpov::export::frame::FrameMode;
use molpov::export::ini::RenderJob;
use molpov::export::macros::MACRO_NAMES;
use molpov::export::{export_to_path, save_ini, SceneExporter};
use molpov::options::ExportOptions;
use molpov::scene::{Atom, Bond, Dimensions, PolymerTrace, Scene};

fn atom(position: Vec3, color: Rgb, model_index: usize) -> Atom {
    Atom {
        position,
        radius: 1.0,
        color,
        model_index,
    }
}

fn export(scene: &Scene, mode: FrameMode) -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    let options = ExportOptions::default();
    let mut out = Vec::new();
    let _ = SceneExporter::new(&options)
        .export(scene, &mut out, mode, None)
        .unwrap();
    String::from_utf8(out).unwrap()
}

/// Lines that invoke a macro (not its declaration).
fn calls<'a>(text: &'a str, name: &str) -> Vec<&'a str> {
    let prefix = format!("{name}(");
    text.lines().filter(|l| l.starts_with(&prefix)).collect()
}

fn two_model_scene() -> Scene {
    let mut scene = Scene {
        model_count: 2,
        ..Scene::default()
    };
    for m in 0..2 {
        let a = atom(Vec3::new(m as f32, 0.0, 0.0), Rgb::WHITE, m);
        let b = atom(Vec3::new(m as f32, 1.5, 0.0), Rgb(255, 0, 0), m);
        scene.bonds.push(Bond::between(&a, &b, 1, 0.15));
        scene.atoms.push(a);
        scene.atoms.push(b);
        scene.polymers.push(PolymerTrace {
            points: Some(vec![Vec3::ZERO, Vec3::new(m as f32 + 1.0, 0.0, 0.0)]),
            model_index: m,
        });
    }
    scene
}

#[test]
fn single_white_atom_scene() {
    let mut scene = Scene::default();
    scene.atoms.push(atom(Vec3::ZERO, Rgb::WHITE, 0));
    let text = export(&scene, FrameMode::current(&scene));

    assert!(text.contains("#declare Width = 500;\n"));
    assert!(text.contains("#declare Ratio = Width/Height;\n"));
    assert_eq!(text.matches("camera{").count(), 1);
    assert!(text.contains("right <-Ratio,0,0>"));
    assert_eq!(text.matches("light_source {").count(), 2);
    for name in MACRO_NAMES {
        assert!(text.contains(&format!("#macro {name}(")), "{name}");
    }
    assert_eq!(calls(&text, "atom"), vec!["atom(0,0,0,1,1,1,1)"]);
    for name in &MACRO_NAMES[1..] {
        assert!(calls(&text, name).is_empty(), "{name}");
    }
    assert!(!text.contains("sphere_sweep"));
    assert!(!text.contains("#switch"));
}

#[test]
fn two_color_single_bond() {
    let mut scene = Scene::default();
    let a = atom(Vec3::ZERO, Rgb::WHITE, 0);
    let b = atom(Vec3::new(1.5, 0.0, 0.0), Rgb(255, 0, 0), 0);
    scene.bonds.push(Bond::between(&a, &b, 1, 0.15));
    let text = export(&scene, FrameMode::current(&scene));

    let bond2 = calls(&text, "bond2");
    assert_eq!(bond2, vec!["bond2(0,0,0,1.5,0,0,0.15,1,1,1,1,0,0)"]);
    assert!(calls(&text, "bond1").is_empty());
    let args = bond2[0].trim_start_matches("bond2(").trim_end_matches(')');
    // 6 coordinates, the radius, two RGB triples
    assert_eq!(args.split(',').count(), 6 + 1 + 2 * 3);
}

#[test]
fn same_color_single_bond_uses_bond1() {
    let mut scene = Scene::default();
    let a = atom(Vec3::ZERO, Rgb(0, 128, 0), 0);
    let b = atom(Vec3::Y, Rgb(0, 128, 0), 0);
    scene.bonds.push(Bond::between(&a, &b, 1, 0.15));
    let text = export(&scene, FrameMode::current(&scene));
    assert_eq!(calls(&text, "bond1").len(), 1);
    assert!(calls(&text, "bond2").is_empty());
}

#[test]
fn every_bond_class_picks_its_macro() {
    let mut scene = Scene::default();
    let a = atom(Vec3::ZERO, Rgb::WHITE, 0);
    let b = atom(Vec3::X, Rgb::WHITE, 0);
    for order in [1, 2, 3, AROMATIC_ORDER, 1 << 6, 4] {
        scene.bonds.push(Bond::between(&a, &b, order, 0.1));
    }
    let text = export(&scene, FrameMode::current(&scene));
    for name in ["bond1", "dblbond1", "trpbond1", "abond1", "hbond1"] {
        assert_eq!(calls(&text, name).len(), 1, "{name}");
    }
}

#[test]
fn all_models_mode_emits_one_range_per_model() {
    let scene = two_model_scene();
    let text = export(&scene, FrameMode::All);

    // atoms, bonds and polymers each get a switch
    assert_eq!(text.matches("#switch (clock)").count(), 3);
    assert_eq!(text.matches("#range (0.9,1.1)").count(), 3);
    assert_eq!(text.matches("#range (1.9,2.1)").count(), 3);
    assert!(!text.contains("#range (2.9,3.1)"));

    let atoms = &text[text.find("#if (showAtoms)").unwrap()..];
    let first = atoms.find("#range (0.9,1.1)").unwrap();
    let second = atoms.find("#range (1.9,2.1)").unwrap();
    let model1_atom = atoms.find("atom(1,0,0,").unwrap();
    assert!(first < second && second < model1_atom);
}

#[test]
fn current_model_mode_never_leaks_other_models() {
    let mut scene = two_model_scene();
    scene.display_model = 1;
    let text = export(&scene, FrameMode::current(&scene));

    let atoms = calls(&text, "atom");
    assert_eq!(atoms.len(), 2);
    assert!(atoms.iter().all(|l| l.starts_with("atom(1,")));
    assert_eq!(calls(&text, "bond2"), vec!["bond2(1,0,0,1,1.5,0,0.15,1,1,1,1,0,0)"]);
    assert_eq!(text.matches("sphere_sweep").count(), 1);
    assert!(text.contains(" <2,0,0>,0.3\n"));
}

#[test]
fn export_is_deterministic() {
    let scene = two_model_scene();
    assert_eq!(export(&scene, FrameMode::All), export(&scene, FrameMode::All));
}

#[test]
fn bond_geometry_matches_emitted_call() {
    let transform = Mat4::from_rotation_z(0.7);
    let a = atom(Vec3::new(0.2, -1.0, 0.5), Rgb::WHITE, 0);
    let b = atom(Vec3::new(1.3, 0.4, -0.5), Rgb::WHITE, 0);
    let bond = Bond::between(&a, &b, 2, 0.2);

    let mut scene = Scene::default();
    scene.camera.transform = transform;
    scene.bonds.push(bond.clone());
    let text = export(&scene, FrameMode::current(&scene));

    let geometry = BondGeometry::from_bond(&bond, &transform).unwrap();
    assert_eq!(calls(&text, "dblbond1"), vec![geometry.call.to_string()]);
}

#[test]
fn failing_sink_reports_io_error() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let options = ExportOptions::default();
    let err = SceneExporter::new(&options)
        .export(&Scene::default(), &mut Broken, FrameMode::All, None)
        .unwrap_err();
    assert!(matches!(err, molpov::error::ExportError::Io(_)));
}

#[test]
fn export_to_file_with_render_settings() {
    let dir = std::env::temp_dir().join(format!("molpov-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let pov = dir.join("scene.pov");
    let ini = dir.join("scene.ini");

    let scene = two_model_scene();
    let options = ExportOptions::default();
    let summary = export_to_path(
        &pov,
        &scene,
        &options,
        FrameMode::All,
        Some(Dimensions::new(640, 480)),
    )
    .unwrap();
    assert_eq!(summary.atoms, 4);
    assert_eq!(summary.bonds, 2);
    assert_eq!(summary.polymers, 2);

    let job = RenderJob::new(&pov, summary.size, FrameMode::All, scene.model_count);
    save_ini(&ini, &options, &job).unwrap();

    let written = std::fs::read_to_string(&pov).unwrap();
    assert_eq!(written, export_sized(&scene, Dimensions::new(640, 480)));
    let settings = std::fs::read_to_string(&ini).unwrap();
    assert!(settings.contains("Width=640\nHeight=480\n"));
    assert!(settings.contains("Final_Clock=2\n"));

    std::fs::remove_dir_all(&dir).unwrap();
}

fn export_sized(scene: &Scene, size: Dimensions) -> String {
    let options = ExportOptions::default();
    let mut out = Vec::new();
    let _ = SceneExporter::new(&options)
        .export(scene, &mut out, FrameMode::All, Some(size))
        .unwrap();
    String::from_utf8(out).unwrap()
}
