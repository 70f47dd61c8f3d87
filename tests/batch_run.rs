//! End-to-end batch rename over an on-disk source tree.

use resym::batch;
use resym::config::RenameConfig;
use std::fs;
use tempfile::TempDir;

const RAYLIB_DOC: &str = r#"{
    "defines": [
        {"name": "RAYLIB_H", "type": "GUARD"},
        {"name": "RAYWHITE", "type": "COLOR"}
    ],
    "structs": [{"name": "Color"}, {"name": "Window"}],
    "functions": [{"name": "InitWindow"}, {"name": "CloseWindow"}]
}"#;

const RAYMATH_DOC: &str = r#"{
    "defines": [{"name": "RAYMATH_H", "type": "GUARD"}],
    "aliases": [{"name": "Quaternion"}],
    "structs": [{"name": "Vector2"}],
    "functions": [{"name": "Vector2Add"}]
}"#;

fn config_for(base: &TempDir) -> RenameConfig {
    let root = base.path();
    RenameConfig {
        base_dir: root.join("raylib").display().to_string(),
        src_subdirs: vec!["src".to_string(), "src/platforms".to_string()],
        output_dir: root.join("raylib_renamed").display().to_string(),
        api_docs: vec![
            root.join("raylib.json").display().to_string(),
            root.join("raymath.json").display().to_string(),
        ],
        ..Default::default()
    }
}

fn setup_tree(base: &TempDir) {
    let root = base.path();
    fs::write(root.join("raylib.json"), RAYLIB_DOC).unwrap();
    fs::write(root.join("raymath.json"), RAYMATH_DOC).unwrap();

    fs::create_dir_all(root.join("raylib/src/platforms")).unwrap();
    fs::write(
        root.join("raylib/src/raylib.h"),
        "#ifndef RAYLIB_H\n#define RAYLIB_H\nvoid InitWindow(int w, int h);\nvoid CloseWindow(void);\n#endif\n",
    )
    .unwrap();
    fs::write(
        root.join("raylib/src/rcore.c"),
        "Window window = {0};\nvoid InitWindow(int w, int h) { window.ready = true; }\n",
    )
    .unwrap();
    fs::write(
        root.join("raylib/src/platforms/raymath.h"),
        "Vector2 Vector2Add(Vector2 a, Vector2 b);\nQuaternion q;\n",
    )
    .unwrap();
    fs::write(
        root.join("raylib/src/platforms/rcore_desktop.c"),
        "static Color background = RAYWHITE;\n",
    )
    .unwrap();
}

#[test]
fn full_run_renames_and_mirrors_tree() {
    let base = TempDir::new().unwrap();
    setup_tree(&base);
    let config = config_for(&base);

    let report = batch::run(&config).unwrap();

    // Both GUARD defines excluded: 2 defines - 2 guards + RAYWHITE... counts:
    // RAYWHITE, Color, Window, InitWindow, CloseWindow, Quaternion, Vector2, Vector2Add
    assert_eq!(report.symbol_count, 8);
    assert_eq!(report.processed_count(), 4);
    assert!(report.skipped_subdirs.is_empty());

    let out = base.path().join("raylib_renamed");

    let header = fs::read_to_string(out.join("src/raylib.h")).unwrap();
    assert!(header.contains("#ifndef RAYLIB_H"), "guard must stay unrenamed");
    assert!(header.contains("void rl_InitWindow(int w, int h);"));
    assert!(header.contains("void rl_CloseWindow(void);"));

    let core = fs::read_to_string(out.join("src/rcore.c")).unwrap();
    assert!(core.contains("rl_Window window = {0};"));
    assert!(core.contains("void rl_InitWindow(int w, int h) { window.ready = true; }"));

    // raymath.h was found under src/platforms but lands at the canonical path.
    let math = fs::read_to_string(out.join("src/raymath.h")).unwrap();
    assert!(math.contains("rl_Vector2 rl_Vector2Add(rl_Vector2 a, rl_Vector2 b);"));
    assert!(math.contains("rl_Quaternion q;"));
    assert!(!out.join("src/platforms/raymath.h").exists());

    let platform = fs::read_to_string(out.join("src/platforms/rcore_desktop.c")).unwrap();
    assert_eq!(platform, "static rl_Color background = rl_RAYWHITE;\n");
}

#[test]
fn second_run_regenerates_output_identically() {
    let base = TempDir::new().unwrap();
    setup_tree(&base);
    let config = config_for(&base);

    batch::run(&config).unwrap();
    let out = base.path().join("raylib_renamed");
    let first = fs::read_to_string(out.join("src/rcore.c")).unwrap();

    // Drop a stale file, run again: the tree is rebuilt from scratch and the
    // transform output is unchanged.
    fs::write(out.join("stale.h"), "leftover").unwrap();
    batch::run(&config).unwrap();

    assert!(!out.join("stale.h").exists());
    let second = fs::read_to_string(out.join("src/rcore.c")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn custom_prefix_applies() {
    let base = TempDir::new().unwrap();
    setup_tree(&base);
    let mut config = config_for(&base);
    config.prefix = "ray_".to_string();

    batch::run(&config).unwrap();

    let core = fs::read_to_string(
        base.path().join("raylib_renamed/src/rcore.c"),
    )
    .unwrap();
    assert!(core.contains("ray_Window window"));
}

#[test]
fn one_missing_doc_still_collects_the_other() {
    let base = TempDir::new().unwrap();
    setup_tree(&base);
    let mut config = config_for(&base);
    config.api_docs = vec![
        base.path().join("raylib.json").display().to_string(),
        base.path().join("does_not_exist.json").display().to_string(),
    ];

    let report = batch::run(&config).unwrap();

    // Only raylib.json contributes: RAYWHITE, Color, Window, InitWindow, CloseWindow
    assert_eq!(report.symbol_count, 5);
    let math = fs::read_to_string(
        base.path().join("raylib_renamed/src/raymath.h"),
    )
    .unwrap();
    assert!(math.contains("Vector2 Vector2Add"), "raymath symbols must stay unrenamed");
}
