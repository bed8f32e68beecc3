//! Common test utilities for pkgref integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Snapshot of a small character package
///
/// Script object ids: 1 /Script/CoreUObject, 2 /Script/Engine, 3 Object,
/// 4 Actor, 5 Default__Actor, 6 IntProperty, 7 Vector, 8 BlueprintGeneratedClass.
/// Exports: 0 Hero_C, 1 Default__Hero_C, 2 Health (outer Hero_C), 3 Mesh_0.
#[allow(dead_code)]
pub const HERO_SNAPSHOT: &str = r"
name: /Game/Characters/Hero
package_flags: 0x80000000
global_names:
  - None
  - /Script/CoreUObject
  - /Script/Engine
  - Object
  - Actor
  - Default__Actor
  - IntProperty
  - Vector
  - BlueprintGeneratedClass
  - Material
names: [Hero, Hero_C, Default__Hero_C, Health, Mesh]
script_objects:
  - { id: 1, object_name: { index: 1, global: true } }
  - { id: 2, object_name: { index: 2, global: true } }
  - { id: 3, object_name: { index: 3, global: true }, outer_index: { script_import: 1 } }
  - { id: 4, object_name: { index: 4, global: true }, outer_index: { script_import: 2 } }
  - { id: 5, object_name: { index: 5, global: true }, outer_index: { script_import: 2 } }
  - { id: 6, object_name: { index: 6, global: true }, outer_index: { script_import: 1 } }
  - { id: 7, object_name: { index: 7, global: true }, outer_index: { script_import: 1 } }
  - { id: 8, object_name: { index: 8, global: true }, outer_index: { script_import: 2 } }
  - { id: 9, object_name: { index: 9, global: true }, outer_index: { script_import: 2 } }
imported_packages:
  - name: /Game/Shared/Materials
    exports:
      - { object_name: M_Base, class_index: { script_import: 9 } }
      - { object_name: Layer, class_index: { script_import: 9 }, outer_index: { export: 0 } }
exports:
  - object_name: { index: 1 }
    class_index: { script_import: 8 }
    object_flags: 0x00000001
  - object_name: { index: 2 }
    class_index: { export: 0 }
    object_flags: 0x00000031
  - object_name: { index: 3 }
    class_index: { script_import: 6 }
    outer_index: { export: 0 }
  - object_name: { index: 4, number: 1 }
    class_index: { script_import: 8 }
    outer_index: { export: 1 }
    object_flags: 0x00040000
";

/// Type database in which `Vector` is a struct and `Actor` a class
#[allow(dead_code)]
pub const HERO_MAPPINGS: &str = r#"{
  "types": [
    { "name": "Object" },
    { "name": "Actor", "super": "Object" },
    { "name": "Vector" }
  ]
}"#;

/// A temporary directory holding snapshot and mappings files
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write the hero snapshot as `Hero.yaml`
    #[allow(dead_code)]
    pub fn hero_snapshot(&self) -> PathBuf {
        self.write_file("Hero.yaml", HERO_SNAPSHOT)
    }

    /// Write the hero type database as `types.json`
    #[allow(dead_code)]
    pub fn hero_mappings(&self) -> PathBuf {
        self.write_file("types.json", HERO_MAPPINGS)
    }
}

/// Command for the real pkgref binary, with logging silenced
#[allow(dead_code, deprecated)]
pub fn pkgref_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("pkgref").expect("pkgref binary");
    cmd.env_remove("RUST_LOG").env_remove("PKGREF_MAX_DEPTH");
    cmd
}
