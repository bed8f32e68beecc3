//! Test fixtures shared by unit tests.
//!
//! Builds a small but complete package snapshot so resolver tests do not each
//! hand-assemble name tables and index wiring.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{hero_snapshot, hero_mappings, HERO_PACKAGE};
//!
//! #[test]
//! fn my_test() {
//!     let snapshot = hero_snapshot().with_mappings(hero_mappings());
//!     let resolver = ObjectResolver::new(&snapshot);
//! }
//! ```
//!
//! # Layout of the hero package
//!
//! ```text
//! /Game/Characters/Hero
//!   export 0  Hero_C            class script 8 (BlueprintGeneratedClass)
//!   export 1  Default__Hero_C   class export 0
//!   export 2  Health            class script 6 (IntProperty), outer export 0
//!   export 3  Mesh_0            class script 12 (StaticMeshComponent), outer export 1
//!
//! script objects
//!   1 /Script/CoreUObject   3 Object      6 IntProperty   7 Vector
//!   2 /Script/Engine        4 Actor       5 Default__Actor
//!   8 BlueprintGeneratedClass   11 Material   12 StaticMeshComponent
//!   9 /Script/Game         10 HeroStats
//!
//! imported package 0  /Game/Shared/Materials
//!   export 0  M_Base   class script 11
//!   export 1  Layer    class script 11, outer export 0
//! ```

use crate::domain::ObjectFlags;
use crate::index::PackageObjectIndex;
use crate::names::MappedName;
use crate::package::{ExportMapEntry, TypeDescriptor};
use crate::snapshot::{
    ImportedExport, ImportedPackage, PackageSnapshot, ScriptObjectEntry, TypeMappings,
};

pub const HERO_PACKAGE: &str = "/Game/Characters/Hero";
pub const MATERIALS_PACKAGE: &str = "/Game/Shared/Materials";

/// Script object ids in the hero fixture
pub mod script {
    pub const CORE_UOBJECT: u64 = 1;
    pub const ENGINE: u64 = 2;
    pub const OBJECT: u64 = 3;
    pub const ACTOR: u64 = 4;
    pub const DEFAULT_ACTOR: u64 = 5;
    pub const INT_PROPERTY: u64 = 6;
    pub const VECTOR: u64 = 7;
    pub const BLUEPRINT_GENERATED_CLASS: u64 = 8;
    pub const GAME: u64 = 9;
    pub const HERO_STATS: u64 = 10;
    pub const MATERIAL: u64 = 11;
    pub const STATIC_MESH_COMPONENT: u64 = 12;
}

const GLOBAL_NAMES: [&str; 13] = [
    "None",
    "/Script/CoreUObject",
    "/Script/Engine",
    "Object",
    "Actor",
    "Default__Actor",
    "IntProperty",
    "Vector",
    "BlueprintGeneratedClass",
    "/Script/Game",
    "HeroStats",
    "Material",
    "StaticMeshComponent",
];

const LOCAL_NAMES: [&str; 5] = ["Hero", "Hero_C", "Default__Hero_C", "Health", "Mesh"];

fn script_object(id: u64, global_name: u32, outer: Option<u64>) -> ScriptObjectEntry {
    ScriptObjectEntry {
        id,
        object_name: MappedName::global(global_name),
        outer_index: outer.map_or(PackageObjectIndex::NULL, PackageObjectIndex::script_import),
    }
}

fn export(
    name: MappedName,
    class_index: PackageObjectIndex,
    outer_index: PackageObjectIndex,
    object_flags: ObjectFlags,
) -> ExportMapEntry {
    ExportMapEntry {
        object_name: name,
        class_index,
        outer_index,
        object_flags,
        ..ExportMapEntry::default()
    }
}

/// The hero package described in the module docs
pub fn hero_snapshot() -> PackageSnapshot {
    use script::*;

    let mut snapshot = PackageSnapshot::new(HERO_PACKAGE);
    snapshot.package_flags = ObjectFlags::from_bits_retain(0x8000_0000);
    snapshot.global_names = GLOBAL_NAMES.iter().map(ToString::to_string).collect();
    snapshot.names = LOCAL_NAMES.iter().map(ToString::to_string).collect();
    snapshot.script_objects = vec![
        script_object(CORE_UOBJECT, 1, None),
        script_object(ENGINE, 2, None),
        script_object(OBJECT, 3, Some(CORE_UOBJECT)),
        script_object(ACTOR, 4, Some(ENGINE)),
        script_object(DEFAULT_ACTOR, 5, Some(ENGINE)),
        script_object(INT_PROPERTY, 6, Some(CORE_UOBJECT)),
        script_object(VECTOR, 7, Some(CORE_UOBJECT)),
        script_object(BLUEPRINT_GENERATED_CLASS, 8, Some(ENGINE)),
        script_object(GAME, 9, None),
        script_object(HERO_STATS, 10, Some(GAME)),
        script_object(MATERIAL, 11, Some(ENGINE)),
        script_object(STATIC_MESH_COMPONENT, 12, Some(ENGINE)),
    ];
    snapshot.imported_packages = vec![ImportedPackage {
        name: MATERIALS_PACKAGE.to_string(),
        exports: vec![
            ImportedExport {
                object_name: "M_Base".to_string(),
                class_index: PackageObjectIndex::script_import(MATERIAL),
                outer_index: PackageObjectIndex::NULL,
            },
            ImportedExport {
                object_name: "Layer".to_string(),
                class_index: PackageObjectIndex::script_import(MATERIAL),
                outer_index: PackageObjectIndex::export(0),
            },
        ],
    }];
    snapshot.exports = vec![
        export(
            MappedName::local(1),
            PackageObjectIndex::script_import(BLUEPRINT_GENERATED_CLASS),
            PackageObjectIndex::NULL,
            ObjectFlags::PUBLIC.union(ObjectFlags::TRANSACTIONAL),
        ),
        export(
            MappedName::local(2),
            PackageObjectIndex::export(0),
            PackageObjectIndex::NULL,
            ObjectFlags::PUBLIC
                .union(ObjectFlags::CLASS_DEFAULT_OBJECT)
                .union(ObjectFlags::ARCHETYPE_OBJECT),
        ),
        export(
            MappedName::local(3),
            PackageObjectIndex::script_import(INT_PROPERTY),
            PackageObjectIndex::export(0),
            ObjectFlags::NONE,
        ),
        export(
            MappedName::local(4).with_number(1),
            PackageObjectIndex::script_import(STATIC_MESH_COMPONENT),
            PackageObjectIndex::export(1),
            ObjectFlags::DEFAULT_SUB_OBJECT.union(ObjectFlags::ARCHETYPE_OBJECT),
        ),
    ];
    snapshot
}

/// Type database for the hero package: `Vector` and `HeroStats` are structs
pub fn hero_mappings() -> TypeMappings {
    [
        TypeDescriptor::new("Object"),
        TypeDescriptor::new("Actor").with_super("Object"),
        TypeDescriptor::new("BlueprintGeneratedClass").with_super("Object"),
        TypeDescriptor::new("StaticMeshComponent").with_super("Object"),
        TypeDescriptor::new("Vector"),
        TypeDescriptor::new("HeroStats").with_super("TableRowBase"),
        TypeDescriptor::new("TableRowBase"),
    ]
    .into_iter()
    .collect()
}
