//! Indented tree rendering of description trees
//!
//! ```text
//! Export Health  [/Game/Characters/Hero]
//! ├─ flags: 0x00000000
//! ├─ class: Import IntProperty  [/Script/CoreUObject]
//! │  ├─ class: /Script/CoreUObject.Class
//! │  └─ outer: Import /Script/CoreUObject  [/Script/CoreUObject]
//! │     └─ class: /Script/CoreUObject.Package
//! └─ outer: Export Hero_C  [/Game/Characters/Hero]
//! ```

use std::fmt::Write as _;

use console::Style;

use pkgref::PackageObjectDescription;

enum Child<'a> {
    Line(String),
    Node(&'static str, &'a PackageObjectDescription),
}

/// Render one description and everything below it
pub fn render_tree(description: &PackageObjectDescription) -> String {
    let mut out = String::new();
    write_node(&mut out, description, None, "", "");
    out
}

fn write_node(
    out: &mut String,
    node: &PackageObjectDescription,
    label: Option<&str>,
    prefix: &str,
    connector: &str,
) {
    let (kind, kind_style) = match node {
        PackageObjectDescription::Import(_) => ("Import", Style::new().cyan().bold()),
        PackageObjectDescription::Export(_) => ("Export", Style::new().green().bold()),
    };
    let label = label.map(|l| format!("{l}: ")).unwrap_or_default();
    let _ = writeln!(
        out,
        "{prefix}{connector}{label}{} {}  {}",
        kind_style.apply_to(kind),
        Style::new().bold().apply_to(node.object_name()),
        Style::new().dim().apply_to(format!("[{}]", node.package_name())),
    );

    let child_prefix = format!(
        "{prefix}{}",
        match connector {
            "├─ " => "│  ",
            "└─ " => "   ",
            _ => "",
        }
    );

    let children = children_of(node);
    let last = children.len().saturating_sub(1);
    for (position, child) in children.into_iter().enumerate() {
        let connector = if position == last { "└─ " } else { "├─ " };
        match child {
            Child::Line(text) => {
                let _ = writeln!(out, "{child_prefix}{connector}{text}");
            }
            Child::Node(label, child) => {
                write_node(out, child, Some(label), &child_prefix, connector);
            }
        }
    }
}

fn children_of(node: &PackageObjectDescription) -> Vec<Child<'_>> {
    let mut children = Vec::new();
    match node {
        PackageObjectDescription::Import(import) => {
            let class = match (&import.class_package, &import.class_name) {
                (Some(package), Some(name)) => Some(format!("{package}.{name}")),
                (None, Some(name)) => Some(name.clone()),
                (Some(package), None) => Some(format!("{package}.?")),
                (None, None) => None,
            };
            if let Some(class) = class {
                children.push(Child::Line(format!("class: {class}")));
            }
        }
        PackageObjectDescription::Export(export) => {
            let names = export.object_flags.names();
            let flags = if names.is_empty() {
                export.object_flags.to_string()
            } else {
                format!("{} ({})", export.object_flags, names.join(", "))
            };
            children.push(Child::Line(format!("flags: {flags}")));
            if let Some(class) = export.object_class.as_deref() {
                children.push(Child::Node("class", class));
            }
        }
    }
    if let Some(outer) = node.outer() {
        children.push(Child::Node("outer", outer));
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgref::{ExportObject, ImportObject, ObjectFlags};

    fn core_package() -> PackageObjectDescription {
        ImportObject {
            package_name: "/Script/CoreUObject".to_string(),
            object_name: "/Script/CoreUObject".to_string(),
            class_package: Some("/Script/CoreUObject".to_string()),
            class_name: Some("Package".to_string()),
            outer: None,
        }
        .into()
    }

    #[test]
    fn test_render_export_with_class_and_outer() {
        let health: PackageObjectDescription = ExportObject {
            package_name: "/Game/Hero".to_string(),
            object_name: "Health".to_string(),
            object_class: Some(Box::new(
                ImportObject {
                    package_name: "/Script/CoreUObject".to_string(),
                    object_name: "IntProperty".to_string(),
                    class_package: Some("/Script/CoreUObject".to_string()),
                    class_name: Some("Class".to_string()),
                    outer: Some(Box::new(core_package())),
                }
                .into(),
            )),
            object_flags: ObjectFlags::PUBLIC,
            outer: None,
        }
        .into();

        let rendered = console::strip_ansi_codes(&render_tree(&health)).to_string();
        let expected = "\
Export Health  [/Game/Hero]
├─ flags: 0x00000001 (Public)
└─ class: Import IntProperty  [/Script/CoreUObject]
   ├─ class: /Script/CoreUObject.Class
   └─ outer: Import /Script/CoreUObject  [/Script/CoreUObject]
      └─ class: /Script/CoreUObject.Package
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_import_without_class() {
        let bare: PackageObjectDescription = ImportObject {
            package_name: "/Game/Other".to_string(),
            object_name: "Thing".to_string(),
            class_package: None,
            class_name: None,
            outer: None,
        }
        .into();
        let rendered = console::strip_ansi_codes(&render_tree(&bare)).to_string();
        assert_eq!(rendered, "Import Thing  [/Game/Other]\n");
    }
}
