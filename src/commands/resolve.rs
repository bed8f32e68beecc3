//! Resolve command implementation

use log::{debug, info};

use pkgref::error::{PkgrefError, Result, snapshot::export_not_found};
use pkgref::resolver::{ObjectResolver, ResolverOptions};
use pkgref::snapshot::{PackageSnapshot, TypeMappings};
use pkgref::{PackageObjectDescription, PackageObjectIndex};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::ui::render_tree;

/// What the user asked to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    AllExports,
    Export(usize),
    Index(PackageObjectIndex),
}

impl Selection {
    fn from_args(args: &ResolveArgs) -> Result<Self> {
        if let Some(position) = args.export {
            return Ok(Self::Export(position));
        }
        if let Some(raw) = &args.index {
            return Ok(Self::Index(raw.parse()?));
        }
        Ok(Self::AllExports)
    }

    fn is_single(&self) -> bool {
        !matches!(self, Self::AllExports)
    }
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let selection = Selection::from_args(&args)?;
    let snapshot = load_snapshot(&args)?;
    let options = ResolverOptions {
        max_depth: args.max_depth,
    };

    let descriptions = resolve(&snapshot, options, &selection)?;
    let output = render(&descriptions, &selection, args.format)?;
    print!("{output}");
    Ok(())
}

fn load_snapshot(args: &ResolveArgs) -> Result<PackageSnapshot> {
    let snapshot = PackageSnapshot::load(&args.snapshot)?;
    info!(
        "loaded '{}': {} exports, {} script objects, {} imported packages",
        snapshot.name,
        snapshot.exports.len(),
        snapshot.script_objects.len(),
        snapshot.imported_packages.len()
    );

    match &args.mappings {
        Some(path) => {
            let mappings = TypeMappings::load(path)?;
            debug!("loaded {} type descriptors", mappings.len());
            Ok(snapshot.with_mappings(mappings))
        }
        None => Ok(snapshot),
    }
}

fn resolve(
    snapshot: &PackageSnapshot,
    options: ResolverOptions,
    selection: &Selection,
) -> Result<Vec<Option<PackageObjectDescription>>> {
    let resolver = ObjectResolver::with_options(snapshot, options);
    match selection {
        Selection::AllExports => snapshot
            .exports
            .iter()
            .map(|entry| resolver.resolve_export_entry(entry).map(Some))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(PkgrefError::from),
        Selection::Export(position) => {
            let entry = snapshot.exports.get(*position).ok_or_else(|| {
                export_not_found(&snapshot.name, *position, snapshot.exports.len())
            })?;
            Ok(vec![Some(resolver.resolve_export_entry(entry)?)])
        }
        Selection::Index(index) => Ok(vec![resolver.resolve_index(Some(*index))?]),
    }
}

fn render(
    descriptions: &[Option<PackageObjectDescription>],
    selection: &Selection,
    format: OutputFormat,
) -> Result<String> {
    let single = selection
        .is_single()
        .then(|| descriptions.first().cloned().flatten());
    let output_failed = |reason: String| PkgrefError::OutputFailed { reason };

    match format {
        OutputFormat::Json => {
            let json = match &single {
                Some(description) => serde_json::to_string_pretty(description),
                None => serde_json::to_string_pretty(descriptions),
            };
            let mut json = json.map_err(|e| output_failed(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => {
            let yaml = match &single {
                Some(description) => serde_yaml::to_string(description),
                None => serde_yaml::to_string(descriptions),
            };
            yaml.map_err(|e| output_failed(e.to_string()))
        }
        OutputFormat::Tree => Ok(descriptions
            .iter()
            .map(|description| match description {
                Some(description) => render_tree(description),
                None => "(none)\n".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
