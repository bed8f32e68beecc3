//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pkgref::resolver::DEFAULT_MAX_DEPTH;

/// pkgref - package object reference resolver
///
/// Resolve object references of a package snapshot into import/export descriptions.
#[derive(Parser, Debug)]
#[command(
    name = "pkgref",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve package object references into portable descriptions",
    long_about = "Resolve package object references into portable descriptions.\n\n\
                  Object references inside a packaged asset container (export map rows or \
                  packed object indices) become import/export descriptions with their class \
                  and full owner chain.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pkgref resolve Hero.yaml\n    \
                  pkgref resolve Hero.yaml --export 2 --format tree\n    \
                  pkgref resolve Hero.json --index 0x4000000000000007 --mappings types.json"
)]
pub struct Cli {
    /// Enable verbose (debug) logging; RUST_LOG takes precedence
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve export map rows or packed indices of a package snapshot
    Resolve(ResolveArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for resolved descriptions
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Tree,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve every export:\n    pkgref resolve Hero.yaml\n\n\
                  Resolve one export map row:\n    pkgref resolve Hero.yaml --export 2\n\n\
                  Resolve a packed index:\n    pkgref resolve Hero.yaml --index 0x4000000000000007\n\n\
                  Tell structs from classes with a type database:\n    pkgref resolve Hero.yaml --mappings types.yaml")]
pub struct ResolveArgs {
    /// Package snapshot (YAML, or JSON with a .json extension)
    pub snapshot: PathBuf,

    /// Type mappings used to tell structs from classes
    #[arg(long, short = 'm', value_name = "FILE")]
    pub mappings: Option<PathBuf>,

    /// Resolve the export map row at this position
    #[arg(long, short = 'e', value_name = "POSITION", conflicts_with_all = ["index", "all_exports"])]
    pub export: Option<usize>,

    /// Resolve a packed object index (decimal or 0x-prefixed hex)
    #[arg(long, short = 'i', value_name = "RAW", conflicts_with = "all_exports")]
    pub index: Option<String>,

    /// Resolve every export map row (default)
    #[arg(long)]
    pub all_exports: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Longest owner chain accepted before the input is treated as cyclic
    #[arg(long, env = "PKGREF_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pkgref completions bash > ~/.bash_completion.d/pkgref\n\n\
                  Generate zsh completions:\n    pkgref completions zsh > ~/.zfunc/_pkgref\n\n\
                  Generate fish completions:\n    pkgref completions fish > ~/.config/fish/completions/pkgref.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
