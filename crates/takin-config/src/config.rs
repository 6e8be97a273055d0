//! The bundle configuration object and its sub-structures.
//!
//! [`BundleConfig`] is the one object threaded through every assembly phase.
//! It is mutable while [`crate::Assembler`] runs and treated as immutable the
//! moment it is handed to the compiler; serialization is the ownership
//! transfer. Field names serialize in camelCase, the convention of the
//! bundler ecosystem consuming the JSON.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::mode::BuildMode;
use crate::plugins::PluginDescriptor;
use crate::rules::{FileMatcher, Rule};
use crate::{Error, Result};

/// Extensions tried, in order, when resolving an import without one.
pub const RESOLVE_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".css", ".scss"];

/// Module resolution options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: RESOLVE_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
        }
    }
}

/// A named bundle root.
///
/// `depend_on` chains entries into a strict load order; it may only name an
/// entry that was registered earlier (no forward references, no cycles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    pub import: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depend_on: Option<String>,
}

/// Output layout. Filenames use the entry/chunk name verbatim; this tool
/// targets deployments without content-hash cache busting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub path: PathBuf,
    pub filename: String,
    pub chunk_filename: String,
}

/// Directories excluded from watch-mode rebuild triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
    pub ignored: Vec<String>,
}

/// Source-map strategy handed to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// Module-level eval maps; fast to regenerate on rebuild.
    EvalSourceMap,
}

/// Which chunks a cache group may claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    Initial,
    All,
}

/// One chunk-splitting bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroup {
    pub name: String,
    /// Module-path pattern this group captures, when path-keyed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Minimum number of chunks that must share a module, when usage-keyed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_chunks: Option<u32>,
    /// More negative loses ties; vendor code outranks shared app code.
    pub priority: i32,
    pub chunks: ChunkScope,
    pub reuse_existing_chunk: bool,
}

/// Chunk-splitting policy: an ordered list of cache groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    pub cache_groups: Vec<CacheGroup>,
}

/// A minimizer scoped to one asset class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Minimizer {
    Scripts { test: FileMatcher },
    Styles { test: FileMatcher },
}

impl Minimizer {
    /// Script minimizer: `.js`/`.mjs`, tolerating a query suffix.
    pub fn scripts() -> Self {
        Minimizer::Scripts {
            test: FileMatcher::extensions(&["js", "mjs"]).with_version_query(),
        }
    }

    /// Style minimizer: `.css`, tolerating a query suffix.
    pub fn styles() -> Self {
        Minimizer::Styles {
            test: FileMatcher::extension("css").with_version_query(),
        }
    }
}

/// Production-only optimization strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub split_chunks: SplitChunks,
    pub minimize: bool,
    pub minimizer: Vec<Minimizer>,
}

/// Transform rules consumed by the compiler's module pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOptions {
    pub rules: Vec<Rule>,
}

/// The single configuration object built up by the assembly phases and
/// consumed, once, by the external compiler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    pub mode: BuildMode,
    /// Absolute project root all relative paths resolve against.
    pub context: PathBuf,
    pub resolve: ResolveOptions,
    /// Entry points in registration order.
    pub entry: IndexMap<String, EntryPoint>,
    pub output: OutputOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapMode>,
    pub watch: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_options: Option<WatchOptions>,
    pub plugins: Vec<PluginDescriptor>,
    pub module: ModuleOptions,
    /// Present only for production builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<Optimization>,
}

impl BundleConfig {
    /// Fresh configuration with mode, context, and the fixed resolution
    /// extensions set. Everything else is populated by the assembly phases.
    pub fn new(mode: BuildMode, context: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            context: context.into(),
            resolve: ResolveOptions::default(),
            entry: IndexMap::new(),
            output: OutputOptions::default(),
            devtool: None,
            watch: false,
            watch_options: None,
            plugins: Vec::new(),
            module: ModuleOptions::default(),
            optimization: None,
        }
    }

    /// Register an entry with no dependency.
    pub fn add_entry(&mut self, name: &str, import: impl Into<PathBuf>) -> Result<()> {
        self.insert_entry(name, import.into(), None)
    }

    /// Register an entry that must load after `depend_on`. The dependency
    /// must already be registered.
    pub fn add_dependent_entry(
        &mut self,
        name: &str,
        import: impl Into<PathBuf>,
        depend_on: &str,
    ) -> Result<()> {
        if !self.entry.contains_key(depend_on) {
            return Err(Error::UnknownEntryDependency {
                entry: name.to_owned(),
                dependency: depend_on.to_owned(),
            });
        }
        self.insert_entry(name, import.into(), Some(depend_on.to_owned()))
    }

    fn insert_entry(
        &mut self,
        name: &str,
        import: PathBuf,
        depend_on: Option<String>,
    ) -> Result<()> {
        if self.entry.contains_key(name) {
            return Err(Error::DuplicateEntry(name.to_owned()));
        }
        self.entry
            .insert(name.to_owned(), EntryPoint { import, depend_on });
        Ok(())
    }

    pub fn push_plugin(&mut self, plugin: PluginDescriptor) {
        self.plugins.push(plugin);
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.module.rules.push(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_must_already_exist() {
        let mut config = BundleConfig::new(BuildMode::Development, "/app");
        let err = config
            .add_dependent_entry("app", "/app/src/scripts/scripts.ts", "critical")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEntryDependency { .. }));
    }

    #[test]
    fn self_dependency_is_a_forward_reference() {
        let mut config = BundleConfig::new(BuildMode::Development, "/app");
        let err = config
            .add_dependent_entry("app", "/app/src/scripts/scripts.ts", "app")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEntryDependency { .. }));
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let mut config = BundleConfig::new(BuildMode::Development, "/app");
        config
            .add_entry("critical", "/app/src/scripts/critical.ts")
            .unwrap();
        let err = config
            .add_entry("critical", "/app/src/scripts/critical.ts")
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateEntry(name) if name == "critical"));
    }

    #[test]
    fn entries_keep_registration_order() {
        let mut config = BundleConfig::new(BuildMode::Development, "/app");
        config.add_entry("critical", "/a").unwrap();
        config.add_dependent_entry("app", "/b", "critical").unwrap();
        config.add_dependent_entry("cheatsheet", "/c", "app").unwrap();
        let names: Vec<&str> = config.entry.keys().map(String::as_str).collect();
        assert_eq!(names, ["critical", "app", "cheatsheet"]);
    }

    #[test]
    fn serializes_in_camel_case() {
        let mut config = BundleConfig::new(BuildMode::Production, "/app");
        config.output = OutputOptions {
            path: PathBuf::from("/app/dist"),
            filename: "[name].js".to_owned(),
            chunk_filename: "[name].js".to_owned(),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "production");
        assert_eq!(json["output"]["chunkFilename"], "[name].js");
        assert!(json.get("optimization").is_none());
        assert!(json.get("devtool").is_none());
    }
}
