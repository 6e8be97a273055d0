//! # takin-config
//!
//! Build-configuration assembly for the takin asset pipeline.
//!
//! This crate builds the single [`BundleConfig`] object that is handed to the
//! external compiler: module resolution, the fixed entry chain, output layout,
//! the plugin chain, the mode-gated optimization policy, and one transform
//! rule per recognized file type. Assembly is a strictly ordered sequence of
//! phases driven by [`Assembler`]; the configuration is mutable while the
//! phases run and never mutated after the compiler takes ownership.
//!
//! ## Quick Start
//!
//! ```
//! use takin_config::{assemble, BuildMode};
//!
//! let config = assemble(BuildMode::Production, "/srv/site")?;
//! assert!(config.optimization.is_some());
//! assert_eq!(config.module.rules.len(), 6);
//! # Ok::<(), takin_config::Error>(())
//! ```

pub mod assemble;
pub mod config;
pub mod mode;
pub mod plugins;
pub mod rules;

pub use assemble::{assemble, Assembler};
pub use config::{
    BundleConfig, CacheGroup, ChunkScope, EntryPoint, Minimizer, ModuleOptions, Optimization,
    OutputOptions, ResolveOptions, SourceMapMode, SplitChunks, WatchOptions,
};
pub use mode::BuildMode;
pub use plugins::{CopyPattern, PluginDescriptor};
pub use rules::{build_rules, CssModules, FileMatcher, Rule, Stage};

/// Error types for configuration assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An entry declared a dependency on an entry that does not exist yet.
    /// Dependencies may only reference entries defined earlier in the chain.
    #[error("entry `{entry}` depends on unknown entry `{dependency}`")]
    UnknownEntryDependency { entry: String, dependency: String },

    /// An entry name was registered twice.
    #[error("entry `{0}` is already defined")]
    DuplicateEntry(String),

    /// The assembled configuration is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for configuration assembly.
pub type Result<T> = std::result::Result<T, Error>;
