//! The ordered assembly pipeline.
//!
//! Assembly is a fold over a phase table: each phase takes the in-progress
//! [`BundleConfig`] and returns the next one, so no partially-assembled
//! configuration ever escapes [`Assembler::assemble`]. The table is
//! data-driven: a baseline shared by every mode, plus the optimization phase
//! appended only for production builds.

use std::path::PathBuf;

use crate::config::{
    BundleConfig, CacheGroup, ChunkScope, Minimizer, Optimization, OutputOptions, SourceMapMode,
    SplitChunks, WatchOptions,
};
use crate::mode::BuildMode;
use crate::rules::build_rules;
use crate::{plugins, Result};

/// Entry sources, relative to the project root.
const CRITICAL_ENTRY: &str = "src/scripts/critical.ts";
const APP_ENTRY: &str = "src/scripts/scripts.ts";
const CHEATSHEET_ENTRY: &str = "src/scripts/cheatsheet.ts";

/// Build output directory under the project root.
const OUTPUT_DIR: &str = "dist";
const OUTPUT_FILENAME: &str = "[name].js";
const CHUNK_FILENAME: &str = "[name].js";

/// Naming pattern for assets copied verbatim (fonts, images).
const ASSET_NAME_PATTERN: &str = "[name].[ext]";

/// Trees that never trigger a rebuild in watch mode.
const WATCH_IGNORE: &[&str] = &["**/libraries", "**/node_modules", "**/fonts"];

/// Module-path pattern for the vendor cache group.
const DEPENDENCY_PATH_PATTERN: &str = r"[\\/]node_modules[\\/]";

/// Modules shared by at least this many chunks land in the common group.
const COMMON_MIN_CHUNKS: u32 = 2;

type Phase = fn(&Assembler, BundleConfig) -> Result<BundleConfig>;

/// Drives the ordered phase pipeline that builds a [`BundleConfig`].
///
/// One assembler per invocation; assembling twice with the same inputs
/// produces structurally identical configurations.
#[derive(Debug, Clone)]
pub struct Assembler {
    mode: BuildMode,
    root: PathBuf,
}

impl Assembler {
    pub fn new(mode: BuildMode, root: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            root: root.into(),
        }
    }

    /// The phase table: baseline phases for every mode, optimization only
    /// for production, rules always last.
    fn phases(&self) -> Vec<Phase> {
        let mut table: Vec<Phase> = vec![
            Assembler::init,
            Assembler::entries,
            Assembler::output,
            Assembler::plugins,
        ];
        if self.mode.is_production() {
            table.push(Assembler::optimization);
        }
        table.push(Assembler::rules);
        table
    }

    /// Run every phase in order over a fresh configuration.
    pub fn assemble(&self) -> Result<BundleConfig> {
        let seed = BundleConfig::new(self.mode, self.root.clone());
        let config = self
            .phases()
            .into_iter()
            .try_fold(seed, |config, phase| phase(self, config))?;
        tracing::debug!(
            mode = %self.mode,
            entries = config.entry.len(),
            plugins = config.plugins.len(),
            rules = config.module.rules.len(),
            "configuration assembled"
        );
        Ok(config)
    }

    /// Mode and resolution are fixed at construction; development builds
    /// additionally get eval source maps and continuous rebuild, with
    /// library, dependency, and font trees excluded from watch triggers.
    fn init(&self, mut config: BundleConfig) -> Result<BundleConfig> {
        if !self.mode.is_production() {
            config.devtool = Some(SourceMapMode::EvalSourceMap);
            config.watch = true;
            config.watch_options = Some(WatchOptions {
                ignored: WATCH_IGNORE.iter().map(|p| (*p).to_owned()).collect(),
            });
        }
        Ok(config)
    }

    /// The fixed three-entry chain. `critical` bootstraps without blocking on
    /// the full application bundle; `cheatsheet` is an auxiliary bundle
    /// loaded last.
    fn entries(&self, mut config: BundleConfig) -> Result<BundleConfig> {
        config.add_entry("critical", self.root.join(CRITICAL_ENTRY))?;
        config.add_dependent_entry("app", self.root.join(APP_ENTRY), "critical")?;
        config.add_dependent_entry("cheatsheet", self.root.join(CHEATSHEET_ENTRY), "app")?;
        Ok(config)
    }

    fn output(&self, mut config: BundleConfig) -> Result<BundleConfig> {
        config.output = OutputOptions {
            path: self.root.join(OUTPUT_DIR),
            filename: OUTPUT_FILENAME.to_owned(),
            chunk_filename: CHUNK_FILENAME.to_owned(),
        };
        Ok(config)
    }

    fn plugins(&self, mut config: BundleConfig) -> Result<BundleConfig> {
        plugins::progress(&mut config);
        plugins::friendly_errors(&mut config);
        plugins::copy_static(&mut config);
        plugins::extract_styles(&mut config);
        Ok(config)
    }

    /// Two-bucket chunk splitting: vendor code changes rarely, so it wins
    /// ties against the shared-usage group via its less negative priority.
    fn optimization(&self, mut config: BundleConfig) -> Result<BundleConfig> {
        config.optimization = Some(Optimization {
            split_chunks: SplitChunks {
                cache_groups: vec![
                    CacheGroup {
                        name: "chunk-vendors".to_owned(),
                        test: Some(DEPENDENCY_PATH_PATTERN.to_owned()),
                        min_chunks: None,
                        priority: -10,
                        chunks: ChunkScope::Initial,
                        reuse_existing_chunk: false,
                    },
                    CacheGroup {
                        name: "chunk-common".to_owned(),
                        test: None,
                        min_chunks: Some(COMMON_MIN_CHUNKS),
                        priority: -20,
                        chunks: ChunkScope::Initial,
                        reuse_existing_chunk: true,
                    },
                ],
            },
            minimize: true,
            minimizer: vec![Minimizer::scripts(), Minimizer::styles()],
        });
        Ok(config)
    }

    fn rules(&self, mut config: BundleConfig) -> Result<BundleConfig> {
        for rule in build_rules(self.mode.source_maps_enabled(), ASSET_NAME_PATTERN) {
            config.push_rule(rule);
        }
        Ok(config)
    }
}

/// Assemble a configuration for `mode`, rooted at `root`.
///
/// `root` must be an absolute, existing directory; validating it is the
/// caller's contract.
pub fn assemble(mode: BuildMode, root: impl Into<PathBuf>) -> Result<BundleConfig> {
    Assembler::new(mode, root).assemble()
}
