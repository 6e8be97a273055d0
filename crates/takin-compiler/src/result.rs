//! The compiler's result model: consumed, never produced, by this workspace.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Outcome of one compiler invocation.
///
/// Either the compiler failed outright before producing statistics, or it
/// finished (possibly with errors or warnings recorded in the snapshot).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CompileResult {
    /// Hard failure; no statistics are available.
    Fatal { error: FatalError },
    /// A statistics snapshot, whether or not the compile succeeded.
    Stats(CompileStats),
}

/// A fatal compiler error. Both fields are optional; compilers differ in how
/// much context they attach.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FatalError {
    pub message: Option<String>,
    pub details: Option<String>,
}

/// Per-asset metadata from the statistics snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetInfo {
    /// Byte size; absent for assets the compiler did not measure.
    pub size: Option<u64>,
    pub minimized: bool,
    /// Set when the asset was copied verbatim from a static directory.
    pub copied: bool,
    /// Origin filename, set only for copied assets.
    pub source_filename: Option<String>,
    /// Derived assets (source maps and the like), keyed by name.
    pub related: IndexMap<String, Value>,
}

impl AssetInfo {
    /// Copied-verbatim assets carry the copied flag or a source filename.
    pub fn is_copied(&self) -> bool {
        self.copied || self.source_filename.is_some()
    }
}

/// The statistics snapshot of a finished compile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileStats {
    /// Per-asset metadata in the compiler's emission order.
    pub assets: IndexMap<String, AssetInfo>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Compile start, epoch milliseconds.
    pub start_time: i64,
    /// Compile end, epoch milliseconds.
    pub end_time: i64,
}

impl CompileStats {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Elapsed compile time; zero when the timestamps are missing or
    /// inconsistent.
    pub fn duration(&self) -> Duration {
        let millis = self.end_time.saturating_sub(self.start_time).max(0);
        Duration::from_millis(millis as u64)
    }

    /// Compile start as local wall-clock time, when the compiler reported it.
    pub fn started_at(&self) -> Option<DateTime<Local>> {
        timestamp_millis(self.start_time)
    }

    /// Compile end as local wall-clock time, when the compiler reported it.
    pub fn ended_at(&self) -> Option<DateTime<Local>> {
        timestamp_millis(self.end_time)
    }
}

fn timestamp_millis(millis: i64) -> Option<DateTime<Local>> {
    if millis <= 0 {
        return None;
    }
    Local.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_parse_from_camel_case_json() {
        let json = r#"{
            "assets": {
                "app.js": {"size": 2048, "minimized": true},
                "logo.png": {"size": 1000, "sourceFilename": "src/static/images/logo.png"},
                "app.css": {"size": 512, "related": {"sourceMap": "app.css.map"}}
            },
            "warnings": ["deprecated loader"],
            "startTime": 1700000000000,
            "endTime": 1700000001500
        }"#;
        let result: CompileResult = serde_json::from_str(json).unwrap();
        let CompileResult::Stats(stats) = result else {
            panic!("expected a statistics snapshot");
        };

        assert_eq!(stats.assets.len(), 3);
        assert!(stats.assets["app.js"].minimized);
        assert!(stats.assets["logo.png"].is_copied());
        assert!(!stats.assets["app.css"].is_copied());
        assert_eq!(stats.assets["app.css"].related.len(), 1);
        assert!(!stats.has_errors());
        assert!(stats.has_warnings());
        assert_eq!(stats.duration(), Duration::from_millis(1500));
    }

    #[test]
    fn fatal_errors_parse_before_stats() {
        let json = r#"{"error": {"message": "entry not found", "details": "stack trace"}}"#;
        let result: CompileResult = serde_json::from_str(json).unwrap();
        let CompileResult::Fatal { error } = result else {
            panic!("expected a fatal error");
        };
        assert_eq!(error.message.as_deref(), Some("entry not found"));
        assert_eq!(error.details.as_deref(), Some("stack trace"));
    }

    #[test]
    fn assets_preserve_emission_order() {
        let json = r#"{"assets": {"z.js": {"size": 1}, "a.js": {"size": 2}, "m.js": {"size": 3}}}"#;
        let result: CompileResult = serde_json::from_str(json).unwrap();
        let CompileResult::Stats(stats) = result else {
            panic!("expected a statistics snapshot");
        };
        let names: Vec<&str> = stats.assets.keys().map(String::as_str).collect();
        assert_eq!(names, ["z.js", "a.js", "m.js"]);
    }

    #[test]
    fn missing_timestamps_yield_no_clock_times() {
        let stats = CompileStats::default();
        assert!(stats.started_at().is_none());
        assert!(stats.ended_at().is_none());
        assert_eq!(stats.duration(), Duration::ZERO);
    }

    #[test]
    fn inconsistent_timestamps_clamp_to_zero() {
        let stats = CompileStats {
            start_time: 2000,
            end_time: 1000,
            ..CompileStats::default()
        };
        assert_eq!(stats.duration(), Duration::ZERO);
    }
}
