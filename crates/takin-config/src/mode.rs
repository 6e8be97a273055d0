//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Build mode for a single invocation.
///
/// Set once when assembly starts and never changed during a run. The mode
/// governs the source-map strategy, watch behavior, the presence of the
/// optimization phase, and the debug flag threaded through every transform
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Fast rebuilds: inline source maps, watch mode, no optimization phase.
    Development,
    /// Deployable output: chunk splitting and minification, no source maps.
    Production,
}

impl BuildMode {
    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    /// Source maps are the single flag threaded through every transform rule;
    /// enabled only for development builds.
    pub fn source_maps_enabled(self) -> bool {
        !self.is_production()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(BuildMode::Development),
            "production" => Ok(BuildMode::Production),
            other => Err(crate::Error::InvalidConfig(format!(
                "unknown build mode `{other}` (expected `development` or `production`)"
            ))),
        }
    }
}
