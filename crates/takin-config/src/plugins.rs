//! The plugin chain.
//!
//! Plugins are descriptors, not behavior: each one names a compiler extension
//! point and carries its parameters. The chain is ordered but order only
//! affects side-effect emission, not correctness; every descriptor is
//! independently togglable by simply not appending it.

use serde::Serialize;

use crate::config::BundleConfig;

/// Static source directories copied verbatim into the output tree.
const STATIC_IMAGES_DIR: &str = "src/static/images";
const STATIC_HTML_DIR: &str = "src/static/html";

/// Filenames for extracted styles, keyed by owning entry and chunk.
const STYLE_FILENAME: &str = "[name].css";
const STYLE_CHUNK_FILENAME: &str = "[id].css";

/// One copy-plugin source pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPattern {
    pub from: String,
    pub to: String,
    /// A missing source directory is tolerated rather than failing the build.
    pub no_error_on_missing: bool,
}

/// A compiler extension point plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "camelCase")]
pub enum PluginDescriptor {
    /// Report compile progress while the build runs.
    Progress,
    /// Reformat compiler diagnostics for humans.
    FriendlyErrors,
    /// Copy static source directories into the output tree.
    CopyStatic { patterns: Vec<CopyPattern> },
    /// Extract styles into files named after their owning entry/chunk.
    ExtractStyles {
        filename: String,
        chunk_filename: String,
    },
}

pub fn progress(config: &mut BundleConfig) {
    config.push_plugin(PluginDescriptor::Progress);
}

pub fn friendly_errors(config: &mut BundleConfig) {
    config.push_plugin(PluginDescriptor::FriendlyErrors);
}

/// Copies the two fixed static directories, tolerating the absence of either.
pub fn copy_static(config: &mut BundleConfig) {
    config.push_plugin(PluginDescriptor::CopyStatic {
        patterns: vec![
            CopyPattern {
                from: STATIC_IMAGES_DIR.to_owned(),
                to: "images".to_owned(),
                no_error_on_missing: true,
            },
            CopyPattern {
                from: STATIC_HTML_DIR.to_owned(),
                to: "html".to_owned(),
                no_error_on_missing: true,
            },
        ],
    });
}

pub fn extract_styles(config: &mut BundleConfig) {
    config.push_plugin(PluginDescriptor::ExtractStyles {
        filename: STYLE_FILENAME.to_owned(),
        chunk_filename: STYLE_CHUNK_FILENAME.to_owned(),
    });
}
