//! The transform-rule catalog.
//!
//! Six fixed rule builders, one per recognized file type. Each produces a
//! [`Rule`]: a file matcher plus an ordered chain of processing stages. The
//! builders are independent of each other and match disjoint file types; the
//! only shared knob is the `source_map` flag, which localizes the
//! development/production distinction to a single boolean.

use std::path::Path;

use serde::Serialize;

/// Import include path the style preprocessor resolves against.
const STYLES_INCLUDE_PATH: &str = "src/styles";
/// Dependency-installation tree excluded from script transpilation.
const DEPENDENCY_DIR: &str = "/node_modules/";
const FONTS_OUTPUT_DIR: &str = "fonts/";
const IMAGES_OUTPUT_DIR: &str = "images/";

const FONT_EXTENSIONS: &[&str] = &["woff", "woff2", "ttf", "eot", "otf"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "jp2", "jpg2", "png", "webp", "svg", "gif"];

/// Matches files by extension, optionally tolerating a `?v=1.2.3`-style
/// version query after the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMatcher {
    pub extensions: Vec<String>,
    pub allow_version_query: bool,
}

impl FileMatcher {
    pub fn extension(ext: &str) -> Self {
        Self::extensions(&[ext])
    }

    pub fn extensions(exts: &[&str]) -> Self {
        Self {
            extensions: exts.iter().map(|e| (*e).to_owned()).collect(),
            allow_version_query: false,
        }
    }

    pub fn with_version_query(mut self) -> Self {
        self.allow_version_query = true;
        self
    }

    /// Whether a module request matches this rule's file type.
    pub fn matches(&self, request: &str) -> bool {
        let path = if self.allow_version_query {
            request.split('?').next().unwrap_or(request)
        } else {
            request
        };
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions.iter().any(|e| ext.eq_ignore_ascii_case(e))
            })
    }
}

/// How CSS-module syntax is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CssModules {
    /// Interoperable CSS only: resolve `:import`/`:export` without local
    /// class-name scoping.
    Icss,
}

/// One processing stage in a rule's chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "camelCase")]
pub enum Stage {
    /// Inject styles into the document at runtime (development builds).
    InlineStyles,
    /// Extract styles into a file owned by the importing chunk.
    ExtractStyles,
    /// Interpret CSS imports and optional CSS-module syntax.
    InterpretCss {
        source_map: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        modules: Option<CssModules>,
    },
    /// Apply vendor prefixes.
    VendorPrefix { source_map: bool },
    /// Compile the preprocessed style dialect, resolving imports against the
    /// shared include paths.
    PreprocessStyles {
        source_map: bool,
        include_paths: Vec<String>,
    },
    /// Transpile scripts for the target runtime.
    Transpile,
    /// Strip types, then transpile.
    StripTypes,
    /// Copy the matched file verbatim into an output subdirectory.
    CopyFile { name: String, output_path: String },
}

/// A file-type-to-stage-chain mapping consumed by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub test: FileMatcher,
    #[serde(rename = "use")]
    pub stages: Vec<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

/// Development injects styles inline so rebuilds stay cheap; production
/// extracts them to files.
fn style_entry_stage(source_map: bool) -> Stage {
    if source_map {
        Stage::InlineStyles
    } else {
        Stage::ExtractStyles
    }
}

/// Plain style sheets.
pub fn style_sheets(source_map: bool) -> Rule {
    Rule {
        test: FileMatcher::extension("css"),
        stages: vec![
            style_entry_stage(source_map),
            Stage::InterpretCss {
                source_map,
                modules: None,
            },
            Stage::VendorPrefix { source_map },
        ],
        exclude: None,
    }
}

/// Preprocessed style sheets: the plain chain plus the preprocessor, with
/// pure-ICSS module interpretation.
pub fn preprocessed_style_sheets(source_map: bool) -> Rule {
    Rule {
        test: FileMatcher::extension("scss"),
        stages: vec![
            style_entry_stage(source_map),
            Stage::InterpretCss {
                source_map,
                modules: Some(CssModules::Icss),
            },
            Stage::VendorPrefix { source_map },
            Stage::PreprocessStyles {
                source_map,
                include_paths: vec![STYLES_INCLUDE_PATH.to_owned()],
            },
        ],
        exclude: None,
    }
}

/// Plain scripts; dependency trees are shipped as-is.
pub fn scripts() -> Rule {
    Rule {
        test: FileMatcher::extension("js"),
        stages: vec![Stage::Transpile],
        exclude: Some(DEPENDENCY_DIR.to_owned()),
    }
}

/// Typed scripts.
pub fn typed_scripts() -> Rule {
    Rule {
        test: FileMatcher::extension("ts"),
        stages: vec![Stage::StripTypes],
        exclude: Some(DEPENDENCY_DIR.to_owned()),
    }
}

/// Font files are copied verbatim under `fonts/`, keeping their names.
pub fn fonts(name_pattern: &str) -> Rule {
    Rule {
        test: FileMatcher::extensions(FONT_EXTENSIONS).with_version_query(),
        stages: vec![Stage::CopyFile {
            name: name_pattern.to_owned(),
            output_path: FONTS_OUTPUT_DIR.to_owned(),
        }],
        exclude: None,
    }
}

/// Image files are copied verbatim under `images/`, keeping their names.
pub fn images(name_pattern: &str) -> Rule {
    Rule {
        test: FileMatcher::extensions(IMAGE_EXTENSIONS).with_version_query(),
        stages: vec![Stage::CopyFile {
            name: name_pattern.to_owned(),
            output_path: IMAGES_OUTPUT_DIR.to_owned(),
        }],
        exclude: None,
    }
}

/// The full catalog, in its fixed order: one rule per recognized file type.
pub fn build_rules(source_map_enabled: bool, asset_name_pattern: &str) -> Vec<Rule> {
    vec![
        style_sheets(source_map_enabled),
        preprocessed_style_sheets(source_map_enabled),
        scripts(),
        typed_scripts(),
        fonts(asset_name_pattern),
        images(asset_name_pattern),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_rule_per_file_type() {
        for source_map in [true, false] {
            let rules = build_rules(source_map, "[name].[ext]");
            assert_eq!(rules.len(), 6);

            // No two rules claim the same extension.
            let mut seen = Vec::new();
            for rule in &rules {
                for ext in &rule.test.extensions {
                    assert!(!seen.contains(ext), "extension {ext} matched twice");
                    seen.push(ext.clone());
                }
            }
        }
    }

    #[test]
    fn development_injects_styles_inline() {
        let rule = style_sheets(true);
        assert_eq!(rule.stages[0], Stage::InlineStyles);
    }

    #[test]
    fn production_extracts_styles() {
        let rule = style_sheets(false);
        assert_eq!(rule.stages[0], Stage::ExtractStyles);
    }

    #[test]
    fn preprocessed_styles_use_pure_icss_and_include_path() {
        let rule = preprocessed_style_sheets(true);
        assert!(rule.stages.iter().any(|stage| matches!(
            stage,
            Stage::InterpretCss {
                modules: Some(CssModules::Icss),
                ..
            }
        )));
        assert!(rule.stages.iter().any(|stage| matches!(
            stage,
            Stage::PreprocessStyles { include_paths, .. }
                if include_paths == &["src/styles".to_owned()]
        )));
    }

    #[test]
    fn script_rules_exclude_dependency_tree() {
        assert_eq!(scripts().exclude.as_deref(), Some("/node_modules/"));
        assert_eq!(typed_scripts().exclude.as_deref(), Some("/node_modules/"));
    }

    #[test]
    fn matcher_handles_extensions_and_version_queries() {
        let fonts = fonts("[name].[ext]");
        assert!(fonts.test.matches("icons.woff2"));
        assert!(fonts.test.matches("serif.ttf?v=1.2.3"));
        assert!(!fonts.test.matches("styles.css"));

        let css = FileMatcher::extension("css");
        assert!(css.matches("main.css"));
        // Without version-query tolerance the query is part of the name.
        assert!(!css.matches("main.css?v=1.2.3"));
        assert!(!css.matches("css"));
    }

    #[test]
    fn copy_rules_route_to_subdirectories() {
        let rule = images("[name].[ext]");
        assert_eq!(
            rule.stages,
            vec![Stage::CopyFile {
                name: "[name].[ext]".to_owned(),
                output_path: "images/".to_owned(),
            }]
        );
    }
}
