//! The compile report.
//!
//! Projects a [`CompileResult`] to text. Three terminal outcomes: a fatal
//! error renders to stderr and nothing else; a finished compile with errors
//! renders nothing (the branch is acknowledged, not itemized); a finished
//! compile renders the copied-asset count, one line per generated asset with
//! size-tiered emphasis, a total, and a completion banner.
//!
//! Reporting holds no state across invocations: watch-mode rebuilds call
//! [`report`] once per result and each call is independent.

use indexmap::IndexMap;
use owo_colors::OwoColorize;
use takin_compiler::{AssetInfo, CompileResult, CompileStats, FatalError};

use crate::ui::format::{format_clock, format_elapsed, scaled_size, SizeTier};

/// Render one compile result.
pub fn report(result: &CompileResult) {
    match result {
        CompileResult::Fatal { error } => report_fatal(error),
        CompileResult::Stats(stats) if stats.has_errors() => {
            // Compile errors are recognized but not itemized in the report.
            tracing::debug!(errors = stats.errors.len(), "compile finished with errors");
        }
        CompileResult::Stats(stats) => report_finished(stats),
    }
}

/// Fatal outcome: the error (and detail, if any) on stderr, nothing else.
fn report_fatal(error: &FatalError) {
    let message = error.message.as_deref().unwrap_or("compiler failed");
    eprintln!("{}", message.red());
    if let Some(details) = &error.details {
        eprintln!("{details}");
    }
}

fn report_finished(stats: &CompileStats) {
    if stats.has_warnings() {
        // Warnings are only flagged in the banner, never itemized.
        tracing::debug!(warnings = stats.warnings.len(), "compile finished with warnings");
    }

    let (copied, generated) = partition_assets(&stats.assets);

    println!("\nstatic assets: {}\n", copied.len());

    let mut total = 0usize;
    for (name, info) in &generated {
        if let Some(line) = asset_line(name, info) {
            println!("{line}");
            total += 1;
        }
    }
    println!("Total: {total} assets.");
    println!("{}", completion_banner(stats));
}

/// Split the asset map into copied-verbatim and generated assets, preserving
/// the compiler's emission order. Assets with neither a copied marker nor a
/// size are dropped entirely.
pub(crate) fn partition_assets(
    assets: &IndexMap<String, AssetInfo>,
) -> (Vec<(&str, &AssetInfo)>, Vec<(&str, &AssetInfo)>) {
    let mut copied = Vec::new();
    let mut generated = Vec::new();
    for (name, info) in assets {
        if info.is_copied() {
            copied.push((name.as_str(), info));
        } else if info.size.is_some() {
            generated.push((name.as_str(), info));
        }
    }
    (copied, generated)
}

/// One generated-asset line: name, tiered size, annotations.
pub(crate) fn asset_line(name: &str, info: &AssetInfo) -> Option<String> {
    let size = info.size?;
    let (scaled, tier) = scaled_size(size);

    let mut line = format!("asset {}: {}", name.green(), paint_size(&scaled, tier));
    if info.minimized {
        line.push_str(" [minimized]");
    }
    if !info.related.is_empty() {
        let related = format!("{} related asset(s)", info.related.len());
        line.push_str(&format!(" {}", related.dimmed()));
    }
    Some(line)
}

fn paint_size(size: &str, tier: SizeTier) -> String {
    match tier {
        SizeTier::Bytes => size.dimmed().to_string(),
        SizeTier::Kilobytes => size.bright_cyan().to_string(),
        SizeTier::KilobytesLarge => size.bright_blue().to_string(),
        SizeTier::KilobytesHeavy => size.yellow().to_string(),
        SizeTier::KilobytesOversized => size.magenta().to_string(),
        SizeTier::Megabytes => size.red().to_string(),
    }
}

/// Completion banner: elapsed time, a warnings flag, and the compile's
/// wall-clock start and end.
pub(crate) fn completion_banner(stats: &CompileStats) -> String {
    let mut headline = format!(
        "Compile completed in {} seconds",
        format_elapsed(stats.duration())
    );
    if stats.has_warnings() {
        headline.push_str(" (with warnings)");
    }

    match (stats.started_at(), stats.ended_at()) {
        (Some(start), Some(end)) => {
            let clock = format!("{} -> {}", format_clock(&start), format_clock(&end));
            format!("\n{}: {}", headline.green(), clock.dimmed())
        }
        _ => format!("\n{}", headline.green()),
    }
}
