//! Size and time formatting for the compile report.

use std::time::Duration;

use chrono::{DateTime, Local, Timelike};

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * 1024;

/// Size tier of a generated asset; selects the emphasis used in the report.
///
/// Kilobyte-range assets get progressively stronger emphasis above 128, 256,
/// and 512 KB; megabyte-range assets get the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// Under a kilobyte.
    Bytes,
    /// Kilobyte range, base emphasis.
    Kilobytes,
    /// Above 128 KB.
    KilobytesLarge,
    /// Above 256 KB.
    KilobytesHeavy,
    /// Above 512 KB.
    KilobytesOversized,
    /// A megabyte or more.
    Megabytes,
}

/// Scale a byte count into its reported magnitude and tier.
///
/// Unit boundaries are inclusive: a full kilobyte reports in KB and a full
/// mebibyte in MB.
pub fn scaled_size(bytes: u64) -> (String, SizeTier) {
    if bytes >= MIB {
        let mb = bytes as f64 / MIB as f64;
        (format!("{mb:.1} MB"), SizeTier::Megabytes)
    } else if bytes >= KIB {
        let kb = bytes as f64 / KIB as f64;
        let tier = if kb > 512.0 {
            SizeTier::KilobytesOversized
        } else if kb > 256.0 {
            SizeTier::KilobytesHeavy
        } else if kb > 128.0 {
            SizeTier::KilobytesLarge
        } else {
            SizeTier::Kilobytes
        };
        (format!("{kb:.1} KB"), tier)
    } else {
        (format!("{bytes} B"), SizeTier::Bytes)
    }
}

/// Elapsed compile time as `seconds.milliseconds`.
pub fn format_elapsed(duration: Duration) -> String {
    format!("{}.{}", duration.as_secs(), duration.subsec_millis())
}

/// Wall-clock time as `H:M:S`, unpadded.
pub fn format_clock(time: &DateTime<Local>) -> String {
    format!("{}:{}:{}", time.hour(), time.minute(), time.second())
}
