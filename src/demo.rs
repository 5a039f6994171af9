//! Lazy vs. greedy `+` demonstration.

use std::io::{self, Write};

use crate::header;
use crate::matcher::PatternMatcher;

pub const SUBJECT: &str = "aaaa";
pub const LAZY_PATTERN: &str = "(a+?)";
pub const GREEDY_PATTERN: &str = "(a+)";
/// 40 × U+2500 BOX DRAWINGS LIGHT HORIZONTAL.
pub const SEPARATOR: &str = "────────────────────────────────────────";

const EXPLANATION: &str = "'(a+?)' looks for as few as possible of what's to the left";

/// Header stamped by `build.rs` when this crate was compiled.
const BUILD_HEADER: &str = include_str!(concat!(env!("OUT_DIR"), "/version.h"));

/// The `VERSION` value baked in at build time.
#[must_use]
pub fn build_version() -> &'static str {
    header::parse_version(BUILD_HEADER).unwrap_or("unknown")
}

/// Write the demo transcript: version banner, explanation, lazy match,
/// separator, greedy match.
pub fn run<M: PatternMatcher>(out: &mut dyn Write, matcher: &M, version: &str) -> io::Result<()> {
    writeln!(out, "VERSION: {version}\n")?;
    writeln!(out, "{EXPLANATION}\n")?;

    matcher.match_and_print(out, SUBJECT, LAZY_PATTERN)?;
    writeln!(out, "{SEPARATOR}")?;
    matcher.match_and_print(out, SUBJECT, GREEDY_PATTERN)
}
