//! Pattern-matching capability used by the demo.
//!
//! The demo only needs "subject × pattern → printed description", so the
//! engine sits behind [`PatternMatcher`]. [`RegexEngine`] is the default,
//! built on the ripgrep regex crates.

use std::fmt;
use std::io::{self, Write};

use grep_matcher::{Captures, Matcher};
use grep_regex::RegexMatcher;

/// One capture group's span in the subject. Offsets are in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Result of matching one subject against one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Leftmost-first match. `groups[0]` is the whole match; a group that
    /// did not participate is `None`.
    Matched {
        subject: String,
        pattern: String,
        groups: Vec<Option<Group>>,
    },
    NoMatch {
        subject: String,
        pattern: String,
    },
    InvalidPattern {
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched {
                subject,
                pattern,
                groups,
            } => {
                write!(f, "match {subject:?} =~ /{pattern}/")?;
                for (i, group) in groups.iter().enumerate() {
                    match group {
                        Some(g) => write!(f, "\n  ${i} = {:?} [{}..{}]", g.text, g.start, g.end)?,
                        None => write!(f, "\n  ${i} = <unset>")?,
                    }
                }
                Ok(())
            }
            Self::NoMatch { subject, pattern } => {
                write!(f, "no match {subject:?} =~ /{pattern}/")
            }
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern /{pattern}/: {reason}")
            }
        }
    }
}

/// Anything that can match a subject against a pattern and describe it.
pub trait PatternMatcher {
    fn describe(&self, subject: &str, pattern: &str) -> MatchOutcome;

    /// Write the description of the match, one trailing newline.
    fn match_and_print(&self, out: &mut dyn Write, subject: &str, pattern: &str) -> io::Result<()> {
        writeln!(out, "{}", self.describe(subject, pattern))
    }
}

/// [`PatternMatcher`] backed by `grep-regex`. Supports greedy and lazy
/// quantifiers and capture groups.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexEngine;

impl PatternMatcher for RegexEngine {
    fn describe(&self, subject: &str, pattern: &str) -> MatchOutcome {
        let matcher = match RegexMatcher::new(pattern) {
            Ok(m) => m,
            Err(e) => {
                return MatchOutcome::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                };
            }
        };

        match capture_groups(&matcher, subject) {
            Ok(Some(groups)) => MatchOutcome::Matched {
                subject: subject.to_string(),
                pattern: pattern.to_string(),
                groups,
            },
            Ok(None) => MatchOutcome::NoMatch {
                subject: subject.to_string(),
                pattern: pattern.to_string(),
            },
            Err(reason) => MatchOutcome::InvalidPattern {
                pattern: pattern.to_string(),
                reason,
            },
        }
    }
}

/// Run `matcher` once over `subject`. `Ok(None)` means no match.
fn capture_groups(
    matcher: &RegexMatcher,
    subject: &str,
) -> Result<Option<Vec<Option<Group>>>, String> {
    let mut caps = matcher.new_captures().map_err(|e| e.to_string())?;
    let found = matcher
        .captures(subject.as_bytes(), &mut caps)
        .map_err(|e| e.to_string())?;
    if !found {
        return Ok(None);
    }

    let groups = (0..caps.len())
        .map(|i| {
            caps.get(i).map(|m| Group {
                start: m.start(),
                end: m.end(),
                text: subject
                    .get(m.start()..m.end())
                    .unwrap_or_default()
                    .to_string(),
            })
        })
        .collect();
    Ok(Some(groups))
}
