//! The generated version header: an include-guarded `VERSION` macro
//! holding a local timestamp.
//!
//! Only depends on `chrono` and std so `build.rs` can include it with
//! `#[path]` and stamp the same text the `version-stamper` binary writes.

use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};

/// Name of the macro the header defines and guards on.
pub const MACRO: &str = "VERSION";

/// Layout of the quoted value: `YYYY-MM-DD HH:MM:SS`.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock local time, truncated to whole seconds. No offset is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Capture the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    #[must_use]
    pub fn from_naive(at: NaiveDateTime) -> Self {
        Self(at.with_nanosecond(0).unwrap_or(at))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

/// Full header text, three `\n`-terminated lines:
///
/// ```text
/// #ifndef VERSION
/// #define VERSION "2024-03-05 09:07:22"
/// #endif
/// ```
#[must_use]
pub fn render(stamp: &Timestamp) -> String {
    format!("#ifndef {MACRO}\n#define {MACRO} \"{stamp}\"\n#endif\n")
}

/// Pull the quoted value out of header text produced by [`render`].
/// Returns `None` unless the text is exactly the three-line guard.
#[must_use]
pub fn parse_version(text: &str) -> Option<&str> {
    let mut lines = text.lines();

    let guard = lines.next()?.strip_prefix("#ifndef ")?;
    if guard != MACRO {
        return None;
    }

    let value = lines
        .next()?
        .strip_prefix("#define ")?
        .strip_prefix(MACRO)?
        .strip_prefix(' ')?
        .strip_prefix('"')?
        .strip_suffix('"')?;
    if value.contains('"') {
        return None;
    }

    if lines.next()? != "#endif" || lines.next().is_some() {
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        let naive = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap();
        Timestamp::from_naive(naive)
    }

    #[test]
    fn render_exact_bytes() {
        let header = render(&at(2024, 3, 5, 9, 7, 22));
        assert_eq!(
            header,
            "#ifndef VERSION\n#define VERSION \"2024-03-05 09:07:22\"\n#endif\n"
        );
    }

    #[test]
    fn fields_are_zero_padded() {
        assert_eq!(at(987, 1, 2, 0, 0, 0).to_string(), "0987-01-02 00:00:00");
        assert_eq!(at(2023, 12, 31, 23, 59, 59).to_string(), "2023-12-31 23:59:59");
    }

    #[test]
    fn sub_second_precision_dropped() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(9, 7, 22, 999)
            .unwrap();
        let stamp = Timestamp::from_naive(naive);
        assert_eq!(stamp, at(2024, 3, 5, 9, 7, 22));
        assert_eq!(stamp.to_string(), "2024-03-05 09:07:22");
    }

    #[test]
    fn parse_reads_back_rendered_value() {
        let stamp = at(2001, 9, 9, 1, 46, 40);
        assert_eq!(parse_version(&render(&stamp)), Some("2001-09-09 01:46:40"));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("#ifndef VERSION\n"), None);
        // wrong guard name
        assert_eq!(
            parse_version("#ifndef OTHER\n#define VERSION \"x\"\n#endif\n"),
            None
        );
        // unquoted value
        assert_eq!(
            parse_version("#ifndef VERSION\n#define VERSION x\n#endif\n"),
            None
        );
        // missing #endif
        assert_eq!(
            parse_version("#ifndef VERSION\n#define VERSION \"x\"\n"),
            None
        );
        // trailing content
        assert_eq!(
            parse_version("#ifndef VERSION\n#define VERSION \"x\"\n#endif\nint y;\n"),
            None
        );
    }

    #[test]
    fn now_has_no_fraction() {
        assert_eq!(Timestamp::now().0.nanosecond(), 0);
    }
}
