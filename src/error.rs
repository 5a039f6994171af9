use std::path::PathBuf;

/// Every way stamping a header can fail. Displayed as user-facing messages.
#[derive(Debug)]
pub enum StampError {
    /// Wrong number of arguments. Printed to stdout, not stderr.
    Usage {
        program: String,
    },
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for StampError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage { program } => write!(f, "Usage: {program} <output file>"),
            Self::Open { path, source } => {
                write!(
                    f,
                    "cannot open the file <{}> for writing: {source}",
                    path.display()
                )
            }
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage { .. } => None,
            Self::Open { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

impl StampError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } | Self::Open { .. } | Self::Write { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn usage_names_program_and_argument() {
        let err = StampError::Usage {
            program: "version-stamper".into(),
        };
        assert_eq!(err.to_string(), "Usage: version-stamper <output file>");
        assert_eq!(err.exit_code(), 1);
        assert!(err.source().is_none());
    }

    #[test]
    fn open_error_names_path_and_cause() {
        let err = StampError::Open {
            path: PathBuf::from("/no/such/dir/out.h"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("</no/such/dir/out.h>"), "path: {msg}");
        assert!(msg.contains("for writing"), "intent: {msg}");
        assert_eq!(err.exit_code(), 1);
        assert!(err.source().is_some());
    }
}
