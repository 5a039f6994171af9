use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::StampError;
use crate::header::{self, Timestamp};

/// Create or truncate `path` and write the version header for `stamp`.
///
/// The text is rendered before the file is opened, so an open failure
/// leaves nothing behind and a successful open is followed by one write.
pub fn write_header(path: &Path, stamp: &Timestamp) -> Result<(), StampError> {
    let text = header::render(stamp);

    let mut file = File::create(path).map_err(|source| StampError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| StampError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Stamp `path` with the current local time and return the time written.
pub fn stamp(path: &Path) -> Result<Timestamp, StampError> {
    let now = Timestamp::now();
    write_header(path, &now)?;
    Ok(now)
}
