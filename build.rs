use std::env;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/header.rs"]
mod header;

fn main() {
    // Stamp the header demo-runner embeds with include_str!
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let stamp = header::Timestamp::now();

    fs::write(out_dir.join("version.h"), header::render(&stamp))
        .expect("failed to write version.h");

    // No rerun-if-changed: any change in the package restamps the header.
}
