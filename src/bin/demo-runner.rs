use std::io::{self, BufWriter, Write};

use verstamp::demo;
use verstamp::matcher::RegexEngine;

fn main() {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // Always exits 0; a closed stdout just ends the transcript early
    let _ = demo::run(&mut out, &RegexEngine, demo::build_version()).and_then(|()| out.flush());
}
