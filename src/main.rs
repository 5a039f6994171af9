use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use verstamp::error::StampError;

/// version-stamper — write a C header defining VERSION as the current local time.
#[derive(Parser)]
#[command(name = "version-stamper", version, about)]
struct Cli {
    /// Header file to create (or truncate).
    output: PathBuf,
}

/// What a raw argument list asks for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    /// `-h`, `--help`, `-V` or `--version`, answered by clap.
    Clap,
    Stamp(PathBuf),
}

/// Exactly one argument after the program name is the output path, taken
/// verbatim: `--`, a leading `-` or an empty string are not special.
fn invocation(args: &[OsString]) -> Result<Invocation, StampError> {
    let [_, arg] = args else {
        let program = args.first().map_or_else(
            || "version-stamper".into(),
            |p| p.to_string_lossy().into_owned(),
        );
        return Err(StampError::Usage { program });
    };

    if matches!(arg.to_str(), Some("-h" | "--help" | "-V" | "--version")) {
        return Ok(Invocation::Clap);
    }
    Ok(Invocation::Stamp(PathBuf::from(arg)))
}

fn main() {
    let args: Vec<OsString> = env::args_os().collect();

    let output = match invocation(&args) {
        Ok(Invocation::Stamp(path)) => path,
        // Prints help or version and exits 0
        Ok(Invocation::Clap) => Cli::parse_from(args).output,
        Err(e) => {
            println!("{e}");
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = verstamp::stamper::stamp(&output) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
