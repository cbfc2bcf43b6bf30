use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const DEFAULT_PROGRAM_NAME: &str = "decomment";

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version = "0.1.0",
    about = "Strips // and /* */ comments (or <!-- --> in .md files) from a file in place",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    #[clap(
        value_name = "file_path",
        help = "File to rewrite without comments",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub path: PathBuf,
}

/// Parses raw argv. Anything other than exactly one argument after the program
/// name is rejected, and that argument is always taken as a path, even when it
/// is empty or looks like a flag.
pub fn parse_invocation(argv: &[OsString]) -> Option<CliArgs> {
    let [program, path] = argv else {
        return None;
    };
    CliArgs::try_parse_from([program.as_os_str(), OsStr::new("--"), path.as_os_str()]).ok()
}

pub fn program_name(argv: &[OsString]) -> String {
    argv.first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} <file_path>", program)
}
