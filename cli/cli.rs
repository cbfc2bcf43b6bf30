use decomment_core::{parse_invocation, program_name, strip_file};
mod report;

use anyhow::Result;
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let argv: Vec<OsString> = env::args_os().collect();

    let cli = match parse_invocation(&argv) {
        Some(cli) => cli,
        None => {
            report::print_usage(&program_name(&argv));
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(e) = strip_file(&cli.path) {
        report::print_failure(&e);
    }

    Ok(ExitCode::SUCCESS)
}
