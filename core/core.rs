pub mod args;
pub mod processor;
pub mod stripper;

pub use args::{CliArgs, parse_invocation, program_name, usage};
pub use processor::strip_file;
pub use stripper::{CommentRule, FileKind, strip_comments};

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StripError {
    #[error("Error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
