use super::common::{CommentRule, compile};
use regex::Regex;
use std::sync::LazyLock;

// `.` stops at '\n' but not at '\r', so a CRLF line loses its '\r' too.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"//.*"));
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"/\*[\s\S]*?\*/"));

/// Line comments go first; the block pass sees what the line pass left.
pub static RULES: [CommentRule; 2] = [
    CommentRule {
        pattern: &LINE_COMMENT,
    },
    CommentRule {
        pattern: &BLOCK_COMMENT,
    },
];
