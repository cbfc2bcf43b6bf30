use super::common::{CommentRule, compile};
use regex::Regex;
use std::sync::LazyLock;

static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"<!--[\s\S]*?-->"));

pub static RULES: [CommentRule; 1] = [CommentRule {
    pattern: &HTML_COMMENT,
}];
