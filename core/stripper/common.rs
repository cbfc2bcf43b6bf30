use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A single removal pass: every match of `pattern` is deleted.
#[derive(Debug)]
pub struct CommentRule {
    pub pattern: &'static LazyLock<Regex>,
}

impl CommentRule {
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, "")
    }
}

pub(crate) fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid comment pattern {pattern:?}: {err}"),
    }
}
