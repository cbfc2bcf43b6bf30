pub mod c_family;
pub mod common;
pub mod markup;

pub use common::CommentRule;

use std::path::Path;

const MARKUP_SUFFIX: &str = ".md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `<!-- -->` comments.
    Markup,
    /// `//` and `/* */` comments.
    Code,
}

impl FileKind {
    /// Classifies by the literal, case-sensitive `.md` suffix of the path string.
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(MARKUP_SUFFIX) {
            FileKind::Markup
        } else {
            FileKind::Code
        }
    }

    pub fn rules(self) -> &'static [CommentRule] {
        match self {
            FileKind::Markup => &markup::RULES,
            FileKind::Code => &c_family::RULES,
        }
    }
}

pub fn strip_comments(content: &str, kind: FileKind) -> String {
    let mut current = content.to_string();
    for rule in kind.rules() {
        let next = rule.apply(&current).into_owned();
        current = next;
    }
    current
}
