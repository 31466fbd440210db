//! Compiled pattern tables, built once at first use and shared read-only
//! from then on.

use once_cell::sync::Lazy;
use regex::Regex;

/// A heading line: 1-6 `#` at column zero, and the character after the run
/// (if any) is not another `#`. Leading whitespace disqualifies the line.
pub static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})([^#].*)?$").expect("heading pattern"));

/// A blockquote line: up to three leading spaces, `>`, one optional space.
pub static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}>[ ]?(.*)$").expect("blockquote pattern"));

/// All five inline spans in one alternation. Order matters twice over:
/// image before link because `![...]` is a superset of `[...]`, and bold
/// before italic so `**` pairs win over `*` at the same start. The
/// quantifiers are lazy, and the regex engine is leftmost-first, which
/// together give the shortest earliest match.
pub static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[.+?\]\(.+?\)|\[.+?\]\(.+?\)|\*\*.+?\*\*|\*.+?\*|`.+?`")
        .expect("inline pattern")
});
