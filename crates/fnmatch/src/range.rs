// local imports
use crate::chars::{fold_case, split_first};

/// Options affecting how a bracket expression is read and compared.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Syntax {
    pub escape: bool,
    pub case_fold: bool,
}

/// Tests a single character against a bracket expression.
///
/// `pattern` starts right after the opening `[`.
/// Returns whether the character is selected by the class together with the rest of the pattern
/// after the closing `]`, or `None` if the class is malformed.
///
/// The whole class is always scanned, even when membership is decided early.
pub(crate) fn match_class(pattern: &str, ch: char, syntax: Syntax) -> Option<(bool, &str)> {
    let ch = syntax.fold(ch);

    let (negate, mut pattern) = match split_first(pattern)? {
        ('!' | '^', rest) => (true, rest),
        _ => (false, pattern),
    };

    let mut found = false;
    let mut first = true;

    loop {
        let (c, rest) = split_first(pattern)?;
        if c == ']' && !first {
            return Some((found != negate, rest));
        }
        first = false;

        let (low, rest) = syntax.member(c, rest)?;

        match rest.strip_prefix('-') {
            Some(tail) if !tail.is_empty() && !tail.starts_with(']') => {
                let (c, tail) = split_first(tail)?;
                let (high, tail) = syntax.member(c, tail)?;
                found |= low <= ch && ch <= high;
                pattern = tail;
            }
            _ => {
                found |= low == ch;
                pattern = rest;
            }
        }
    }
}

impl Syntax {
    #[inline]
    fn fold(&self, ch: char) -> char {
        if self.case_fold { fold_case(ch) } else { ch }
    }

    #[inline]
    fn member<'a>(&self, c: char, rest: &'a str) -> Option<(char, &'a str)> {
        let (c, rest) = if c == '\\' && self.escape {
            split_first(rest)?
        } else {
            (c, rest)
        };
        Some((self.fold(c), rest))
    }
}
