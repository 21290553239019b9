// std imports
use std::fmt;

// local imports
use crate::{
    chars::{fold_case, split_first},
    flags::{Flag, Flags},
    range::{self, Syntax},
};

/// Tests whether `text` matches the glob `pattern` under the given flags.
///
/// Returns `true` if the entire text matches the pattern, `false` otherwise.
/// This function never fails: malformed patterns just do not match.
///
/// # Examples
///
/// ```
/// use fnmatch::{Flag, Flags, matches};
///
/// assert!(matches("*.txt", "readme.txt", Flags::empty()));
/// assert!(!matches("*.txt", "readme.md", Flags::empty()));
///
/// // `?` matches exactly one character
/// assert!(matches("??", "🦀🎉", Flags::empty()));
///
/// // Escaped wildcards
/// assert!(matches(r"file\*.txt", "file*.txt", Flags::empty()));
/// assert!(!matches(r"file\*.txt", "file1.txt", Flags::empty()));
///
/// // Path-aware matching
/// assert!(matches("*/*.rs", "src/lib.rs", Flag::Pathname));
/// assert!(!matches("*.rs", "src/lib.rs", Flag::Pathname));
/// assert!(matches("src", "src/lib.rs", Flag::Pathname | Flag::LeadingDir));
/// ```
pub fn matches(pattern: &str, text: &str, flags: impl Into<Flags>) -> bool {
    Matcher::new(flags.into()).matches(pattern, text)
}

// ---

/// A glob pattern bundled with the flags it is matched with.
///
/// The pattern is kept as is and interpreted anew on each match.
///
/// # Examples
///
/// ```
/// use fnmatch::{Flag, Pattern};
///
/// let pattern = Pattern::new("*.log").with_flags(Flag::Period);
/// assert!(pattern.matches("app.log"));
/// assert!(!pattern.matches(".log"));
/// assert_eq!(pattern.to_string(), "*.log");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    raw: String,
    flags: Flags,
}

impl Pattern {
    /// Creates a new pattern with no flags set.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            flags: Flags::empty(),
        }
    }

    /// Replaces the flags the pattern is matched with.
    pub fn with_flags(self, flags: impl Into<Flags>) -> Self {
        Self {
            flags: flags.into(),
            ..self
        }
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Tests whether the pattern matches the given text.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        matches(&self.raw, text, self.flags)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ---

#[derive(Debug, Clone, Copy)]
struct Matcher {
    pathname: bool,
    period: bool,
    leading_dir: bool,
    syntax: Syntax,
}

impl Matcher {
    fn new(flags: Flags) -> Self {
        Self {
            pathname: flags.contains(Flag::Pathname),
            period: flags.contains(Flag::Period),
            leading_dir: flags.contains(Flag::LeadingDir),
            syntax: Syntax {
                escape: !flags.contains(Flag::NoEscape),
                case_fold: flags.contains(Flag::CaseFold),
            },
        }
    }

    fn matches(&self, mut pattern: &str, text: &str) -> bool {
        let mut text = Cursor::new(text, self.pathname);

        while let Some((pc, rest)) = split_first(pattern) {
            pattern = rest;

            match pc {
                '?' => {
                    if self.wild(&mut text).is_none() {
                        return false;
                    }
                }
                '*' => {
                    pattern = pattern.trim_start_matches('*');

                    if self.period && text.at_start && text.rest.starts_with('.') {
                        return false;
                    }

                    if pattern.is_empty() {
                        return !self.pathname || self.leading_dir || !text.rest.contains('/');
                    }

                    if let Some(rest) = pattern.strip_prefix('/').filter(|_| self.pathname) {
                        let Some(offset) = text.rest.find('/') else {
                            return false;
                        };
                        text.skip(offset);
                        text.advance();
                        pattern = rest;
                        continue;
                    }

                    return self.matches_suffix(pattern, text.rest);
                }
                '[' => {
                    let Some(ch) = self.wild(&mut text) else {
                        return false;
                    };
                    match range::match_class(pattern, ch, self.syntax) {
                        Some((true, rest)) => pattern = rest,
                        _ => return false,
                    }
                }
                '\\' if self.syntax.escape => {
                    let pc = match split_first(pattern) {
                        Some((escaped, rest)) => {
                            pattern = rest;
                            escaped
                        }
                        None => pc,
                    };
                    if !self.literal(&mut text, pc) {
                        return false;
                    }
                }
                _ => {
                    if !self.literal(&mut text, pc) {
                        return false;
                    }
                }
            }
        }

        text.rest.is_empty() || (self.leading_dir && text.rest.starts_with('/'))
    }

    /// Tries the rest of the pattern after `*` against every suffix of the text, longest first.
    fn matches_suffix(&self, pattern: &str, mut text: &str) -> bool {
        let inner = Self { period: false, ..*self };

        while let Some((ch, rest)) = split_first(text) {
            if inner.matches(pattern, text) {
                return true;
            }
            if self.pathname && ch == '/' {
                break;
            }
            text = rest;
        }

        false
    }

    /// Consumes one character for `?` or a bracket expression.
    #[inline]
    fn wild(&self, text: &mut Cursor<'_>) -> Option<char> {
        let at_start = text.at_start;
        let ch = text.advance()?;
        if self.pathname && ch == '/' {
            return None;
        }
        if self.period && at_start && ch == '.' {
            return None;
        }
        Some(ch)
    }

    /// Consumes one character that must be equal to `pc`.
    #[inline]
    fn literal(&self, text: &mut Cursor<'_>, pc: char) -> bool {
        match text.advance() {
            Some(ch) => pc == ch || (self.syntax.case_fold && fold_case(pc) == fold_case(ch)),
            None => false,
        }
    }
}

// ---

/// Position in the matched text.
///
/// `at_start` is set at the beginning of the text and, in path-aware mode, right after a `/`.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    rest: &'a str,
    at_start: bool,
    pathname: bool,
}

impl<'a> Cursor<'a> {
    #[inline]
    fn new(text: &'a str, pathname: bool) -> Self {
        Self {
            rest: text,
            at_start: true,
            pathname,
        }
    }

    #[inline]
    fn advance(&mut self) -> Option<char> {
        let (ch, rest) = split_first(self.rest)?;
        self.rest = rest;
        self.at_start = self.pathname && ch == '/';
        Some(ch)
    }

    /// Moves to the given byte offset, which must be a character boundary.
    #[inline]
    fn skip(&mut self, offset: usize) {
        if offset != 0 {
            self.rest = &self.rest[offset..];
            self.at_start = false;
        }
    }
}
