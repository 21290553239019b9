//! Shell-style glob matching with POSIX `fnmatch` semantics.
//!
//! This crate decides whether a text string satisfies a wildcard pattern under a
//! configurable set of [`Flag`]s. It does not touch the filesystem, expand globs
//! into file lists or cache compiled patterns; each call is a pure function of its inputs.
//!
//! # Pattern Syntax
//!
//! - `?` - Matches exactly one character (one Unicode code point)
//! - `*` - Matches zero or more characters
//! - `[abc]`, `[a-z]` - Matches one character from the class, ranges compare raw code points
//! - `[!a-z]`, `[^a-z]` - Matches one character not in the class
//! - `\x` - Matches `x` literally, unless [`Flag::NoEscape`] is set
//! - Any other character matches itself
//!
//! Malformed input never fails loudly: an unterminated class or a dangling escape
//! inside a class simply does not match.
//!
//! # Flags
//!
//! - [`Flag::NoEscape`] - backslash is an ordinary character
//! - [`Flag::Pathname`] - `/` is matched only by a literal `/` in the pattern
//! - [`Flag::Period`] - a leading `.` is matched only by a literal `.` in the pattern
//! - [`Flag::LeadingDir`] - the pattern may match just a leading path component
//! - [`Flag::CaseFold`] - comparisons ignore case
//!
//! # Examples
//!
//! ```
//! use fnmatch::{Flag, Flags, matches};
//!
//! assert!(matches("*.rs", "main.rs", Flags::empty()));
//! assert!(matches("*", "src/main.rs", Flags::empty()));
//! assert!(!matches("*", "src/main.rs", Flag::Pathname));
//! assert!(matches("src/*.rs", "src/main.rs", Flag::Pathname));
//! assert!(matches("[a-c]??", "BAR", Flag::CaseFold));
//! assert!(!matches("*", ".hidden", Flag::Period));
//! ```
//!
//! Several flags are combined into a single [`Flags`] value with the `|` operator:
//!
//! ```
//! use fnmatch::{Flag, matches};
//!
//! assert!(matches("*", "foo/bar", Flag::Pathname | Flag::LeadingDir));
//! ```

mod chars;
mod flags;
mod matcher;
mod range;

pub use flags::*;
pub use matcher::*;
