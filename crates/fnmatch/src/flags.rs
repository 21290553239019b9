// third-party imports
use enumset::{EnumSet, EnumSetType};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// An option changing how a pattern is matched.
///
/// Flag names are kebab-case when parsed or displayed, e.g. `no-escape` or `leading-dir`.
#[derive(EnumSetType, Debug, Display, EnumString, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum Flag {
    /// Backslash loses its special meaning and matches itself.
    NoEscape,
    /// A `/` in the text is never matched by `?`, `*` or a bracket expression.
    Pathname,
    /// A leading `.` in the text is never matched by `?`, `*` or a bracket expression.
    ///
    /// A period is leading at the start of the text, and, with [`Flag::Pathname`],
    /// right after a `/`.
    Period,
    /// The pattern only needs to match up to a `/` in the text.
    LeadingDir,
    /// Literal characters and bracket expressions are compared case-insensitively.
    CaseFold,
}

/// A set of [`Flag`]s, the single configuration value passed to a match.
///
/// Collecting flags into `Flags` unites them, see [`combine`] for the exclusive-or variant.
pub type Flags = EnumSet<Flag>;

/// Combines several flag values with exclusive-or.
///
/// Supplying the same flag an even number of times switches it back off.
///
/// # Examples
///
/// ```
/// use fnmatch::{Flag, Flags, combine};
///
/// assert_eq!(combine([Flag::Period, Flag::Pathname]), Flag::Period | Flag::Pathname);
/// assert_eq!(combine([Flag::Period, Flag::Period]), Flags::empty());
/// assert_eq!(combine([Flag::Period | Flag::CaseFold, Flag::Period.into()]), Flags::only(Flag::CaseFold));
/// ```
pub fn combine<I>(flags: I) -> Flags
where
    I: IntoIterator,
    I::Item: Into<Flags>,
{
    flags.into_iter().fold(Flags::empty(), |acc, flag| acc ^ flag.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use strum::IntoEnumIterator;

    #[test]
    fn test_names() {
        let names: Vec<&'static str> = Flag::iter().map(Into::into).collect();
        assert_eq!(names, ["no-escape", "pathname", "period", "leading-dir", "case-fold"]);

        for flag in Flag::iter() {
            assert_eq!(Flag::from_str(&flag.to_string()).unwrap(), flag);
        }

        assert!(Flag::from_str("casefold").is_err());
    }

    #[test]
    fn test_combine_empty() {
        assert_eq!(combine(Vec::<Flag>::new()), Flags::empty());
    }

    #[test]
    fn test_combine_toggles() {
        assert_eq!(combine([Flag::Pathname]), Flags::only(Flag::Pathname));
        assert_eq!(combine([Flag::Pathname, Flag::Pathname]), Flags::empty());
        assert_eq!(
            combine([Flag::Pathname, Flag::Pathname, Flag::Pathname]),
            Flags::only(Flag::Pathname)
        );
        assert_eq!(
            combine([Flag::Pathname | Flag::Period, Flag::Period | Flag::CaseFold]),
            Flag::Pathname | Flag::CaseFold
        );
    }

    #[test]
    fn test_collect_unites() {
        let flags: Flags = [Flag::Period, Flag::Period, Flag::NoEscape].into_iter().collect();
        assert_eq!(flags, Flag::Period | Flag::NoEscape);
    }
}
