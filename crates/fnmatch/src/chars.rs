/// Maps a character to the first code point of its lowercase form.
///
/// Folding is a one-to-one code point mapping usable in range comparisons,
/// so `İ` folds to `i` without the combining dot.
#[inline]
pub(crate) fn fold_case(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }

    ch.to_lowercase().next().unwrap_or(ch)
}

/// Splits the first character off a string.
#[inline]
pub(crate) fn split_first(s: &str) -> Option<(char, &str)> {
    let ch = s.chars().next()?;
    Some((ch, &s[ch.len_utf8()..]))
}
