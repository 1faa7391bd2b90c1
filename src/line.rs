//! Line-level utilities for Arlequin files.

/// The character that introduces a trailing comment.
pub const COMMENT_DELIMITER: char = '#';

/// The character that separates a key from its value.
pub const KEY_VALUE_DELIMITER: char = '=';

/// The characters that may quote a value.
const QUOTES: [char; 2] = ['"', '\''];

/// Removes any trailing comment from a line and trims surrounding
/// whitespace.
///
/// The portion of the line after the _last_ comment delimiter is kept. A
/// line with no comment delimiter, which is the common case, is returned
/// trimmed but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use arlequin::line;
///
/// assert_eq!(line::clean("  NbSamples=2  "), "NbSamples=2");
/// assert_eq!(line::clean("ignored # kept"), "kept");
/// assert_eq!(line::clean(""), "");
/// ```
pub fn clean(line: &str) -> &str {
    match line.rfind(COMMENT_DELIMITER) {
        Some(index) => line[index + COMMENT_DELIMITER.len_utf8()..].trim(),
        None => line.trim(),
    }
}

/// Extracts the value from a `Key=value` line.
///
/// The right-hand side of the first key-value delimiter is returned with
/// surrounding whitespace and surrounding single or double quotes
/// stripped. [`None`] is returned when the line contains no delimiter;
/// callers are expected to surface that as a malformed-input error.
///
/// # Examples
///
/// ```
/// use arlequin::line;
///
/// assert_eq!(line::value("SampleName=\"Pop1\""), Some("Pop1"));
/// assert_eq!(line::value("MissingData='?'"), Some("?"));
/// assert_eq!(line::value("NbSamples=2"), Some("2"));
/// assert_eq!(line::value("no delimiter here"), None);
/// ```
pub fn value(line: &str) -> Option<&str> {
    line.split_once(KEY_VALUE_DELIMITER)
        .map(|(_, value)| value.trim().trim_matches(QUOTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_without_comment() {
        assert_eq!(clean("h1 1 ACGT"), "h1 1 ACGT");
        assert_eq!(clean("   [Profile]\t"), "[Profile]");
    }

    #[test]
    fn clean_keeps_text_after_the_last_delimiter() {
        assert_eq!(clean("dropped # also dropped # NbSamples=2"), "NbSamples=2");
    }

    #[test]
    fn clean_empty_line() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn value_strips_quotes() {
        assert_eq!(value("DataType=\"DNA\""), Some("DNA"));
        assert_eq!(value("SampleName='A population'"), Some("A population"));
    }

    #[test]
    fn value_without_quotes() {
        assert_eq!(value("SampleSize= 16"), Some("16"));
    }

    #[test]
    fn value_without_delimiter() {
        assert_eq!(value("[Data]"), None);
    }
}
