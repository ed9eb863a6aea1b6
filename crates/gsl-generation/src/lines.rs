//! Splitting template text into output lines

/// Split text into lines on `\n`
///
/// Unlike [`str::lines`], a trailing newline produces a trailing empty line, so
/// `"a\n"` is two lines. A `\r` right before a `\n` is dropped.
pub fn lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(lines("public class A {").collect::<Vec<_>>(), vec!["public class A {"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(lines("").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_trailing_newline_yields_blank_line() {
        assert_eq!(lines("a\n").collect::<Vec<_>>(), vec!["a", ""]);
        assert_eq!(lines("\n").collect::<Vec<_>>(), vec!["", ""]);
    }

    #[test]
    fn test_crlf() {
        assert_eq!(lines("a\r\nb").collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
