/// Split text into lines on `\n` only.
///
/// Empty input yields no lines. A trailing newline yields a trailing empty line, so
/// joining the result with `\n` gives back the input unchanged.
pub fn split_into_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("a", vec!["a"])]
    #[case("a\n", vec!["a", ""])]
    #[case("a\nb\nc", vec!["a", "b", "c"])]
    #[case("\n\n", vec!["", "", ""])]
    #[case("a\r\nb", vec!["a\r", "b"])]
    fn splits_on_newline_only(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_into_lines(text), expected);
    }
}
