/// ATX headings: `#` through `######`.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns `(level, text)` when `line` is an ATX heading.
    ///
    /// The marker run must be followed by whitespace or end of line. A closing
    /// `#` run is dropped when it is separated from the text by a space.
    pub fn parse(line: &str) -> Option<(u8, String)> {
        let t = line.trim_start();
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &t[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((level as u8, Self::strip_closing(rest.trim()).to_string()))
    }

    fn strip_closing(text: &str) -> &str {
        let without = text.trim_end_matches(Self::MARKER);
        if without.is_empty() {
            ""
        } else if without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Typography", Some((1, "Typography")))]
    #[case("### Line height", Some((3, "Line height")))]
    #[case("## Floats ##", Some((2, "Floats")))]
    #[case("## C#", Some((2, "C#")))]
    #[case("#", Some((1, "")))]
    #[case("#hashtag", None)]
    #[case("####### seven", None)]
    #[case("plain", None)]
    fn parses_atx_headings(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        let parsed = AtxHeading::parse(line);
        assert_eq!(
            parsed.as_ref().map(|(l, t)| (*l, t.as_str())),
            expected
        );
    }
}
