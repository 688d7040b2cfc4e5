use std::sync::LazyLock;

use regex::Regex;

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,9})[.)](?:[ \t]+(.*))?$").expect("valid regex"));

/// List item markers: `-`, `*`, `+` and `N.` / `N)`.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    /// Returns `(ordered, text)` when `line` starts a list item.
    ///
    /// Indentation is ignored, so nested items are flattened.
    pub fn parse(line: &str) -> Option<(bool, String)> {
        let t = line.trim();
        let mut chars = t.chars();
        if let Some(first) = chars.next()
            && Self::BULLETS.contains(&first)
        {
            let rest = chars.as_str();
            if rest.is_empty() {
                return Some((false, String::new()));
            }
            if rest.starts_with([' ', '\t']) {
                return Some((false, rest.trim().to_string()));
            }
            return None;
        }

        let caps = ORDERED.captures(t)?;
        let text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        Some((true, text.to_string()))
    }
}
