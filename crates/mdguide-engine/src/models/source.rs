use relative_path::{RelativePath, RelativePathBuf};

/// A named piece of Markdown text, already resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: RelativePathBuf,
    text: String,
}

impl Source {
    pub fn new(name: impl Into<RelativePathBuf>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// The source identifier, normally a path relative to the input root.
    pub fn name(&self) -> &RelativePath {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Where the rendered HTML for this source goes, relative to an output dir.
    pub fn output_path(&self) -> RelativePathBuf {
        output_path_for(&self.name)
    }
}

/// `guides/layout.md` → `guides/layout.html`.
pub fn output_path_for(name: &RelativePath) -> RelativePathBuf {
    name.with_extension("html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension() {
        let source = Source::new("css/typography.md", "# Type");
        assert_eq!(source.output_path().as_str(), "css/typography.html");
    }

    #[test]
    fn output_path_adds_extension_when_missing() {
        let source = Source::new("README", "text");
        assert_eq!(source.output_path().as_str(), "README.html");
    }

    #[test]
    fn name_is_kept_verbatim() {
        let source = Source::new("html/semantics.md", "");
        assert_eq!(source.name().as_str(), "html/semantics.md");
        assert_eq!(source.text(), "");
    }
}
