use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").expect("valid regex"));

/// Pipe-delimited table rows.
pub struct PipeRow;

impl PipeRow {
    pub const PIPE: char = '|';

    /// Splits a `| a | b |` line into trimmed cells.
    pub fn cells(line: &str) -> Option<Vec<String>> {
        let t = line.trim();
        let inner = t.strip_prefix(Self::PIPE)?;
        let inner = inner.strip_suffix(Self::PIPE).unwrap_or(inner);
        Some(
            inner
                .split(Self::PIPE)
                .map(|c| c.trim().to_string())
                .collect(),
        )
    }

    /// True for a header separator row such as `| --- | :--: |`.
    pub fn is_separator(cells: &[String]) -> bool {
        !cells.is_empty() && cells.iter().all(|c| SEPARATOR_CELL.is_match(c))
    }

    /// Separator line for a header with `columns` cells.
    pub fn separator_line(columns: usize) -> String {
        let cells = vec!["---"; columns.max(1)];
        format!("| {} |", cells.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_cells_and_trims() {
        assert_eq!(
            PipeRow::cells("| Property | Value |"),
            Some(vec!["Property".to_string(), "Value".to_string()])
        );
    }

    #[test]
    fn trailing_pipe_is_optional() {
        assert_eq!(
            PipeRow::cells("| a | b"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn lines_without_leading_pipe_are_not_rows() {
        assert_eq!(PipeRow::cells("a | b"), None);
    }

    #[test]
    fn recognizes_separators() {
        let sep = PipeRow::cells("|---|:---:|--:|").unwrap();
        assert!(PipeRow::is_separator(&sep));

        let row = PipeRow::cells("| --- | text |").unwrap();
        assert!(!PipeRow::is_separator(&row));
    }

    #[test]
    fn separator_line_matches_column_count() {
        assert_eq!(PipeRow::separator_line(2), "| --- | --- |");
        assert_eq!(PipeRow::separator_line(0), "| --- |");
    }
}
