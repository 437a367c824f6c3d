//! Free-text filtering over preview columns.

use opsdeck_datasets::Row;

use crate::expand::DisplayRef;

/// True when some preview-column cell contains the search term,
/// case-insensitively. A blank term matches everything.
pub fn matches_search(row: &Row, preview_columns: &[String], term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    preview_columns.iter().any(|column| {
        row.get(column)
            .map(|cell| cell.to_display().to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

/// Keep the display refs whose source row matches the search term.
pub fn filter_refs(
    refs: Vec<DisplayRef>,
    rows: &[Row],
    preview_columns: &[String],
    term: &str,
) -> Vec<DisplayRef> {
    let needle = term.trim();
    if needle.is_empty() {
        return refs;
    }

    // Match each source row once; expanded duplicates share the verdict.
    let verdicts: Vec<bool> = rows
        .iter()
        .map(|row| matches_search(row, preview_columns, needle))
        .collect();

    refs.into_iter()
        .filter(|r| verdicts.get(r.source_index).copied().unwrap_or(false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_core::Scalar;

    use crate::expand::{ExpansionConfig, expand};

    fn row(pairs: &[(&str, Scalar)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn preview() -> Vec<String> {
        vec!["name".to_string()]
    }

    #[test]
    fn matches_case_insensitively() {
        let r = row(&[("name", "Hex Bolt".into()), ("stock", 4.0.into())]);

        assert!(matches_search(&r, &preview(), "hex"));
        assert!(matches_search(&r, &preview(), "BOLT"));
        assert!(!matches_search(&r, &preview(), "washer"));
    }

    #[test]
    fn only_preview_columns_are_searched() {
        let r = row(&[("name", "Hex Bolt".into()), ("notes", "fragile".into())]);

        assert!(!matches_search(&r, &preview(), "fragile"));
    }

    #[test]
    fn blank_terms_match_everything() {
        let r = row(&[("name", "Hex Bolt".into())]);

        assert!(matches_search(&r, &preview(), ""));
        assert!(matches_search(&r, &preview(), "   "));
    }

    #[test]
    fn numbers_match_their_rendered_form() {
        let r = row(&[("name", 1200.0.into())]);

        assert!(matches_search(&r, &preview(), "1200"));
    }

    #[test]
    fn expanded_duplicates_share_their_source_row_verdict() {
        let rows = vec![
            row(&[("name", "Alpha".into())]),
            row(&[("name", "Beta".into())]),
            row(&[("name", "Gamma".into())]),
        ];
        let refs = expand("sales", rows.len(), ExpansionConfig::default());

        let kept = filter_refs(refs, &rows, &preview(), "beta");

        // Every third expanded row cycles back to the matching source row.
        assert_eq!(kept.len(), 400);
        assert!(kept.iter().all(|r| r.source_index == 1));
    }
}
