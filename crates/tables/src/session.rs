//! Table sessions: one view's UI controls plus the derivation run.

use opsdeck_datasets::{Row, RowStore};

use crate::expand::{DisplayRef, ExpansionConfig, expand};
use crate::filter::filter_refs;
use crate::paginate::{Paging, paginate};
use crate::sort::{SortDirection, SortSpec, sort_refs};

/// A display row handed to presentation: synthetic id, back-reference to the
/// true source row, and the cell data. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub display_id: String,
    pub source_index: usize,
    pub cells: Row,
}

/// Everything a table view renders for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<DisplayRow>,
    pub paging: Paging,
}

/// UI control state for one table view.
///
/// The session enforces the reset rules (changing dataset, search term, or
/// page size returns to page 1) and clamps the page after re-derivation, so
/// stale controls never leave a view on an empty page while rows exist.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSession {
    dataset_id: String,
    search: String,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
    expansion: ExpansionConfig,
}

impl TableSession {
    pub fn new(dataset_id: impl Into<String>, page_size: usize) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            search: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            expansion: ExpansionConfig::default(),
        }
    }

    pub fn with_expansion(mut self, expansion: ExpansionConfig) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Point the session at another dataset. Sort and page reset; the search
    /// term is kept so a user can compare datasets under one query.
    pub fn select_dataset(&mut self, dataset_id: impl Into<String>) {
        let dataset_id = dataset_id.into();
        if dataset_id == self.dataset_id {
            return;
        }
        self.dataset_id = dataset_id;
        self.sort = None;
        self.page = 1;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Request a page. Values outside range are clamped at derivation time.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Cycle the sort on `column`: ascending → descending → ascending.
    /// Sorting by a different column starts ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = Some(match &self.sort {
            Some(spec) if spec.column == column => SortSpec {
                column: spec.column.clone(),
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::ascending(column),
        });
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Run the pipeline against the store's current rows and return the
    /// visible page. The session's page is clamped to what the filter left.
    pub fn page_view(&mut self, store: &RowStore) -> TablePage {
        let rows = store.rows(&self.dataset_id);
        let preview_columns = store
            .registry()
            .get(&self.dataset_id)
            .map(|d| d.preview_columns().to_vec())
            .unwrap_or_default();

        let refs = expand(&self.dataset_id, rows.len(), self.expansion);
        let mut refs = filter_refs(refs, rows, &preview_columns, &self.search);
        if let Some(spec) = &self.sort {
            sort_refs(&mut refs, rows, spec);
        }

        let (paging, range) = paginate(refs.len(), self.page, self.page_size);
        self.page = paging.current_page;

        let rows = refs[range]
            .iter()
            .map(|r| materialize(r, rows))
            .collect();

        TablePage { rows, paging }
    }

    /// Merge a patch into the true source row behind a displayed row.
    pub fn edit_row(&self, store: &mut RowStore, display: &DisplayRow, patch: Row) {
        store.replace_row(&self.dataset_id, display.source_index, patch);
    }

    /// Delete the true source row behind a displayed row. Every expanded
    /// duplicate of that row disappears on the next derivation.
    pub fn delete_row(&self, store: &mut RowStore, display: &DisplayRow) {
        store.delete_row(&self.dataset_id, display.source_index);
    }
}

fn materialize(display_ref: &DisplayRef, rows: &[Row]) -> DisplayRow {
    DisplayRow {
        display_id: display_ref.display_id.clone(),
        source_index: display_ref.source_index,
        cells: rows
            .get(display_ref.source_index)
            .cloned()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use opsdeck_core::Scalar;
    use opsdeck_datasets::{DatasetDescriptor, DatasetRegistry};
    use opsdeck_infra::InMemoryKv;

    use super::*;

    fn row(pairs: &[(&str, Scalar)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn sales_rows() -> Vec<Row> {
        vec![
            row(&[("month", "Jan".into()), ("amount", 120.0.into())]),
            row(&[("month", "Feb".into()), ("amount", 90.0.into())]),
            row(&[("month", "Mar".into()), ("amount", 150.0.into())]),
        ]
    }

    fn store() -> RowStore {
        let descriptor = DatasetDescriptor::new(
            "sales",
            "Sales",
            "",
            vec!["month".to_string(), "amount".to_string()],
            vec!["month".to_string()],
            sales_rows(),
        )
        .unwrap();
        let registry = DatasetRegistry::new(vec![descriptor]).unwrap();
        RowStore::hydrate(registry, Arc::new(InMemoryKv::new()))
    }

    #[test]
    fn three_source_rows_render_as_twelve_hundred_display_rows() {
        let store = store();
        let mut session = TableSession::new("sales", 50);

        let page = session.page_view(&store);

        assert_eq!(page.paging.total_filtered, 1200);
        assert_eq!(page.paging.total_pages, 24);
        assert_eq!(page.rows.len(), 50);
        assert_eq!(page.rows[0].display_id, "sales-1");
        assert_eq!(page.rows[0].cells["month"], Scalar::from("Jan"));
    }

    #[test]
    fn filtering_by_one_source_row_keeps_every_third_display_row() {
        let store = store();
        let mut session = TableSession::new("sales", 50);

        session.set_search("feb");
        let page = session.page_view(&store);

        assert_eq!(page.paging.total_filtered, 400);
        assert!(page.rows.iter().all(|r| r.source_index == 1));
    }

    #[test]
    fn search_and_page_size_changes_reset_to_page_one() {
        let mut session = TableSession::new("sales", 50);

        session.set_page(7);
        session.set_search("feb");
        assert_eq!(session.page(), 1);

        session.set_page(3);
        session.set_page_size(100);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn a_stale_page_clamps_down_to_the_last_valid_page() {
        let store = store();
        let mut session = TableSession::new("sales", 50);

        session.set_search("feb"); // 400 matches → 8 pages
        session.set_page(30);
        let page = session.page_view(&store);

        assert_eq!(page.paging.current_page, 8);
        assert_eq!(session.page(), 8);
        assert!(!page.rows.is_empty());
    }

    #[test]
    fn sorting_applies_to_the_whole_filtered_set() {
        let store = store();
        let mut session = TableSession::new("sales", 3).with_expansion(ExpansionConfig { floor: 3 });

        session.toggle_sort("amount");
        let page = session.page_view(&store);

        let months: Vec<String> = page
            .rows
            .iter()
            .map(|r| r.cells["month"].to_display())
            .collect();
        assert_eq!(months, vec!["Feb", "Jan", "Mar"]);

        session.toggle_sort("amount");
        let page = session.page_view(&store);
        let months: Vec<String> = page
            .rows
            .iter()
            .map(|r| r.cells["month"].to_display())
            .collect();
        assert_eq!(months, vec!["Mar", "Jan", "Feb"]);
    }

    #[test]
    fn switching_the_sort_column_starts_ascending_again() {
        let mut session = TableSession::new("sales", 50);

        session.toggle_sort("amount");
        session.toggle_sort("amount");
        session.toggle_sort("month");

        assert_eq!(session.sort(), Some(&SortSpec::ascending("month")));
    }

    #[test]
    fn edits_through_a_display_row_land_on_the_source_row() {
        let mut store = store();
        let mut session = TableSession::new("sales", 50);

        // Pick an expanded duplicate well past the source length.
        session.set_page(8); // rows 351..400
        let page = session.page_view(&store);
        let display = page.rows.last().unwrap().clone();
        assert_eq!(display.display_id, "sales-400");
        assert_eq!(display.source_index, 399 % 3);

        session.edit_row(&mut store, &display, row(&[("amount", 999.0.into())]));

        assert_eq!(
            store.rows("sales")[display.source_index]["amount"],
            Scalar::Number(999.0)
        );
    }

    #[test]
    fn deleting_a_display_row_removes_its_source_row_everywhere() {
        let mut store = store();
        let mut session = TableSession::new("sales", 50);

        let page = session.page_view(&store);
        let feb = page.rows[1].clone();
        session.delete_row(&mut store, &feb);

        let page = session.page_view(&store);
        assert_eq!(store.rows("sales").len(), 2);
        assert_eq!(page.paging.total_filtered, 1200);
        assert!(
            page.rows
                .iter()
                .all(|r| r.cells["month"].to_display() != "Feb")
        );
    }

    #[test]
    fn an_empty_dataset_renders_an_empty_page() {
        let descriptor = DatasetDescriptor::new(
            "empty",
            "Empty",
            "",
            vec!["a".to_string()],
            vec!["a".to_string()],
            vec![],
        )
        .unwrap();
        let registry = DatasetRegistry::new(vec![descriptor]).unwrap();
        let store = RowStore::hydrate(registry, Arc::new(InMemoryKv::new()));
        let mut session = TableSession::new("empty", 50);

        let page = session.page_view(&store);

        assert!(page.rows.is_empty());
        assert_eq!(page.paging.total_filtered, 0);
        assert_eq!(page.paging.range_start, 0);
        assert_eq!(page.paging.range_end, 0);
    }

    #[test]
    fn selecting_another_dataset_resets_page_and_sort_but_keeps_search() {
        let mut session = TableSession::new("sales", 50);
        session.set_search("feb");
        session.set_page(4);
        session.toggle_sort("amount");

        session.select_dataset("inventory");

        assert_eq!(session.page(), 1);
        assert_eq!(session.sort(), None);
        assert_eq!(session.search(), "feb");
    }

    #[test]
    fn an_unknown_dataset_derives_an_empty_page() {
        let store = store();
        let mut session = TableSession::new("ghost", 50);

        let page = session.page_view(&store);

        assert!(page.rows.is_empty());
        assert_eq!(page.paging.total_pages, 1);
    }
}
