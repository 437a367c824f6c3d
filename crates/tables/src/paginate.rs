//! Pagination over the filtered display list.

/// Page-size choices offered by the data-hub table controls. Other views pass
/// a fixed size of their own.
pub const PAGE_SIZES: [usize; 3] = [50, 100, 200];

/// Derived paging state for one table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    /// 1-based page actually shown (requested page clamped into range).
    pub current_page: usize,
    /// Always at least 1, even for an empty result set.
    pub total_pages: usize,
    /// 1-based index of the first visible row, 0 when nothing is visible.
    pub range_start: usize,
    /// 1-based index of the last visible row, 0 when nothing is visible.
    pub range_end: usize,
    pub total_filtered: usize,
}

/// Compute paging state and the half-open slice bounds for the visible page.
///
/// The requested page is clamped into `[1, total_pages]`, so a view whose
/// filter shrank never shows an empty page while a valid one exists.
pub fn paginate(total_filtered: usize, requested_page: usize, page_size: usize) -> (Paging, std::ops::Range<usize>) {
    let page_size = page_size.max(1);
    let total_pages = total_filtered.div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_filtered);
    let start = start.min(total_filtered);

    let paging = Paging {
        current_page,
        total_pages,
        range_start: if total_filtered == 0 { 0 } else { start + 1 },
        range_end: end,
        total_filtered,
    };

    (paging, start..end)
}
