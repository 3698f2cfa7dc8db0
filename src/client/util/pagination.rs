/// Rows shown per table page
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` rows, at least 1 so an empty table still has a page
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Rows on the zero-based `page`, empty past the last page
pub fn page_items<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_mul(PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());

    &items[start..end]
}
