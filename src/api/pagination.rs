use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageMeta {
    pub(crate) page: u32,
    pub(crate) per_page: u32,
    pub(crate) total: u64,
    pub(crate) total_pages: u32,
}

#[derive(Debug)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) meta: PageMeta,
}

/// Slice a filtered list into one page. `total` counts the whole input, an
/// out-of-range page is an empty slice rather than an error, and a zero
/// `per_page` short-circuits to an empty zero-page result instead of
/// dividing by zero (callers reject non-positive values before this point).
pub(crate) fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Page<T> {
    let total = items.len() as u64;
    if per_page == 0 {
        return Page {
            items: Vec::new(),
            meta: PageMeta { page, per_page, total, total_pages: 0 },
        };
    }

    let total_pages = (total as u32).div_ceil(per_page);
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
    let window: Vec<T> = items.into_iter().skip(start).take(per_page as usize).collect();

    Page { items: window, meta: PageMeta { page, per_page, total, total_pages } }
}
