//! # Query Processor
//!
//! Pure filter/sort/paginate over the full record set. Takes
//! already-validated parameters and derives a bounded page plus pagination
//! metadata. Never mutates its input; identical inputs produce identical
//! output.

use std::cmp::Ordering;

use serde::Serialize;

use super::model::Application;

/// Default page number when none is supplied.
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when none is supplied.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort key for application listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Validated listing parameters.
///
/// The boundary guarantees `page >= 1` and `page_size >= 1`; the processor
/// relies on that contract instead of re-checking.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub page: usize,
    pub page_size: usize,
    pub filter_by_name: Option<String>,
    pub filter_by_status: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            filter_by_name: None,
            filter_by_status: None,
            sort_by: SortBy::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

/// A bounded slice of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub count: usize,
    pub records: Vec<Application>,
    pub total_pages: usize,
    pub current_page: usize,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
}

/// Filter, sort, and slice the record set into one page.
///
/// - Name filter: case-insensitive substring match.
/// - Status filter: case-insensitive exact match.
/// - Sort: stable, by the chosen field, case-insensitive collation,
///   reversed for descending order. Equal keys keep their pre-sort
///   relative order.
/// - Out-of-range pages yield an empty record slice, not an error.
pub fn paginate(records: &[Application], params: &QueryParams) -> Page {
    let mut filtered: Vec<&Application> = records
        .iter()
        .filter(|app| matches_name(app, params.filter_by_name.as_deref()))
        .filter(|app| matches_status(app, params.filter_by_status.as_deref()))
        .collect();

    filtered.sort_by(|a, b| {
        let cmp = match params.sort_by {
            SortBy::Name => collate(&a.name, &b.name),
            SortBy::Status => collate(a.status.as_str(), b.status.as_str()),
        };
        match params.sort_order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });

    let total_records = filtered.len();
    let total_pages = if total_records == 0 {
        0
    } else {
        (total_records + params.page_size - 1) / params.page_size
    };

    let start = (params.page - 1).saturating_mul(params.page_size);
    let slice: Vec<Application> = filtered
        .into_iter()
        .skip(start)
        .take(params.page_size)
        .cloned()
        .collect();

    Page {
        count: total_records,
        records: slice,
        total_pages,
        current_page: params.page,
        next_page: (params.page < total_pages).then(|| params.page + 1),
        prev_page: (params.page > 1).then(|| params.page - 1),
    }
}

fn matches_name(app: &Application, filter: Option<&str>) -> bool {
    match filter {
        None | Some("") => true,
        Some(needle) => app
            .name
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

fn matches_status(app: &Application, filter: Option<&str>) -> bool {
    match filter {
        None | Some("") => true,
        Some(wanted) => app.status.as_str().eq_ignore_ascii_case(wanted),
    }
}

/// Case-insensitive string collation with a deterministic tiebreak.
///
/// Approximates locale-aware comparison: lowercase forms are compared
/// first, so "alpha" sorts next to "Alpha" rather than after "Zeta". The
/// comparator returns Equal only for identical keys, which keeps the
/// stable sort's tie order intact.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
