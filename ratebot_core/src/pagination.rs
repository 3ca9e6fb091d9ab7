//! Fixed-size pages over a snapshot's entry list.
//!
//! Pages are 1-based. Every function here is pure; callers own the page index
//! and are expected to [`normalize`] it before slicing.

use crate::{Error, RateEntry, RateFeedSnapshot, Result};

/// Entries per page. Ten currencies plus the "more" control is the
/// platform's cap of eleven quick replies.
pub const PAGE_SIZE: usize = 10;

/// Number of pages in a snapshot, never less than one.
#[must_use]
pub fn page_count(snapshot: &RateFeedSnapshot) -> usize {
    let pages = snapshot.len().div_ceil(PAGE_SIZE);
    if pages == 0 { 1 } else { pages }
}

/// Map a page outside `[1, page_count]` back to the first page.
#[must_use]
pub fn normalize(page: usize, snapshot: &RateFeedSnapshot) -> usize {
    if page >= 1 && page <= page_count(snapshot) {
        page
    } else {
        1
    }
}

/// Entries shown on `page`, clipped to the end of the list.
#[must_use]
pub fn slice(snapshot: &RateFeedSnapshot, page: usize) -> &[RateEntry] {
    let len = snapshot.len();
    if page == 0 {
        return &[];
    }
    let start = ((page - 1).saturating_mul(PAGE_SIZE)).min(len);
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    &snapshot.entries[start..end]
}

/// Page shown after `page`. The last page (partial or full) wraps to 1.
#[must_use]
pub fn advance(page: usize, snapshot: &RateFeedSnapshot) -> usize {
    if page.saturating_mul(PAGE_SIZE) >= snapshot.len() {
        1
    } else {
        page + 1
    }
}

/// Find `code` among the entries of `page` only.
pub fn resolve<'a>(
    snapshot: &'a RateFeedSnapshot,
    page: usize,
    code: &str,
) -> Result<&'a RateEntry> {
    slice(snapshot, page)
        .iter()
        .find(|entry| entry.currency_code == code)
        .ok_or_else(|| Error::NotFound {
            code: code.to_string(),
            page,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot_with(n: usize) -> RateFeedSnapshot {
        let entries = (0..n)
            .map(|i| RateEntry {
                currency_code: format!("C{i:02}"),
                currency_name: format!("Currency {i}"),
                buy: format!("{i}.10"),
                transfer: format!("{i}.20"),
                sell: format!("{i}.30"),
            })
            .collect();
        RateFeedSnapshot::new("now".to_string(), entries, "test".to_string())
    }

    #[test]
    fn page_count_rounds_up_and_has_a_floor() {
        assert_eq!(page_count(&snapshot_with(0)), 1);
        assert_eq!(page_count(&snapshot_with(1)), 1);
        assert_eq!(page_count(&snapshot_with(10)), 1);
        assert_eq!(page_count(&snapshot_with(11)), 2);
        assert_eq!(page_count(&snapshot_with(25)), 3);
    }

    #[test]
    fn slice_clips_last_page() {
        let snapshot = snapshot_with(12);
        assert_eq!(slice(&snapshot, 1).len(), 10);
        let second = slice(&snapshot, 2);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].currency_code, "C10");
        assert_eq!(second[1].currency_code, "C11");
    }

    #[test]
    fn slice_out_of_range_is_empty() {
        let snapshot = snapshot_with(12);
        assert!(slice(&snapshot, 0).is_empty());
        assert!(slice(&snapshot, 3).is_empty());
        assert!(slice(&snapshot, usize::MAX).is_empty());
        assert!(slice(&snapshot_with(0), 1).is_empty());
    }

    #[test]
    fn advance_cycles_back_to_first_page() {
        let snapshot = snapshot_with(25);
        assert_eq!(advance(1, &snapshot), 2);
        assert_eq!(advance(2, &snapshot), 3);
        assert_eq!(advance(3, &snapshot), 1);
    }

    #[test]
    fn advance_wraps_on_exact_last_page() {
        let snapshot = snapshot_with(20);
        assert_eq!(advance(1, &snapshot), 2);
        assert_eq!(advance(2, &snapshot), 1);
        assert_eq!(advance(1, &snapshot_with(0)), 1);
    }

    #[test]
    fn normalize_wraps_out_of_range_pages() {
        let snapshot = snapshot_with(25);
        assert_eq!(normalize(0, &snapshot), 1);
        assert_eq!(normalize(2, &snapshot), 2);
        assert_eq!(normalize(3, &snapshot), 3);
        assert_eq!(normalize(4, &snapshot), 1);
    }

    #[test]
    fn resolve_only_searches_the_given_page() {
        let snapshot = snapshot_with(25);
        let entry = resolve(&snapshot, 2, "C12").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(entry.currency_name, "Currency 12");

        let err = resolve(&snapshot, 1, "C12").err();
        assert!(matches!(err, Some(Error::NotFound { page: 1, .. })));
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let snapshot = snapshot_with(5);
        assert!(resolve(&snapshot, 1, "c01").is_err());
        assert!(resolve(&snapshot, 1, "C01").is_ok());
    }

    proptest! {
        #[test]
        fn slice_is_contiguous_window(len in 0usize..60, raw_page in 1usize..8) {
            let snapshot = snapshot_with(len);
            let page = normalize(raw_page, &snapshot);
            let window = slice(&snapshot, page);

            let expected = PAGE_SIZE.min(len.saturating_sub(PAGE_SIZE * (page - 1)));
            prop_assert_eq!(window.len(), expected);

            let start = (page - 1) * PAGE_SIZE;
            for (offset, entry) in window.iter().enumerate() {
                prop_assert_eq!(entry, &snapshot.entries[start + offset]);
            }
        }

        #[test]
        fn advance_orbit_visits_every_page(len in 0usize..60) {
            let snapshot = snapshot_with(len);
            let pages = page_count(&snapshot);
            let mut page = 1;
            for expected in 2..=pages {
                page = advance(page, &snapshot);
                prop_assert_eq!(page, expected);
            }
            prop_assert_eq!(advance(page, &snapshot), 1);
        }

        #[test]
        fn resolve_never_leaves_its_page(
            len in 1usize..60,
            raw_page in 1usize..8,
            index in 0usize..60
        ) {
            let snapshot = snapshot_with(len);
            let page = normalize(raw_page, &snapshot);
            let code = snapshot.entries[index % len].currency_code.clone();
            let on_page = slice(&snapshot, page).iter().any(|e| e.currency_code == code);
            prop_assert_eq!(resolve(&snapshot, page, &code).is_ok(), on_page);
        }
    }
}
