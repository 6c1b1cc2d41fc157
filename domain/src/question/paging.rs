//! Fixed-size pagination over catalog listings.
//!
//! Listings are windowed in pages of [`QUESTIONS_PER_PAGE`]. Page
//! numbers are 1-based; the absent or zero page means "everything".

/// Number of questions in one listing page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A requested listing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// No pagination: the whole listing.
    #[default]
    All,
    /// One 1-based page of [`QUESTIONS_PER_PAGE`] questions.
    Number(u32),
}

impl Page {
    /// Maps a raw query value to a page. Absent and zero both mean the
    /// unpaginated listing.
    pub fn from_query(raw: Option<u32>) -> Self {
        match raw {
            None | Some(0) => Page::All,
            Some(n) => Page::Number(n),
        }
    }
}

/// Returns the window of `items` selected by `page`.
///
/// A page past the end of the listing is empty, not an error. The last
/// page may be shorter than [`QUESTIONS_PER_PAGE`].
pub fn page_slice<T>(items: &[T], page: Page) -> &[T] {
    match page {
        Page::All => items,
        Page::Number(n) => {
            let start = (n.saturating_sub(1) as usize).saturating_mul(QUESTIONS_PER_PAGE);
            if start >= items.len() {
                return &[];
            }
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            &items[start..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_absent_page_means_everything() {
        assert_eq!(Page::from_query(None), Page::All);
        assert_eq!(Page::from_query(Some(0)), Page::All);
        assert_eq!(Page::from_query(Some(3)), Page::Number(3));
    }

    #[test]
    fn test_all_returns_full_listing() {
        let data = items(25);
        assert_eq!(page_slice(&data, Page::All).len(), 25);
    }

    #[test]
    fn test_first_page_window() {
        let data = items(25);
        let page = page_slice(&data, Page::Number(1));
        assert_eq!(page, &data[0..10]);
    }

    #[test]
    fn test_last_page_is_short() {
        let data = items(25);
        let page = page_slice(&data, Page::Number(3));
        assert_eq!(page, &data[20..25]);
        assert_eq!(page.len(), 5);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let data = items(25);
        assert!(page_slice(&data, Page::Number(4)).is_empty());
        assert!(page_slice(&data, Page::Number(1000)).is_empty());
    }

    #[test]
    fn test_pages_partition_the_listing() {
        // Successive pages reconstruct the listing without overlap.
        let data = items(37);
        let mut rebuilt = Vec::new();
        let mut page = 1;
        loop {
            let window = page_slice(&data, Page::Number(page));
            if window.is_empty() {
                break;
            }
            rebuilt.extend_from_slice(window);
            page += 1;
        }
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_empty_listing_pages_are_empty() {
        let data: Vec<usize> = Vec::new();
        assert!(page_slice(&data, Page::Number(1)).is_empty());
        assert!(page_slice(&data, Page::All).is_empty());
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let data = items(5);
        assert!(page_slice(&data, Page::Number(u32::MAX)).is_empty());
    }
}
