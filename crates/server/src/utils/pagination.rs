/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse a `page` query value; absent or non-integer values mean page 1
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// The `page`-th slice (1-based) of `items`.
///
/// Pages below 1 and pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    if page < 1 || per_page == 0 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(per_page))
        .unwrap_or(usize::MAX);

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: i32) -> Vec<i32> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page() {
        let all = items(25);
        assert_eq!(paginate(&all, 1, QUESTIONS_PER_PAGE), &all[0..10]);
    }

    #[test]
    fn test_partial_last_page() {
        let all = items(25);
        assert_eq!(paginate(&all, 3, QUESTIONS_PER_PAGE), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let all = items(20);
        assert!(paginate(&all, 3, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&all, 0, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&all, -2, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&all, i64::MAX, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_empty_list() {
        let all: Vec<i32> = Vec::new();
        assert!(paginate(&all, 1, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("-1")), -1);
    }
}
