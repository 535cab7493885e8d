//! Tests for page state and local slicing.

use griddle::error::ConfigError;
use griddle::page::{DEFAULT_PAGE_SIZE, PAGE_SIZES, PageState};

#[test]
fn test_default_page_size() {
    let page = PageState::default();
    assert_eq!(page.index, 0);
    assert_eq!(page.size, DEFAULT_PAGE_SIZE);
    assert!(PAGE_SIZES.contains(&page.size));
}

#[test]
fn test_zero_page_size_rejected() {
    assert_eq!(PageState::new(0), Err(ConfigError::ZeroPageSize));
}

#[test]
fn test_page_count_57_rows_size_20() {
    let page = PageState::new(20).unwrap();
    assert_eq!(page.page_count(57), 3);
}

#[test]
fn test_page_sizes_57_rows() {
    let rows: Vec<u32> = (0..57).collect();
    let mut page = PageState::new(20).unwrap();

    let mut sizes = Vec::new();
    for index in 0..page.page_count(rows.len()) {
        page.index = index;
        sizes.push(page.slice(&rows).len());
    }
    assert_eq!(sizes, vec![20, 20, 17]);
}

#[test]
fn test_pages_cover_exactly_the_row_set() {
    let rows: Vec<u32> = (0..57).collect();
    for size in [1, 3, 7, 20, 50, 100] {
        let mut page = PageState::new(size).unwrap();
        let mut collected = Vec::new();
        for index in 0..page.page_count(rows.len()) {
            page.index = index;
            collected.extend_from_slice(page.slice(&rows));
        }
        assert_eq!(collected, rows, "size {size}");
    }
}

#[test]
fn test_zero_rows_zero_pages() {
    let mut page = PageState::new(10).unwrap();
    assert_eq!(page.page_count(0), 0);
    page.index = 5;
    page.clamp(0);
    assert_eq!(page.index, 0);
}

#[test]
fn test_clamp_to_closest_valid_index() {
    let mut page = PageState::new(20).unwrap();
    page.index = 99;
    page.clamp(3);
    assert_eq!(page.index, 2);

    page.clamp(3);
    assert_eq!(page.index, 2);
}

#[test]
fn test_slice_beyond_range_is_empty() {
    let rows: Vec<u32> = (0..5).collect();
    let page = PageState {
        index: 7,
        size: 10,
    };
    assert!(page.slice(&rows).is_empty());
}

#[test]
fn test_has_previous_and_next() {
    let mut page = PageState::new(20).unwrap();
    assert!(!page.has_previous());
    assert!(page.has_next(3));

    page.index = 2;
    assert!(page.has_previous());
    assert!(!page.has_next(3));
}
