//! Tests for the filter engine.

use griddle::filter::{self, FilterState};
use griddle::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Student {
    id: u32,
    username: String,
    fullname: String,
    phone: Option<String>,
}

impl GridRow for Student {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn field(&self, path: &str) -> Option<CellValue> {
        match path {
            "username" => Some(self.username.as_str().into()),
            "fullname" => Some(self.fullname.as_str().into()),
            "phone" => self.phone.as_deref().map(CellValue::from),
            _ => None,
        }
    }
}

fn student(id: u32, username: &str, fullname: &str, phone: Option<&str>) -> Student {
    Student {
        id,
        username: username.to_owned(),
        fullname: fullname.to_owned(),
        phone: phone.map(str::to_owned),
    }
}

fn rows() -> Vec<Student> {
    vec![
        student(1, "andi", "Andi Wijaya", Some("0811")),
        student(2, "budi", "Budi Santoso", None),
        student(3, "anita", "Anita Putri", Some("0822")),
        student(4, "citra", "Citra Dewi", Some("0833")),
    ]
}

fn columns() -> Vec<Column<Student>> {
    vec![
        Column::field("username", "Username"),
        Column::field("fullname", "Nama Lengkap"),
        Column::field("phone", "Nomer Telepon"),
    ]
}

fn ids(rows: &[Student]) -> Vec<u32> {
    rows.iter().map(|s| s.id).collect()
}

#[test]
fn test_prefix_match_is_case_insensitive() {
    let mut state = FilterState::new();
    state.set("username", "AN");
    let filtered = filter::apply(&rows(), &state, &columns());
    assert_eq!(ids(&filtered), vec![1, 3]);
}

#[test]
fn test_prefix_not_substring() {
    let mut state = FilterState::new();
    state.set("username", "ndi");
    let filtered = filter::apply(&rows(), &state, &columns());
    assert!(filtered.is_empty());
}

#[test]
fn test_empty_value_removes_constraint() {
    let mut state = FilterState::new();
    state.set("username", "an");
    state.set("username", "");
    assert!(state.is_empty());

    let filtered = filter::apply(&rows(), &state, &columns());
    assert_eq!(filtered.len(), 4);
}

#[test]
fn test_filter_preserves_input_order() {
    let mut state = FilterState::new();
    state.set("fullname", "a");
    let filtered = filter::apply(&rows(), &state, &columns());
    assert_eq!(ids(&filtered), vec![1, 3]);
}

#[test]
fn test_filter_is_idempotent() {
    let mut state = FilterState::new();
    state.set("username", "an");
    let once = filter::apply(&rows(), &state, &columns());
    let twice = filter::apply(&once, &state, &columns());
    assert_eq!(once, twice);
}

#[test]
fn test_stricter_constraint_never_grows_result() {
    let mut loose = FilterState::new();
    loose.set("username", "a");
    let mut strict = loose.clone();
    strict.set("fullname", "Anita");

    let loose_rows = filter::apply(&rows(), &loose, &columns());
    let strict_rows = filter::apply(&rows(), &strict, &columns());
    assert!(strict_rows.len() <= loose_rows.len());
    for row in &strict_rows {
        assert!(loose_rows.contains(row));
    }
}

#[test]
fn test_missing_value_passes_default_predicate() {
    let mut state = FilterState::new();
    state.set("phone", "08");
    let filtered = filter::apply(&rows(), &state, &columns());
    // budi has no phone and still passes
    assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
}

#[test]
fn test_custom_predicate_overrides_prefix() {
    let columns: Vec<Column<Student>> = vec![
        Column::field("username", "Username"),
        Column::field("fullname", "Nama Lengkap")
            .filter_with(|_, value, query| value.to_string().contains(query)),
    ];
    let mut state = FilterState::new();
    state.set("fullname", "Putri");
    let filtered = filter::apply(&rows(), &state, &columns);
    assert_eq!(ids(&filtered), vec![3]);
}

#[test]
fn test_global_filter_matches_across_columns() {
    let mut state = FilterState::new();
    state.set_global("wijaya");
    let filtered = filter::apply(&rows(), &state, &columns());
    assert_eq!(ids(&filtered), vec![1]);
}

#[test]
fn test_global_filter_is_fuzzy() {
    let mut state = FilterState::new();
    state.set_global("bsant");
    let filtered = filter::apply(&rows(), &state, &columns());
    assert_eq!(ids(&filtered), vec![2]);
}

#[test]
fn test_global_filter_no_match_empties_result() {
    let mut state = FilterState::new();
    state.set_global("zzzzzz");
    let filtered = filter::apply(&rows(), &state, &columns());
    assert!(filtered.is_empty());
}

#[test]
fn test_global_filter_skips_nonfilterable_columns() {
    let columns: Vec<Column<Student>> = vec![
        Column::field("username", "Username"),
        Column::field("fullname", "Nama Lengkap").filterable(false),
    ];
    let mut state = FilterState::new();
    state.set_global("wijaya");
    let filtered = filter::apply(&rows(), &state, &columns);
    assert!(filtered.is_empty());
}

#[test]
fn test_constraint_on_nonfilterable_column_is_not_applied() {
    let columns: Vec<Column<Student>> =
        vec![Column::field("username", "Username").filterable(false)];
    let mut state = FilterState::new();
    state.set("username", "zzz");
    let filtered = filter::apply(&rows(), &state, &columns);
    assert_eq!(filtered.len(), 4);
}
