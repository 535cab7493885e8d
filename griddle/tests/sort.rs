//! Tests for the sort engine.

use griddle::prelude::*;
use griddle::sort::{self, SortDirection, SortState};

#[derive(Debug, Clone, PartialEq)]
struct Task {
    id: u32,
    title: String,
    grade: Option<i64>,
}

impl GridRow for Task {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn field(&self, path: &str) -> Option<CellValue> {
        match path {
            "title" => Some(self.title.as_str().into()),
            "grade" => self.grade.map(CellValue::from),
            _ => None,
        }
    }
}

fn task(id: u32, title: &str, grade: Option<i64>) -> Task {
    Task {
        id,
        title: title.to_owned(),
        grade,
    }
}

fn rows() -> Vec<Task> {
    vec![
        task(1, "Aljabar", Some(80)),
        task(2, "Biologi", Some(70)),
        task(3, "Kimia", Some(80)),
        task(4, "Fisika", Some(60)),
    ]
}

fn columns() -> Vec<Column<Task>> {
    vec![
        Column::field("title", "Judul"),
        Column::field("grade", "Nilai"),
    ]
}

fn ids(rows: &[Task]) -> Vec<u32> {
    rows.iter().map(|t| t.id).collect()
}

#[test]
fn test_no_sort_is_identity() {
    let sorted = sort::apply(&rows(), None, &columns());
    assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
}

#[test]
fn test_ascending_sort() {
    let state = SortState::ascending("grade");
    let sorted = sort::apply(&rows(), Some(&state), &columns());
    assert_eq!(ids(&sorted), vec![4, 2, 1, 3]);
}

#[test]
fn test_ties_keep_input_order() {
    let state = SortState::ascending("grade");
    let sorted = sort::apply(&rows(), Some(&state), &columns());
    // tasks 1 and 3 both carry grade 80; 1 precedes 3 in the input
    let one = sorted.iter().position(|t| t.id == 1).unwrap();
    let three = sorted.iter().position(|t| t.id == 3).unwrap();
    assert!(one < three);
}

#[test]
fn test_descending_is_exact_reverse_of_ascending() {
    let asc = sort::apply(&rows(), Some(&SortState::ascending("grade")), &columns());
    let desc = sort::apply(&rows(), Some(&SortState::descending("grade")), &columns());
    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(desc, reversed);
}

#[test]
fn test_missing_values_sort_lowest() {
    let rows = vec![
        task(1, "Aljabar", Some(80)),
        task(2, "Biologi", None),
        task(3, "Kimia", Some(60)),
    ];
    let sorted = sort::apply(&rows, Some(&SortState::ascending("grade")), &columns());
    assert_eq!(ids(&sorted), vec![2, 3, 1]);
}

#[test]
fn test_unknown_column_is_identity() {
    let sorted = sort::apply(&rows(), Some(&SortState::ascending("missing")), &columns());
    assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
}

#[test]
fn test_toggle_cycles_ascending_descending_none() {
    let first = SortState::toggle(None, "grade");
    assert_eq!(first, Some(SortState::ascending("grade")));

    let second = SortState::toggle(first, "grade");
    assert_eq!(second, Some(SortState::descending("grade")));

    let third = SortState::toggle(second, "grade");
    assert_eq!(third, None);
}

#[test]
fn test_toggle_other_column_replaces_sort() {
    let state = Some(SortState::descending("grade"));
    let toggled = SortState::toggle(state, "title");
    assert_eq!(toggled, Some(SortState::ascending("title")));
}

#[test]
fn test_sort_reads_accessor_not_renderer() {
    let columns: Vec<Column<Task>> = vec![
        Column::field("title", "Judul").render_with(|_, value| {
            value.to_string().chars().rev().collect::<String>()
        }),
        Column::field("grade", "Nilai"),
    ];
    let sorted = sort::apply(&rows(), Some(&SortState::ascending("title")), &columns);
    // "Aljabar" still sorts first even though it renders reversed
    assert_eq!(ids(&sorted), vec![1, 2, 4, 3]);
}

#[test]
fn test_sort_direction_roundtrip() {
    assert_eq!(
        SortState::ascending("x").direction,
        SortDirection::Ascending
    );
    assert_eq!(
        SortState::descending("x").direction,
        SortDirection::Descending
    );
}
