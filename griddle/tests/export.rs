//! Tests for the CSV projection.

use griddle::prelude::*;

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

fn rows() -> Vec<Task> {
    (0..25)
        .map(|i| Task {
            id: i,
            title: format!("Tugas {i:02}"),
            grade: if i == 3 { None } else { Some(i64::from(i) * 4) },
        })
        .collect()
}

fn columns() -> Vec<Column<Task>> {
    vec![
        Column::field("title", "Judul"),
        Column::field("grade", "Nilai"),
    ]
}

#[test]
fn test_export_is_rectangular_with_headers_first() {
    let grid = DataGrid::new(columns(), rows()).unwrap();
    let export = grid.export_csv();

    assert_eq!(export.header, vec!["Judul".to_owned(), "Nilai".to_owned()]);
    assert_eq!(export.rows.len(), 25);
    for row in &export.rows {
        assert_eq!(row.len(), 2);
    }
}

#[test]
fn test_export_covers_filtered_set_not_current_page() {
    let mut grid = DataGrid::new(columns(), rows())
        .unwrap()
        .with_page_size(10)
        .unwrap();
    grid.set_filter("title", "Tugas 1");
    grid.goto_page(1);

    // "Tugas 1" prefixes Tugas 10..19 (10 rows) plus nothing else
    let export = grid.export_csv();
    assert_eq!(export.rows.len(), 10);
    assert_eq!(export.rows[0][0], "Tugas 10");
    assert_eq!(export.rows[9][0], "Tugas 19");
}

#[test]
fn test_export_follows_sort_order() {
    let mut grid = DataGrid::new(columns(), rows()).unwrap();
    grid.toggle_sort("grade");
    grid.toggle_sort("grade");

    let export = grid.export_csv();
    assert_eq!(export.rows[0][1], "96");
}

#[test]
fn test_missing_value_exports_empty_cell() {
    let grid = DataGrid::new(columns(), rows()).unwrap();
    let export = grid.export_csv();
    assert_eq!(export.rows[3][1], "");
}

#[test]
fn test_csv_formatter_overrides_raw_value() {
    let columns: Vec<Column<Task>> = vec![
        Column::field("title", "Judul"),
        Column::field("grade", "Nilai").csv_with(|_, value| {
            if value.is_null() {
                "belum dinilai".to_owned()
            } else {
                format!("{value}/100")
            }
        }),
    ];
    let grid = DataGrid::new(columns, rows()).unwrap();
    let export = grid.export_csv();
    assert_eq!(export.rows[1][1], "4/100");
    assert_eq!(export.rows[3][1], "belum dinilai");
}

#[test]
fn test_export_honors_csv_config() {
    let grid = DataGrid::new(columns(), rows())
        .unwrap()
        .with_csv(CsvConfig::new("tugas.csv").separator(b';'));
    let export = grid.export_csv();
    assert_eq!(export.filename, "tugas.csv");

    let text = export.to_csv_string().unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Judul;Nilai"));
    assert_eq!(lines.next(), Some("Tugas 00;0"));
}

#[test]
fn test_export_independent_of_page_size() {
    let grid_small = DataGrid::new(columns(), rows())
        .unwrap()
        .with_page_size(5)
        .unwrap();
    let grid_large = DataGrid::new(columns(), rows())
        .unwrap()
        .with_page_size(100)
        .unwrap();
    assert_eq!(grid_small.export_csv(), grid_large.export_csv());
}
