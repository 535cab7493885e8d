mod rows;
mod source;
mod storage;

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use griddle::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use rows::{Student, sample_students, student_columns};
use source::StudentApi;
use storage::{JsonFileBackend, config_dir};

const PREFS_KEY: &str = "grid.students";

#[tokio::main]
async fn main() {
    let log_file = File::create("griddle-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let prefs = prefs_provider();
    let saved: GridPrefs = prefs
        .get_or(PREFS_KEY, GridPrefs::default())
        .await
        .unwrap_or_default();
    log::info!("loaded prefs: page size {}", saved.page_size);

    local_mode_walkthrough(saved.page_size.max(1));
    delegated_mode_walkthrough().await;

    let updated = GridPrefs { page_size: 20 };
    if let Err(e) = prefs.set(PREFS_KEY, &updated).await {
        log::warn!("failed to persist prefs: {e}");
    }
}

fn prefs_provider() -> PrefsProvider {
    match config_dir() {
        Some(dir) => PrefsProvider::new(JsonFileBackend::new(dir.join("prefs.json"))),
        None => {
            log::warn!("no config directory; prefs will not persist");
            PrefsProvider::new(MemoryBackend::new())
        }
    }
}

fn local_mode_walkthrough(page_size: usize) {
    println!("== local mode ==");

    let callbacks = GridCallbacks::new()
        .on_edit(|student: &Student| println!("  [edit] {}", student.fullname))
        .on_remove(|students: &[Student]| {
            println!("  [remove] {} students handed to the service", students.len());
        })
        .on_selection_change(|students: &[Student]| {
            println!("  [selection] {} selected", students.len());
        })
        .action(RowAction::new("Whatsapp", |student: &Student| {
            match &student.phone_number {
                Some(phone) => println!("  [whatsapp] {phone}"),
                None => println!("  [whatsapp] no number on file"),
            }
        }))
        .bulk_action(BulkAction::new("Pulihkan", |students: &[Student]| {
            println!("  [restore] {} students handed to the service", students.len());
        }));

    let mut grid = DataGrid::new(student_columns(), sample_students())
        .expect("column configuration is valid")
        .with_page_size(page_size)
        .expect("page size is valid")
        .with_callbacks(callbacks)
        .with_csv(CsvConfig::new("students.csv"));

    print_view(&grid.view());

    println!("filter status by \"act\", sort by fullname:");
    grid.set_filter("status", "act");
    grid.toggle_sort("fullname");
    print_view(&grid.view());

    println!("global search \"put\":");
    grid.set_global_filter("put");
    print_view(&grid.view());
    grid.set_global_filter("");

    let first_key = grid.page_rows().first().map(GridRow::key);
    if let Some(key) = first_key {
        grid.toggle_row(key);
        grid.edit_row(&key);
        grid.run_action("Whatsapp", &key);
    }
    grid.toggle_page_selection();
    grid.run_bulk_action("Pulihkan");
    grid.toggle_page_selection();
    grid.remove_selected();

    let export = grid.export_csv();
    println!(
        "csv export: {} data rows to {:?}",
        export.rows.len(),
        export.filename,
    );
    match export.to_csv_string() {
        Ok(text) => {
            if let Some(header) = text.lines().next() {
                println!("  {header}");
            }
        }
        Err(e) => log::error!("csv serialization failed: {e}"),
    }
}

async fn delegated_mode_walkthrough() {
    println!("== delegated mode ==");

    let api = Arc::new(StudentApi::new(
        sample_students(),
        Duration::from_millis(25),
    ));
    let mut grid = DataGrid::with_source(student_columns(), api)
        .expect("column configuration is valid")
        .with_page_size(10)
        .expect("page size is valid")
        .with_callbacks(GridCallbacks::new().on_source_error(|error: &SourceError| {
            println!("  [error] {error}");
        }));

    if let Err(e) = grid.load().await {
        println!("initial load failed: {e}");
        return;
    }
    print_view(&grid.view());

    println!("server-side sort by username, page 2:");
    if let Some(request) = grid.toggle_sort("username") {
        let _ = grid.resolve(request).await;
    }
    if let Some(request) = grid.next_page() {
        let _ = grid.resolve(request).await;
    }
    print_view(&grid.view());
}

fn print_view(view: &GridView<uuid::Uuid, String>) {
    let widths: Vec<usize> = view
        .header
        .iter()
        .map(|h| usize::from(h.width.unwrap_or(12)))
        .collect();

    let header = view
        .header
        .iter()
        .zip(&widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.header))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {header}");

    for row in &view.rows {
        let line = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                let mut text = cell.clone();
                text.truncate(width);
                format!("{text:<width$}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        let marker = if row.selected { "*" } else { " " };
        println!(" {marker}{line}");
    }

    println!(
        "  page {}/{}, {} selected",
        view.page_index + 1,
        view.page_count.max(1),
        view.selected_count,
    );
}
