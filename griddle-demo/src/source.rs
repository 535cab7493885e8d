//! In-memory page source standing in for the REST collaborator.

use std::time::Duration;

use async_trait::async_trait;
use griddle::prelude::*;
use tokio::time::sleep;

use crate::rows::Student;

/// Serves students the way a paged REST endpoint would: the forwarded
/// filter and sort run here, never in the grid.
pub struct StudentApi {
    students: Vec<Student>,
    latency: Duration,
}

impl StudentApi {
    pub fn new(students: Vec<Student>, latency: Duration) -> Self {
        Self { students, latency }
    }

    fn matches(student: &Student, filter: &FilterState) -> bool {
        for (column_id, query) in filter.iter() {
            let Some(value) = student.field(column_id) else {
                continue;
            };
            if !value
                .to_string()
                .to_lowercase()
                .starts_with(&query.to_lowercase())
            {
                return false;
            }
        }
        if let Some(global) = filter.global() {
            let haystack = format!(
                "{} {} {}",
                student.username, student.fullname, student.status
            );
            if !haystack.to_lowercase().contains(&global.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl PageSource<Student> for StudentApi {
    async fn fetch(&self, request: PageRequest) -> Result<PageResponse<Student>, SourceError> {
        sleep(self.latency).await;

        let mut rows: Vec<Student> = self
            .students
            .iter()
            .filter(|s| Self::matches(s, &request.filter))
            .cloned()
            .collect();

        if let Some(sort) = &request.sort {
            let mut keyed: Vec<(CellValue, Student)> = rows
                .into_iter()
                .map(|s| (s.field(&sort.column_id).unwrap_or(CellValue::Null), s))
                .collect();
            keyed.sort_by(|a, b| a.0.compare(&b.0));
            if sort.direction == SortDirection::Descending {
                keyed.reverse();
            }
            rows = keyed.into_iter().map(|(_, s)| s).collect();
        }

        let page_count = rows.len().div_ceil(request.page.size);
        let start = (request.page.index * request.page.size).min(rows.len());
        let end = (start + request.page.size).min(rows.len());
        Ok(PageResponse::new(rows[start..end].to_vec(), page_count))
    }
}
