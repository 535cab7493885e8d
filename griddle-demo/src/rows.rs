//! Sample row types for the demo.

use chrono::{DateTime, TimeZone, Utc};
use griddle::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student record, the shape the school dashboard lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub username: String,
    pub fullname: String,
    pub phone_number: Option<String>,
    pub status: String,
    pub gender: String,
    pub role: String,
    pub registered_at: DateTime<Utc>,
}

impl GridRow for Student {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }

    fn field(&self, path: &str) -> Option<CellValue> {
        match path {
            "username" => Some(self.username.as_str().into()),
            "fullname" => Some(self.fullname.as_str().into()),
            "phoneNumber" => self.phone_number.as_deref().map(CellValue::from),
            "status" => Some(self.status.as_str().into()),
            "gender" => Some(self.gender.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "registeredAt" => Some(self.registered_at.into()),
            _ => None,
        }
    }
}

/// Columns for the student listing.
pub fn student_columns() -> Vec<Column<Student>> {
    vec![
        Column::field("username", "Username").fixed(16),
        Column::field("fullname", "Nama Lengkap").fixed(24),
        Column::field("phoneNumber", "Nomer Telepon").fixed(16),
        Column::field("status", "Status").fixed(10),
        Column::field("gender", "Jenis Kelamin").fixed(14),
        Column::field("role", "Role").fixed(10),
        Column::field("registeredAt", "Terdaftar")
            .filterable(false)
            .fixed(12)
            .csv_with(|student: &Student, _| student.registered_at.format("%Y-%m-%d").to_string())
            .render_with(|student, _| student.registered_at.format("%Y-%m-%d").to_string()),
    ]
}

/// A deterministic sample roster.
pub fn sample_students() -> Vec<Student> {
    let names = [
        ("andi", "Andi Wijaya", "male"),
        ("budi", "Budi Santoso", "male"),
        ("citra", "Citra Dewi", "female"),
        ("dina", "Dina Putri", "female"),
        ("eko", "Eko Prasetyo", "male"),
        ("fitri", "Fitri Handayani", "female"),
        ("gita", "Gita Lestari", "female"),
        ("hadi", "Hadi Nugroho", "male"),
        ("indah", "Indah Sari", "female"),
        ("joko", "Joko Susilo", "male"),
        ("kartika", "Kartika Maharani", "female"),
        ("lukman", "Lukman Hakim", "male"),
        ("maya", "Maya Anggraini", "female"),
        ("nanda", "Nanda Pratama", "male"),
        ("oki", "Oki Setiawan", "male"),
        ("putri", "Putri Rahayu", "female"),
        ("rudi", "Rudi Hartono", "male"),
        ("sari", "Sari Wulandari", "female"),
        ("tono", "Tono Firmansyah", "male"),
        ("umar", "Umar Fauzi", "male"),
        ("vina", "Vina Oktaviani", "female"),
        ("wawan", "Wawan Kurniawan", "male"),
        ("yanti", "Yanti Kusuma", "female"),
        ("zaki", "Zaki Ramadhan", "male"),
    ];

    names
        .iter()
        .enumerate()
        .map(|(i, (username, fullname, gender))| Student {
            id: Uuid::new_v4(),
            username: (*username).to_owned(),
            fullname: (*fullname).to_owned(),
            phone_number: if i % 5 == 0 {
                None
            } else {
                Some(format!("08{:09}", 110_000_000 + i as u64 * 7_717))
            },
            status: if i % 4 == 0 { "inactive" } else { "active" }.to_owned(),
            gender: (*gender).to_owned(),
            role: if i % 8 == 0 { "assistant" } else { "student" }.to_owned(),
            registered_at: Utc
                .with_ymd_and_hms(2024, 7, 1 + (i as u32 % 28), 8, 30, 0)
                .unwrap(),
        })
        .collect()
}
