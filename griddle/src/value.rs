//! Dynamic cell values produced by column accessors.

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value extracted from a row by a column accessor.
///
/// The grid never assumes a shared row shape; everything it needs for
/// filtering, sorting and export flows through this enum. `Null` stands in
/// for missing fields and orders below every other value, so a column with
/// holes still sorts and filters without special-casing at the call sites.
///
/// # Example
///
/// ```
/// use griddle::value::CellValue;
///
/// let name = CellValue::from("Contoso");
/// let count = CellValue::from(42i64);
/// let missing = CellValue::Null;
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null/missing value. Orders lowest.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::String(_) => "string",
            CellValue::DateTime(_) => "datetime",
        }
    }

    /// Total ordering across all variants.
    ///
    /// `Null` is the lowest sentinel. Ints and floats compare numerically
    /// with each other; otherwise variants order by kind, then by value.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::{Bool, DateTime, Float, Int, Null, String};

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (String(a), String(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::String(_) => 3,
            CellValue::DateTime(_) => 4,
        }
    }
}

impl fmt::Display for CellValue {
    /// Display form used for prefix filtering and CSV cells.
    ///
    /// `Null` renders as the empty string so missing fields produce empty
    /// cells rather than a "null" literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::String(v) => write!(f, "{v}"),
            CellValue::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::String(v.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::String(v)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// Default display conversion used when a column has no cell renderer.
impl From<CellValue> for String {
    fn from(v: CellValue) -> Self {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CellValue;
    use std::cmp::Ordering;

    #[test]
    fn test_null_orders_below_everything() {
        let others = [
            CellValue::Bool(false),
            CellValue::Int(i64::MIN),
            CellValue::Float(f64::NEG_INFINITY),
            CellValue::String(String::new()),
        ];
        for other in &others {
            assert_eq!(CellValue::Null.compare(other), Ordering::Less);
            assert_eq!(other.compare(&CellValue::Null), Ordering::Greater);
        }
    }

    #[test]
    fn test_int_and_float_compare_numerically() {
        assert_eq!(
            CellValue::Int(2).compare(&CellValue::Float(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Float(1.5).compare(&CellValue::Int(2)),
            Ordering::Less
        );
    }

    #[test]
    fn test_null_displays_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
    }
}
