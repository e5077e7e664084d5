use crate::time::TimeOfDay;
use std::fmt;

/// Valeur triable d'une cellule.
///
/// Ordre naturel à l'intérieur d'un même genre ; `Missing` passe en premier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellValue {
    Missing,
    Int(i64),
    Time(TimeOfDay),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => f.write_str("-"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Time(t) => write!(f, "{t}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<TimeOfDay> for CellValue {
    fn from(value: TimeOfDay) -> Self {
        CellValue::Time(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(CellValue::Missing, Into::into)
    }
}
