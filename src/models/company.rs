use serde::Serialize;

/// A company hours are tracked for. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}
