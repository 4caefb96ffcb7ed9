use serde::Serialize;

/// One heart-rate sample flattened for the CSV report
///
/// Serialization order of the fields is the column order of the report and
/// must match [`crate::export::CSV_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HrRecord {
    /// Activity display name, shared by every record from one file
    pub name: String,
    /// Short date with unpadded day and month, e.g. `1.6.2023`
    pub date: String,
    /// 24-hour zero-padded clock time, e.g. `07:15:30`
    pub time: String,
    /// Heart-rate value exactly as it appeared in the source file
    pub heart_rate: String,
}
