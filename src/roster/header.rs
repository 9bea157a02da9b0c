use crate::roster::store::{ColumnIndex, Row};

/// Header label for the identifier column.
pub const ID_LABEL: &str = "id";
/// Primary header label for the name column.
pub const NAME_LABEL: &str = "nombre";
/// Header label for the attendance column.
pub const ATTENDANCE_LABEL: &str = "asistencia";

/// Recognized name-column labels, highest priority first.
pub const NAME_LABELS: [&str; 7] = [
    "nombre",
    "nombres",
    "participante",
    "name",
    "nombre y apellido",
    "fullname",
    "full name",
];

/// Outcome of inspecting the first stored row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderDetection {
    /// Whether row 1 is a header row (and therefore not data).
    pub has_header: bool,
    /// Normalized (trimmed, lowercased) labels; the default triple when no header was found.
    pub labels: Vec<String>,
}

impl HeaderDetection {
    /// Store row number of the first data row: 2 below a header, 1 otherwise.
    pub fn first_data_row(&self) -> u32 {
        if self.has_header { 2 } else { 1 }
    }
}

/// Column positions resolved once per roster read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderMapping {
    /// Identifier column.
    pub identifier: ColumnIndex,
    /// Display-name column.
    pub name: ColumnIndex,
    /// Attendance-flag column.
    pub attendance: ColumnIndex,
}

impl Default for HeaderMapping {
    fn default() -> Self {
        Self {
            identifier: ColumnIndex(0),
            name: ColumnIndex(1),
            attendance: ColumnIndex(2),
        }
    }
}

fn normalize_label(cell: &str) -> String {
    cell.trim().to_lowercase()
}

/// Treat row 1 as a header when any normalized cell is `id`, `nombre`, or `asistencia`.
pub fn detect_header(rows: &[Row]) -> HeaderDetection {
    if let Some(first) = rows.first() {
        let labels: Vec<String> = first.iter().map(|c| normalize_label(c)).collect();
        let is_header = labels
            .iter()
            .any(|l| l == ID_LABEL || l == NAME_LABEL || l == ATTENDANCE_LABEL);
        if is_header {
            return HeaderDetection {
                has_header: true,
                labels,
            };
        }
    }

    HeaderDetection {
        has_header: false,
        labels: [ID_LABEL, NAME_LABEL, ATTENDANCE_LABEL]
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
    }
}

/// Map normalized labels to column positions, falling back to 0/1/2.
pub fn resolve_columns(labels: &[String]) -> HeaderMapping {
    let position = |label: &str| labels.iter().position(|l| l == label).map(ColumnIndex);
    let fallback = HeaderMapping::default();

    HeaderMapping {
        identifier: position(ID_LABEL).unwrap_or(fallback.identifier),
        name: NAME_LABELS
            .iter()
            .find_map(|label| position(*label))
            .unwrap_or(fallback.name),
        attendance: position(ATTENDANCE_LABEL).unwrap_or(fallback.attendance),
    }
}

/// Rows that carry participant data, i.e. everything after a detected header.
pub fn data_rows<'a>(rows: &'a [Row], detection: &HeaderDetection) -> &'a [Row] {
    if detection.has_header {
        rows.get(1..).unwrap_or(&[])
    } else {
        rows
    }
}

#[cfg(test)]
#[path = "../../tests/unit/roster/header.rs"]
mod tests;
