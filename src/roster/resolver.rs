use crate::{
    foundation::error::{PassError, PassResult},
    roster::header::{HeaderMapping, data_rows, detect_header, resolve_columns},
    roster::store::{Row, RosterStore, RowLocation},
};

/// Literal stored in the attendance column once a participant is checked in.
pub const ATTENDANCE_TOKEN: &str = "SI";

/// One participant as read from the roster.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParticipantRecord {
    /// Trimmed identifier cell.
    pub identifier: String,
    /// Trimmed name cell; may be empty (see [`ParticipantRecord::display_name`]).
    pub name: String,
    /// Whether the attendance cell holds the confirmation token.
    pub attendance_marked: bool,
    /// Store row holding this record.
    #[serde(skip)]
    pub location: RowLocation,
}

impl ParticipantRecord {
    fn from_row(row: &Row, mapping: &HeaderMapping, location: RowLocation) -> Self {
        Self {
            identifier: cell(row, mapping.identifier.0).trim().to_owned(),
            name: cell(row, mapping.name.0).trim().to_owned(),
            attendance_marked: is_attendance_token(cell(row, mapping.attendance.0)),
            location,
        }
    }

    /// Name to print on the badge: the stored name, or `ID <identifier>` when it is blank.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("ID {}", self.identifier)
        } else {
            self.name.clone()
        }
    }
}

/// Result of an attendance confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceOutcome {
    /// The matched participant, as read before any write.
    pub record: ParticipantRecord,
    /// `true` when the flag was already set and no write was issued.
    pub already_marked: bool,
}

fn cell(row: &Row, idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Case-insensitive match against [`ATTENDANCE_TOKEN`], ignoring surrounding whitespace.
pub fn is_attendance_token(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(ATTENDANCE_TOKEN)
}

/// Turns raw roster rows into participant records and applies attendance updates.
///
/// Nothing is cached: every call re-reads the store and re-resolves the header, so the row
/// location used for a write always comes from the same read that found the record.
#[derive(Debug)]
pub struct RosterResolver<S> {
    store: S,
}

impl<S: RosterStore> RosterResolver<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Locate a participant by exact (trimmed, case-sensitive) identifier.
    ///
    /// The first matching row wins; later duplicates are reported in the log and ignored.
    pub fn find_by_identifier(&self, identifier: &str) -> PassResult<ParticipantRecord> {
        Ok(self.find_with_mapping(identifier)?.0)
    }

    fn find_with_mapping(&self, identifier: &str) -> PassResult<(ParticipantRecord, HeaderMapping)> {
        let wanted = identifier.trim();
        if wanted.is_empty() {
            return Err(PassError::invalid_input("identifier is empty"));
        }

        let rows = self.store.read_all_rows()?;
        let detection = detect_header(&rows);
        let mapping = resolve_columns(&detection.labels);
        let first_row = detection.first_data_row();

        let mut found: Option<ParticipantRecord> = None;
        let mut duplicates = 0usize;
        for (offset, row) in data_rows(&rows, &detection).iter().enumerate() {
            if cell(row, mapping.identifier.0).trim() != wanted {
                continue;
            }
            if found.is_some() {
                duplicates += 1;
                continue;
            }
            let location = RowLocation(first_row + offset as u32);
            found = Some(ParticipantRecord::from_row(row, &mapping, location));
        }

        let record =
            found.ok_or_else(|| PassError::not_found(format!("identifier '{wanted}'")))?;
        if duplicates > 0 {
            tracing::warn!(
                identifier = wanted,
                duplicates,
                row = record.location.0,
                "duplicate identifiers in roster; using the first match"
            );
        }
        Ok((record, mapping))
    }

    /// Mark a participant as attended unless already marked.
    ///
    /// Issues at most one cell write. A second call for the same identifier reports
    /// `already_marked = true` and writes nothing.
    pub fn confirm_attendance(&self, identifier: &str) -> PassResult<AttendanceOutcome> {
        let (record, mapping) = self.find_with_mapping(identifier)?;
        if record.attendance_marked {
            return Ok(AttendanceOutcome {
                record,
                already_marked: true,
            });
        }

        self.store
            .update_cell(record.location, mapping.attendance, ATTENDANCE_TOKEN)?;
        tracing::info!(
            identifier = %record.identifier,
            row = record.location.0,
            "attendance marked"
        );
        Ok(AttendanceOutcome {
            record,
            already_marked: false,
        })
    }

    /// Every data row as a record, in store order. Blank cells pass through as empty strings.
    pub fn list_all(&self) -> PassResult<Vec<ParticipantRecord>> {
        let rows = self.store.read_all_rows()?;
        let detection = detect_header(&rows);
        let mapping = resolve_columns(&detection.labels);
        let first_row = detection.first_data_row();

        Ok(data_rows(&rows, &detection)
            .iter()
            .enumerate()
            .map(|(offset, row)| {
                ParticipantRecord::from_row(row, &mapping, RowLocation(first_row + offset as u32))
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/roster/resolver.rs"]
mod tests;
