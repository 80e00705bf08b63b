//! The employee store.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{DisplayRow, EditableFields, EmployeeRecord};

/// The ordered, in-memory roster.
///
/// The store is the single source of truth for employee records. Its order
/// is fixed when records are loaded (ascending integer id) and is preserved
/// by every later mutation: edits never re-sort, deletes only close the gap.
///
/// Lookups go through an id index that is rebuilt whenever positions shift.
///
/// # Example
///
/// ```
/// use payroll_roster::models::{EmployeeRecord, GovernmentIds};
/// use payroll_roster::store::EmployeeStore;
///
/// let record = |id: &str| EmployeeRecord {
///     id: id.to_string(),
///     last_name: String::new(),
///     first_name: String::new(),
///     government_ids: GovernmentIds::default(),
///     columns: vec![],
/// };
///
/// let mut store = EmployeeStore::new();
/// store.load(vec![record("10"), record("9"), record("100")]).unwrap();
///
/// let ids: Vec<&str> = store.snapshot().iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(ids, vec!["9", "10", "100"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    records: Vec<EmployeeRecord>,
    index: HashMap<String, usize>,
}

impl EmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the store contents with `records`, sorted by integer id.
    ///
    /// The load is all-or-nothing: if any id is not an integer
    /// (`InvalidIdFormat`) or appears twice (`DuplicateId`), the store keeps
    /// its previous contents.
    pub fn load(&mut self, records: Vec<EmployeeRecord>) -> EngineResult<()> {
        let mut keyed = Vec::with_capacity(records.len());
        let mut seen = HashSet::with_capacity(records.len());

        for record in records {
            let key = record.numeric_id()?;
            if !seen.insert(record.id.clone()) {
                warn!(id = %record.id, "Rejecting load with duplicate employee id");
                return Err(EngineError::DuplicateId { id: record.id });
            }
            keyed.push((key, record));
        }

        // Stable, so equal keys ("7" and "007") keep source order.
        keyed.sort_by_key(|(key, _)| *key);

        self.records = keyed.into_iter().map(|(_, record)| record).collect();
        self.rebuild_index();

        for record in self.records.iter().filter(|record| !record.is_displayable()) {
            warn!(
                id = %record.id,
                columns = record.columns.len(),
                "Employee row too short for the summary table"
            );
        }

        info!(employees = self.records.len(), "Loaded employee roster");
        Ok(())
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the current ordered view of every record.
    pub fn snapshot(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&EmployeeRecord> {
        self.records.get(index)
    }

    /// Finds a record by exact id. Surrounding whitespace in `id` is ignored.
    pub fn find_by_id(&self, id: &str) -> EngineResult<&EmployeeRecord> {
        let position = self.position_of(id)?;
        Ok(&self.records[position])
    }

    /// Returns the current position of the record with `id`.
    pub fn position_of(&self, id: &str) -> EngineResult<usize> {
        let id = id.trim();
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| EngineError::NotFound { id: id.to_string() })
    }

    /// Overwrites the editable fields of the record identified by `fields.id`.
    ///
    /// The id itself is never changed.
    pub fn update_by_id(&mut self, fields: &EditableFields) -> EngineResult<()> {
        let position = self.position_of(&fields.id).inspect_err(|_| {
            warn!(id = %fields.id.trim(), "Update rejected: unknown employee id");
        })?;

        self.records[position].apply(fields);
        info!(id = %self.records[position].id, position, "Updated employee");
        Ok(())
    }

    /// Applies an edit submitted from the row at `index`.
    ///
    /// `index` only has to be in range; the record actually edited is the
    /// one whose id matches `fields.id`. An id that no longer exists, for
    /// instance because it was changed in the edit form, fails with
    /// `NotFound` and changes nothing.
    pub fn update_by_position(&mut self, index: usize, fields: &EditableFields) -> EngineResult<()> {
        self.check_index(index)?;

        if self.records[index].id != fields.id.trim() {
            warn!(
                position = index,
                row_id = %self.records[index].id,
                id = %fields.id.trim(),
                "Edit id differs from the selected row; resolving by id"
            );
        }
        self.update_by_id(fields)
    }

    /// Removes the record with `id` and returns it.
    pub fn delete_by_id(&mut self, id: &str) -> EngineResult<EmployeeRecord> {
        let position = self.position_of(id)?;
        Ok(self.remove(position))
    }

    /// Removes the record at `index` and returns it.
    ///
    /// Remaining records keep their relative order.
    pub fn delete_by_position(&mut self, index: usize) -> EngineResult<EmployeeRecord> {
        self.check_index(index)?;
        Ok(self.remove(index))
    }

    /// Returns summary-table rows for every record wide enough to display.
    ///
    /// Each row carries the record's store position, which stays valid until
    /// the next mutation.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                if record.is_displayable() {
                    Some(record.display_row(position))
                } else {
                    debug!(id = %record.id, "Omitting short row from the summary table");
                    None
                }
            })
            .collect()
    }

    fn remove(&mut self, position: usize) -> EmployeeRecord {
        let record = self.records.remove(position);
        self.rebuild_index();
        info!(id = %record.id, position, remaining = self.records.len(), "Deleted employee");
        record
    }

    fn check_index(&self, index: usize) -> EngineResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            warn!(position = index, len = self.records.len(), "Stale roster position");
            Err(EngineError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.id.clone(), position))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GovernmentIds, RATE_COLUMN};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Runs `f` with INFO-level logs written to the returned buffer.
    fn with_captured_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn record(id: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.to_string(),
            last_name: format!("Last{}", id),
            first_name: format!("First{}", id),
            government_ids: GovernmentIds::default(),
            columns: vec![String::new(); RATE_COLUMN + 1],
        }
    }

    fn loaded(ids: &[&str]) -> EmployeeStore {
        let mut store = EmployeeStore::new();
        store.load(ids.iter().map(|id| record(id)).collect()).unwrap();
        store
    }

    fn ids(store: &EmployeeStore) -> Vec<String> {
        store.snapshot().iter().map(|r| r.id.clone()).collect()
    }

    fn edit(id: &str, last_name: &str) -> EditableFields {
        EditableFields {
            id: id.to_string(),
            last_name: last_name.to_string(),
            first_name: "Edited".to_string(),
            government_ids: GovernmentIds {
                social_insurance: "S".into(),
                health_insurance: "H".into(),
                tax: "T".into(),
                housing_fund: "F".into(),
            },
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = EmployeeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_load_sorts_numerically_not_lexicographically() {
        let store = loaded(&["10", "9", "2", "100", "-1"]);
        assert_eq!(ids(&store), vec!["-1", "2", "9", "10", "100"]);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut store = EmployeeStore::new();
        let result = store.load(vec![record("1"), record("2"), record("1")]);

        assert_eq!(
            result,
            Err(EngineError::DuplicateId {
                id: "1".to_string()
            })
        );
    }

    #[test]
    fn test_failed_load_keeps_previous_contents() {
        let mut store = loaded(&["5", "6"]);

        assert!(store.load(vec![record("7"), record("7")]).is_err());
        assert!(store.load(vec![record("8"), record("x")]).is_err());

        assert_eq!(ids(&store), vec!["5", "6"]);
        assert!(store.find_by_id("6").is_ok());
    }

    #[test]
    fn test_load_rejects_non_numeric_id() {
        let mut store = EmployeeStore::new();
        let result = store.load(vec![record("abc")]);

        assert_eq!(
            result,
            Err(EngineError::InvalidIdFormat {
                id: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut store = loaded(&["1", "2"]);
        store.load(vec![record("3")]).unwrap();

        assert_eq!(ids(&store), vec!["3"]);
        assert!(store.find_by_id("1").is_err());
    }

    #[test]
    fn test_find_by_id_returns_exact_match() {
        let store = loaded(&["1", "2", "3"]);
        assert_eq!(store.find_by_id("2").unwrap().last_name, "Last2");
    }

    #[test]
    fn test_find_by_id_ignores_surrounding_whitespace() {
        let store = loaded(&["1", "2"]);
        assert_eq!(store.find_by_id(" 2 ").unwrap().id, "2");
    }

    #[test]
    fn test_find_by_id_missing_is_not_found() {
        let store = loaded(&["1", "2"]);
        assert_eq!(
            store.find_by_id("02"),
            Err(EngineError::NotFound {
                id: "02".to_string()
            })
        );
    }

    #[test]
    fn test_update_by_position_overwrites_editable_fields() {
        let mut store = loaded(&["1", "2", "3"]);
        store.update_by_position(1, &edit("2", "Villanueva")).unwrap();

        let updated = store.find_by_id("2").unwrap();
        assert_eq!(updated.last_name, "Villanueva");
        assert_eq!(updated.first_name, "Edited");
        assert_eq!(updated.government_ids.tax, "T");
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_update_does_not_resort() {
        let mut store = loaded(&["1", "2", "3"]);
        store.update_by_position(0, &edit("1", "Zzz")).unwrap();
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_update_with_unknown_id_is_not_found_and_no_op() {
        let mut store = loaded(&["1", "2"]);
        let before = store.snapshot().to_vec();

        let result = store.update_by_position(0, &edit("99", "Ghost"));

        assert_eq!(
            result,
            Err(EngineError::NotFound {
                id: "99".to_string()
            })
        );
        assert_eq!(store.snapshot(), before.as_slice());
    }

    #[test]
    fn test_update_resolves_by_id_not_position() {
        let mut store = loaded(&["1", "2", "3"]);
        store.update_by_position(0, &edit("3", "ById")).unwrap();

        assert_eq!(store.find_by_id("3").unwrap().last_name, "ById");
        assert_eq!(store.find_by_id("1").unwrap().last_name, "Last1");
    }

    #[test]
    fn test_update_by_position_out_of_range() {
        let mut store = loaded(&["1"]);
        assert_eq!(
            store.update_by_position(1, &edit("1", "X")),
            Err(EngineError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_delete_by_position_preserves_neighbour_order() {
        let mut store = loaded(&["1", "2", "3", "4"]);
        let removed = store.delete_by_position(1).unwrap();

        assert_eq!(removed.id, "2");
        assert_eq!(ids(&store), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_delete_reindexes_lookups() {
        let mut store = loaded(&["1", "2", "3"]);
        store.delete_by_position(0).unwrap();

        assert_eq!(store.position_of("3").unwrap(), 1);
        assert!(store.find_by_id("1").is_err());
    }

    #[test]
    fn test_delete_by_position_out_of_range() {
        let mut store = loaded(&["1", "2"]);
        assert_eq!(
            store.delete_by_position(2),
            Err(EngineError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_stale_position_after_delete_is_rejected() {
        let mut store = loaded(&["1", "2"]);
        store.delete_by_position(1).unwrap();
        assert!(matches!(
            store.delete_by_position(1),
            Err(EngineError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_delete_by_id() {
        let mut store = loaded(&["1", "2", "3"]);
        store.delete_by_id("2").unwrap();

        assert_eq!(ids(&store), vec!["1", "3"]);
        assert!(matches!(
            store.delete_by_id("2"),
            Err(EngineError::NotFound { .. })
        ));
    }

    #[test]
    fn test_display_rows_skip_short_records_but_keep_positions() {
        let mut short = record("2");
        short.columns.truncate(8);

        let mut store = EmployeeStore::new();
        store.load(vec![record("1"), short, record("3")]).unwrap();

        let rows = store.display_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[0].position, 0);
        assert_eq!(rows[1].id, "3");
        assert_eq!(rows[1].position, 2);
    }

    #[test]
    fn test_short_row_warning_is_logged_once_at_load() {
        let mut short = record("2");
        short.columns.truncate(8);

        let logs = with_captured_logs(|| {
            let mut store = EmployeeStore::new();
            store.load(vec![record("1"), short]).unwrap();
            for _ in 0..3 {
                assert_eq!(store.display_rows().len(), 1);
            }
        });

        assert_eq!(
            logs.matches("Employee row too short for the summary table").count(),
            1,
            "unexpected log output:\n{}",
            logs
        );
    }

    #[test]
    fn test_get_returns_record_at_position() {
        let store = loaded(&["4", "2"]);
        assert_eq!(store.get(0).unwrap().id, "2");
        assert!(store.get(2).is_none());
    }
}
