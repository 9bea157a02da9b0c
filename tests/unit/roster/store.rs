use super::*;

#[test]
fn column_letters_follow_spreadsheet_convention() {
    assert_eq!(ColumnIndex(0).letters(), "A");
    assert_eq!(ColumnIndex(2).letters(), "C");
    assert_eq!(ColumnIndex(25).letters(), "Z");
    assert_eq!(ColumnIndex(26).letters(), "AA");
    assert_eq!(ColumnIndex(27).letters(), "AB");
    assert_eq!(ColumnIndex(701).letters(), "ZZ");
    assert_eq!(ColumnIndex(702).letters(), "AAA");
    assert_eq!(a1_cell_ref(RowLocation(2), ColumnIndex(2)), "C2");
}

#[test]
fn memory_update_mutates_addressed_cell_and_counts() {
    let store = MemoryRosterStore::from_strs(&[&["id", "nombre", "asistencia"], &["42", "Ada"]]);
    store
        .update_cell(RowLocation(2), ColumnIndex(2), "SI")
        .unwrap();
    let rows = store.snapshot().unwrap();
    assert_eq!(rows[1], ["42", "Ada", "SI"]);
    assert_eq!(rows[0], ["id", "nombre", "asistencia"]);
    assert_eq!(store.write_count(), 1);
}

#[test]
fn memory_rejects_rows_outside_the_store() {
    let store = MemoryRosterStore::from_strs(&[&["1", "a", ""]]);
    let err = store
        .update_cell(RowLocation(0), ColumnIndex(0), "x")
        .unwrap_err();
    assert!(matches!(err, PassError::InvalidLocation(_)));
    let err = store
        .update_cell(RowLocation(2), ColumnIndex(0), "x")
        .unwrap_err();
    assert!(matches!(err, PassError::InvalidLocation(_)));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn offline_memory_store_is_unavailable() {
    let store = MemoryRosterStore::from_strs(&[&["1"]]);
    store.set_offline(true);
    assert!(matches!(
        store.read_all_rows().unwrap_err(),
        PassError::StoreUnavailable(_)
    ));
    assert!(matches!(
        store
            .update_cell(RowLocation(1), ColumnIndex(0), "x")
            .unwrap_err(),
        PassError::StoreUnavailable(_)
    ));
}

#[test]
fn csv_store_reads_ragged_rows_and_rewrites_one_cell() {
    let dir = PathBuf::from("target").join("unit_roster");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("roster_update.csv");
    std::fs::write(
        &path,
        "id,nombre,asistencia\n42,\"Lovelace, Ada\",\n7,Grace\n",
    )
    .unwrap();

    let store = CsvRosterStore::new(&path);
    let rows = store.read_all_rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], ["42", "Lovelace, Ada", ""]);
    assert_eq!(rows[2], ["7", "Grace"]);

    store
        .update_cell(RowLocation(3), ColumnIndex(2), "SI")
        .unwrap();
    let rows = store.read_all_rows().unwrap();
    assert_eq!(rows[2], ["7", "Grace", "SI"]);
    assert_eq!(rows[1], ["42", "Lovelace, Ada", ""]);
}

#[test]
fn csv_store_missing_file_is_unavailable() {
    let store = CsvRosterStore::new("target/unit_roster/does_not_exist.csv");
    assert!(matches!(
        store.read_all_rows().unwrap_err(),
        PassError::StoreUnavailable(_)
    ));
}
