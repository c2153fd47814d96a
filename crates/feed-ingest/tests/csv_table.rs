use std::fs;

use feed_ingest::{CsvTableReader, IngestError, TableReader};

fn temp_table(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("catalog.csv"), contents).expect("write file");
    dir
}

#[test]
fn reads_header_and_rows_in_column_order() {
    let dir = temp_table("\u{feff}title, id ,price\nShirt,1.0,\"1.234,56\"\nHat,2.0,15\n");
    let rows = CsvTableReader::new()
        .read_rows(&dir.path().join("catalog.csv"))
        .expect("read csv");

    assert_eq!(rows.len(), 2);
    let columns: Vec<&str> = rows[0].iter().map(|(name, _)| name).collect();
    assert_eq!(columns, vec!["title", "id", "price"]);
    assert_eq!(rows[0].get("price"), Some("1.234,56"));
    assert_eq!(rows[1].get("id"), Some("2.0"));
}

#[test]
fn reads_semicolon_tables() {
    let dir = temp_table("id;availability\n3.0;out of stock\n");
    let rows = CsvTableReader::new()
        .with_delimiter(b';')
        .read_rows(&dir.path().join("catalog.csv"))
        .expect("read csv");
    assert_eq!(rows[0].get("availability"), Some("out of stock"));
}

#[test]
fn header_only_table_has_no_rows() {
    let dir = temp_table("id,title\n");
    let rows = CsvTableReader::new()
        .read_rows(&dir.path().join("catalog.csv"))
        .expect("read csv");
    assert!(rows.is_empty());
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = CsvTableReader::new()
        .read_rows(&dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
