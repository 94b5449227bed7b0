// File: crates/marketshare-core/tests/data.rs
// Purpose: CSV ingestion — header aliases, date/share parsing, ordering, errors.

use marketshare_core::{read_records, DataError};

#[test]
fn parses_and_sorts_rows() {
    let csv = "date,region,app,share\n\
               2015-02-01,USA,uber,0.61\n\
               2015-01-01,USA,uber,0.60\n";
    let rows = read_records(csv.as_bytes()).expect("parse");
    assert_eq!(rows.len(), 2);
    assert!(rows[0].date < rows[1].date, "rows sorted by date");
    assert_eq!(rows[0].share, 0.60);
    assert_eq!(rows[0].region, "USA");
    assert_eq!(rows[0].app, "uber");
}

#[test]
fn sort_is_stable_within_a_date() {
    let csv = "date,region,app,share\n\
               2015-01-01,USA,uber,0.6\n\
               2015-01-01,USA,lyft,0.3\n\
               2015-01-01,USA,sidecar,0.1\n";
    let rows = read_records(csv.as_bytes()).expect("parse");
    let apps: Vec<&str> = rows.iter().map(|r| r.app.as_str()).collect();
    assert_eq!(apps, ["uber", "lyft", "sidecar"]);
}

#[test]
fn accepts_header_aliases_and_other_date_spellings() {
    let csv = "Day,Market,Service,Market_Share\n\
               01/15/2015,USA,lyft,0.2\n\
               2015/02/15,USA,lyft,0.21\n";
    let rows = read_records(csv.as_bytes()).expect("parse");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.to_string(), "2015-01-15");
    assert_eq!(rows[1].date.to_string(), "2015-02-15");
}

#[test]
fn missing_column_is_an_error() {
    let csv = "date,region,share\n2015-01-01,USA,0.5\n";
    match read_records(csv.as_bytes()) {
        Err(DataError::MissingColumn(col)) => assert_eq!(col, "app"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn bad_share_names_the_row() {
    let csv = "date,region,app,share\n\
               2015-01-01,USA,uber,0.5\n\
               2015-02-01,USA,uber,n/a\n";
    match read_records(csv.as_bytes()) {
        Err(DataError::BadShare { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "n/a");
        }
        other => panic!("expected BadShare, got {other:?}"),
    }
}

#[test]
fn bad_date_names_the_row() {
    let csv = "date,region,app,share\nsoon,USA,uber,0.5\n";
    match read_records(csv.as_bytes()) {
        Err(DataError::BadDate { line, value }) => {
            assert_eq!(line, 2);
            assert_eq!(value, "soon");
        }
        other => panic!("expected BadDate, got {other:?}"),
    }
}

#[test]
fn empty_input_is_an_error() {
    let csv = "date,region,app,share\n";
    assert!(matches!(read_records(csv.as_bytes()), Err(DataError::Empty)));
}
