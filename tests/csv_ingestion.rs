use bikeshare_explorer::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use bikeshare_explorer::types::{DataType, Field, Schema, Value};

fn rides_schema() -> Schema {
    Schema::new(vec![
        Field::new("Start Station", DataType::Utf8),
        Field::new("Trip Duration", DataType::Float64),
        Field::optional("Birth Year", DataType::Float64),
    ])
}

#[test]
fn ingest_csv_from_path_happy_path() {
    let schema = rides_schema();
    let ds = ingest_csv_from_path("tests/fixtures/chicago.csv", &schema).unwrap();

    assert_eq!(ds.row_count(), 10);
    assert_eq!(
        ds.rows[0],
        vec![
            Value::Utf8("Clark St".to_string()),
            Value::Float64(600.0),
            Value::Float64(1985.0),
        ]
    );
    // Empty birth year cell.
    assert_eq!(ds.rows[2][2], Value::Null);
}

#[test]
fn ingest_csv_allows_reordered_columns() {
    let schema = rides_schema();
    let input = "Birth Year,Trip Duration,Start Station\n1990.0,60,Canal St\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = ingest_csv_from_reader(&mut rdr, &schema).unwrap();
    assert_eq!(ds.row_count(), 1);
    assert_eq!(ds.rows[0][0], Value::Utf8("Canal St".to_string()));
    assert_eq!(ds.rows[0][1], Value::Float64(60.0));
}

#[test]
fn ingest_csv_drops_missing_optional_column_from_schema() {
    let schema = rides_schema();
    let ds = ingest_csv_from_path("tests/fixtures/washington.csv", &schema).unwrap();

    assert_eq!(ds.schema.field_names().collect::<Vec<_>>(), vec!["Start Station", "Trip Duration"]);
    assert_eq!(ds.rows[0].len(), 2);
}

#[test]
fn ingest_csv_errors_on_missing_required_column() {
    let schema = rides_schema();
    let input = "Start Station,Birth Year\nClark St,1985\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr, &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'Trip Duration'"));
}

#[test]
fn ingest_csv_errors_on_type_parse() {
    let schema = rides_schema();
    let input = "Start Station,Trip Duration\nClark St,ten minutes\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr, &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value at row 2"));
    assert!(msg.contains("column 'Trip Duration'"));
}

#[test]
fn ingest_csv_parses_timestamps() {
    let schema = Schema::new(vec![Field::new("Start Time", DataType::Timestamp)]);
    let ds = ingest_csv_from_path("tests/fixtures/washington.csv", &schema).unwrap();
    assert_eq!(ds.rows[1][0].to_string(), "2017-03-11 10:40:00");
}

#[test]
fn ingest_csv_errors_on_bad_timestamp() {
    let schema = Schema::new(vec![Field::new("Start Time", DataType::Timestamp)]);
    let err = ingest_csv_from_path("tests/fixtures/bad_timestamp.csv", &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("row 3"));
    assert!(msg.contains("raw='31/31/2017 25:00'"));
}
