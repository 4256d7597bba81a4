// File: crates/ledgerview-core/tests/loader.rs
// Purpose: CSV parsing, numeric coercion and load failure handling.

use std::io::Write;

use ledgerview_core::data::{coerce_number, load_with, parse_reader};
use ledgerview_core::{load, Coercion, CsvSource, DataSource, Field, LoadError, Row};

const HEADER: &str = "Year,Revenue,Expenses,Profit,Employees\n";

fn parse(body: &str, coercion: Coercion) -> Result<ledgerview_core::Dataset, LoadError> {
    let text = format!("{HEADER}{body}");
    parse_reader(text.as_bytes(), coercion)
}

#[test]
fn parses_rows_in_source_order() {
    let data = parse("2021,150,90,60,60\n2020,100,80,20,50\n", Coercion::Lenient).expect("parse");
    assert_eq!(data.len(), 2);
    assert_eq!(data.rows()[0], Row::new(2021.0, 150.0, 90.0, 60.0, 60.0));
    assert_eq!(data.rows()[1], Row::new(2020.0, 100.0, 80.0, 20.0, 50.0));
}

#[test]
fn extra_columns_are_ignored_and_order_does_not_matter() {
    let text = "Region,Employees,Profit,Expenses,Revenue,Year\nEU,50,20,80,100,2020\n";
    let data = parse_reader(text.as_bytes(), Coercion::Lenient).expect("parse");
    assert_eq!(data.rows(), &[Row::new(2020.0, 100.0, 80.0, 20.0, 50.0)]);
}

#[test]
fn non_numeric_text_becomes_nan_in_lenient_mode() {
    let data = parse("2020,abc,80,20,50\n", Coercion::Lenient).expect("parse");
    let row = data.rows()[0];
    assert!(row.revenue.is_nan());
    assert_eq!(row.expenses, 80.0);
}

#[test]
fn non_numeric_text_fails_in_strict_mode() {
    let err = parse("2020,100,80,20,50\n2021,abc,90,60,60\n", Coercion::Strict).unwrap_err();
    match err {
        LoadError::NotNumeric { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Revenue");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repeated_header_binds_to_first_column() {
    let text = "Year,Revenue,Expenses,Profit,Employees,Revenue\n2020,1,80,20,50,99\n";
    let data = parse_reader(text.as_bytes(), Coercion::Strict).expect("parse");
    assert_eq!(data.rows()[0].revenue, 1.0);
}

#[test]
fn blank_lines_are_not_rows() {
    let data = parse("2020,100,80,20,50\n\n2021,150,90,60,60\n", Coercion::Strict).expect("parse");
    assert_eq!(data.len(), 2);
    assert_eq!(data.rows()[1].year, 2021.0);
}

#[test]
fn missing_column_is_nan_or_error() {
    let text = "Year,Revenue,Expenses,Profit\n2020,100,80,20\n";
    let data = parse_reader(text.as_bytes(), Coercion::Lenient).expect("parse");
    assert!(data.rows()[0].employees.is_nan());

    let err = parse_reader(text.as_bytes(), Coercion::Strict).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("Employees")));
}

#[test]
fn blank_and_short_fields_read_as_zero() {
    let data = parse("2020,,80\n", Coercion::Lenient).expect("parse");
    assert_eq!(data.rows()[0], Row::new(2020.0, 0.0, 80.0, 0.0, 0.0));
}

#[test]
fn max_and_extent_skip_nan() {
    let data = parse("2020,100,80,20,50\n2021,x,90,60,60\n2022,120,70,30,55\n", Coercion::Lenient).expect("parse");
    assert_eq!(data.max(Field::Revenue), Some(120.0));
    assert_eq!(data.extent(Field::Expenses), Some((70.0, 90.0)));

    let broken = parse("2020,x,80,20,50\n", Coercion::Lenient).expect("parse");
    assert_eq!(broken.max(Field::Revenue), None);
}

#[test]
fn coercion_follows_unary_plus() {
    assert_eq!(coerce_number(" 42 "), 42.0);
    assert_eq!(coerce_number(""), 0.0);
    assert_eq!(coerce_number("   "), 0.0);
    assert_eq!(coerce_number("1e3"), 1000.0);
    assert_eq!(coerce_number(".5"), 0.5);
    assert_eq!(coerce_number("5."), 5.0);
    assert_eq!(coerce_number("+3"), 3.0);
    assert_eq!(coerce_number("-7.25"), -7.25);
    assert_eq!(coerce_number("0x1A"), 26.0);
    assert_eq!(coerce_number("0b101"), 5.0);
    assert_eq!(coerce_number("Infinity"), f64::INFINITY);
    assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    for junk in ["abc", "inf", "NaN", "1,000", "12px", "-", "0x", "1e", "--1"] {
        assert!(coerce_number(junk).is_nan(), "{junk:?} should not coerce");
    }
}

#[test]
fn load_reads_file_and_reports_missing_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{HEADER}2020,100,80,20,50\n").expect("write");
    let data = load(file.path()).expect("load");
    assert_eq!(data.len(), 1);

    let err = load_with("definitely/not/here.csv", Coercion::Lenient).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}

#[test]
fn csv_source_refetches_every_time() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{HEADER}2020,100,80,20,50\n").expect("write");
    file.flush().expect("flush");
    let source = CsvSource::new(file.path());
    assert_eq!(source.fetch().expect("first").len(), 1);

    writeln!(file, "2021,150,90,60,60").expect("append");
    file.flush().expect("flush");
    assert_eq!(source.fetch().expect("second").len(), 2);
}
