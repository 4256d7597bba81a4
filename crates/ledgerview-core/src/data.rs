// File: crates/ledgerview-core/src/data.rs
// Summary: Row/Dataset model and the CSV loader for yearly company metrics.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::LoadError;

/// Fixed location of the metrics file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/company_growth.csv";

/// One yearly observation. Values stay `f64` so a failed coercion can carry NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Row {
    pub year: f64,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub employees: f64,
}

impl Row {
    pub const fn new(year: f64, revenue: f64, expenses: f64, profit: f64, employees: f64) -> Self {
        Self { year, revenue, expenses, profit, employees }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Revenue,
    Expenses,
    Profit,
    Employees,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Year, Field::Revenue, Field::Expenses, Field::Profit, Field::Employees];

    /// Column name in the source header.
    pub const fn header(self) -> &'static str {
        match self {
            Field::Year => "Year",
            Field::Revenue => "Revenue",
            Field::Expenses => "Expenses",
            Field::Profit => "Profit",
            Field::Employees => "Employees",
        }
    }

    #[inline]
    pub fn of(self, row: &Row) -> f64 {
        match self {
            Field::Year => row.year,
            Field::Revenue => row.revenue,
            Field::Expenses => row.expenses,
            Field::Profit => row.profit,
            Field::Employees => row.employees,
        }
    }
}

/// Rows in source order. Replaced wholesale, never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn rows(&self) -> &[Row] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Row> { self.rows.iter() }

    /// Largest value of `field`, skipping NaN.
    pub fn max(&self, field: Field) -> Option<f64> {
        self.max_by(|r| field.of(r))
    }

    pub fn max_by(&self, f: impl Fn(&Row) -> f64) -> Option<f64> {
        self.rows.iter().map(f).filter(|v| !v.is_nan()).reduce(f64::max)
    }

    /// `(min, max)` of `field`, skipping NaN.
    pub fn extent(&self, field: Field) -> Option<(f64, f64)> {
        let mut out: Option<(f64, f64)> = None;
        for v in self.rows.iter().map(|r| field.of(r)).filter(|v| !v.is_nan()) {
            out = Some(match out {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        out
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// How non-numeric text is treated while parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coercion {
    /// Non-numeric text becomes NaN and flows into the charts.
    #[default]
    Lenient,
    /// Non-numeric text or a missing column fails the load.
    Strict,
}

/// Where the shell gets its dataset from.
pub trait DataSource {
    fn fetch(&self) -> Result<Dataset, LoadError>;
    fn describe(&self) -> String;
}

/// CSV file on disk. Every fetch re-reads and re-parses the file.
#[derive(Clone, Debug)]
pub struct CsvSource {
    pub path: PathBuf,
    pub coercion: Coercion,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), coercion: Coercion::Lenient }
    }
    pub fn with_coercion(mut self, coercion: Coercion) -> Self {
        self.coercion = coercion;
        self
    }
}

impl Default for CsvSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl DataSource for CsvSource {
    fn fetch(&self) -> Result<Dataset, LoadError> {
        load_with(&self.path, self.coercion)
    }
    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load the dataset at `path` with lenient coercion.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    load_with(path, Coercion::Lenient)
}

pub fn load_with(path: impl AsRef<Path>, coercion: Coercion) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io { path: path.to_path_buf(), source: e },
    })?;
    let data = parse_reader(file, coercion)?;
    info!(path = %path.display(), rows = data.len(), "loaded dataset");
    Ok(data)
}

/// Parse CSV text with a header row. Extra columns are ignored; short rows read as empty text.
/// A repeated header name binds to its first column, and blank lines are skipped rather than
/// read as rows.
pub fn parse_reader<R: Read>(reader: R, coercion: Coercion) -> Result<Dataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    debug!(headers = ?headers.iter().collect::<Vec<_>>(), "csv headers");

    let mut columns = [None; 5];
    for (slot, field) in columns.iter_mut().zip(Field::ALL) {
        *slot = headers.iter().position(|h| h == field.header());
        if headers.iter().filter(|h| *h == field.header()).count() > 1 {
            warn!(column = field.header(), "column repeated in header; using the first");
        }
        if slot.is_none() {
            if coercion == Coercion::Strict {
                return Err(LoadError::MissingColumn(field.header()));
            }
            warn!(column = field.header(), "column missing from header; values become NaN");
        }
    }

    let mut rows = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let mut values = [f64::NAN; 5];
        for ((value, column), field) in values.iter_mut().zip(columns).zip(Field::ALL) {
            let Some(ix) = column else { continue };
            let text = rec.get(ix).unwrap_or("");
            *value = coerce_number(text);
            if value.is_nan() && coercion == Coercion::Strict {
                return Err(LoadError::NotNumeric { row: i + 1, column: field.header(), value: text.to_string() });
            }
        }
        let [year, revenue, expenses, profit, employees] = values;
        rows.push(Row { year, revenue, expenses, profit, employees });
    }
    Ok(Dataset::new(rows))
}

/// Numeric coercion with the semantics of a unary plus on text:
/// blank text is zero, `Infinity` and radix literals are recognised, anything else
/// that is not a decimal literal yields NaN.
pub fn coerce_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(v) = radix_literal(t) {
        return v;
    }
    if !is_decimal_literal(t) {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_literal(t: &str) -> Option<f64> {
    let bytes = t.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &t[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

// sign? digits [. digits] [(e|E) sign? digits], with at least one mantissa digit
fn is_decimal_literal(t: &str) -> bool {
    let b = t.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}
