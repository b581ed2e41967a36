//! CSV coordinate loader and writer.
//!
//! Parses delimited tabular data into a validated sample set of
//! [`Point3`]. The contract is fail-fast and all-or-nothing:
//!
//! - The header must contain columns named exactly `x`, `y`, `z`
//!   (case-sensitive); extra columns are ignored. A missing column is
//!   [`CepError::SchemaInvalid`], raised before any row is parsed.
//! - Every row's three fields must parse as finite real numbers; the
//!   first offending field fails the entire load with
//!   [`CepError::ValueInvalid`]. Partial datasets are never silently
//!   accepted.
//! - An absent or unreadable source is [`CepError::ResourceNotFound`],
//!   distinct from malformed content.
//!
//! The loader takes an explicit reader handle; it owns no path
//! constants and reads the source exactly once.

use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::error::{CepError, Result};
use crate::point::Point3;

const REQUIRED_COLUMNS: [&str; 3] = ["x", "y", "z"];

/// Reads a sample set from CSV data with a header row.
///
/// Header-only input yields an empty sample set; minimum sample size
/// is the estimators' concern, not the loader's.
///
/// # Examples
/// ```
/// use cepstat::loader::read_points;
/// let csv = "x,y,z\n1.0,2.0,3.0\n4.0,5.0,6.0\n";
/// let points = read_points(csv.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].y(), 2.0);
/// ```
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point3>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(map_csv_error)?.clone();
    let mut indices = [0_usize; 3];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h == name) {
            Some(i) => *slot = i,
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(CepError::SchemaInvalid { missing });
    }
    let [ix, iy, iz] = indices;

    let mut points = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let row = i + 1; // 1-based over data rows, header excluded
        let record = record.map_err(map_csv_error)?;
        let x = parse_field(&record, row, "x", ix)?;
        let y = parse_field(&record, row, "y", iy)?;
        let z = parse_field(&record, row, "z", iz)?;
        points.push(Point3::new(x, y, z).expect("finiteness checked by parse_field"));
    }
    Ok(points)
}

/// Loads a sample set from a CSV file on disk.
///
/// # Returns
/// - `Err(CepError::ResourceNotFound)` if the file cannot be opened or
///   read; content errors are reported as in [`read_points`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Point3>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| CepError::ResourceNotFound(format!("{}: {e}", path.display())))?;
    read_points(BufReader::new(file))
}

/// Writes a sample set as CSV with an `x,y,z` header.
///
/// Values are formatted with the shortest representation that parses
/// back to the identical `f64`, so a write→[`read_points`] round trip
/// is value-exact.
pub fn write_points<W: Write>(writer: W, points: &[Point3]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(REQUIRED_COLUMNS).map_err(map_csv_error)?;
    for p in points {
        wtr.write_record([p.x().to_string(), p.y().to_string(), p.z().to_string()])
            .map_err(map_csv_error)?;
    }
    wtr.flush()
        .map_err(|e| CepError::ResourceNotFound(e.to_string()))
}

fn parse_field(record: &csv::StringRecord, row: usize, field: &str, idx: usize) -> Result<f64> {
    let raw = record.get(idx).ok_or_else(|| {
        CepError::ValueInvalid(format!("row {row}: missing value for field '{field}'"))
    })?;
    let value: f64 = raw.trim().parse().map_err(|_| {
        CepError::ValueInvalid(format!(
            "row {row}: field '{field}' is not a number: {raw:?}"
        ))
    })?;
    if !value.is_finite() {
        return Err(CepError::ValueInvalid(format!(
            "row {row}: field '{field}' is not finite: {raw:?}"
        )));
    }
    Ok(value)
}

fn map_csv_error(e: csv::Error) -> CepError {
    if e.is_io_error() {
        CepError::ResourceNotFound(e.to_string())
    } else {
        CepError::ValueInvalid(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
