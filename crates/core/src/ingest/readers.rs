//! File readers: delimited text and Excel workbooks, normalized to a common
//! tabular shape.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::warn;
use std::io::Cursor;

use super::ingest_errors::IngestError;

/// Headers plus string rows, whatever the source format was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parses CSV content with delimiter auto-detection.
///
/// The first non-empty row is the header. Fully empty rows are dropped,
/// short rows are padded to the header width and long rows truncated, so
/// downstream indexing is always in bounds.
pub fn read_csv(content: &[u8]) -> std::result::Result<TabularData, IngestError> {
    let text = decode_content(content);
    let delimiter = detect_delimiter(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => records.push(record.iter().map(|s| s.to_string()).collect()),
            Err(e) => {
                // A malformed line degrades to a dropped row, not a dead batch.
                warn!("Skipping unparseable CSV row {}: {}", index + 1, e);
            }
        }
    }

    records.retain(|row| !row.iter().all(|cell| cell.trim().is_empty()));
    if records.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let headers: Vec<String> = records
        .remove(0)
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let width = headers.len();
    let rows = records
        .into_iter()
        .map(|mut row| {
            if row.len() < width {
                row.resize(width, String::new());
            } else {
                row.truncate(width);
            }
            row
        })
        .collect();

    Ok(TabularData { headers, rows })
}

/// Reads the first sheet of an Excel workbook (`.xls`, `.xlsx`).
pub fn read_workbook(content: &[u8]) -> std::result::Result<TabularData, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(content))
        .map_err(|e| IngestError::UnreadableFile(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::EmptyFile)?
        .map_err(|e| IngestError::UnreadableFile(e.to_string()))?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = match row_iter.next() {
        Some(row) => row
            .iter()
            .map(|cell| cell_to_string(cell).trim().to_string())
            .collect(),
        None => return Err(IngestError::EmptyFile),
    };

    let rows: Vec<Vec<String>> = row_iter
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>())
        .filter(|row| !row.iter().all(|cell| cell.trim().is_empty()))
        .collect();

    Ok(TabularData { headers, rows })
}

/// Decodes content bytes to UTF-8, handling a BOM if present.
fn decode_content(content: &[u8]) -> String {
    let without_bom =
        if content.len() >= 3 && content[0] == 0xEF && content[1] == 0xBB && content[2] == 0xBF {
            &content[3..]
        } else {
            content
        };

    match std::str::from_utf8(without_bom) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!("Upload is not valid UTF-8 ({}), replacing bad bytes", e);
            String::from_utf8_lossy(without_bom).into_owned()
        }
    }
}

/// Auto-detects the delimiter by scoring consistency across the first lines.
fn detect_delimiter(content: &str) -> u8 {
    let candidates = [b',', b';', b'\t'];
    let mut best = b',';
    let mut best_score = 0usize;

    for candidate in candidates {
        let score = score_delimiter(content, candidate as char);
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }

    best
}

/// Scores a delimiter: occurrences on the first line times the number of
/// inspected lines with the same count.
fn score_delimiter(content: &str, delimiter: char) -> usize {
    let counts: Vec<usize> = content
        .lines()
        .take(10)
        .map(|line| line.matches(delimiter).count())
        .collect();

    match counts.first() {
        Some(0) | None => 0,
        Some(&first) => first * counts.iter().filter(|&&c| c == first).count(),
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(_) => String::new(),
        Data::DateTime(dt) => excel_serial_to_string(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Renders an Excel date serial as an ISO date, or date-time when the cell
/// carries a time component. 1900 date system; the two-day epoch shift
/// absorbs Excel's phantom 1900 leap day.
fn excel_serial_to_string(serial: f64) -> String {
    let days = serial.floor() as i64;
    let seconds = ((serial - serial.floor()) * 86_400.0).round() as i64;

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid epoch");
    let date = epoch + chrono::Duration::days(days);

    if seconds == 0 {
        date.format("%Y-%m-%d").to_string()
    } else {
        let datetime = date.and_hms_opt(0, 0, 0).expect("valid midnight")
            + chrono::Duration::seconds(seconds);
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_simple_csv() {
        let data = read_csv(b"Nombre,Monto\nA,100.50\nB,200").unwrap();
        assert_eq!(data.headers, vec!["Nombre", "Monto"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], vec!["A", "100.50"]);
    }

    #[test]
    fn detects_semicolon_delimiter() {
        let data = read_csv(b"Nombre;Monto\nA;100\nB;200").unwrap();
        assert_eq!(data.headers, vec!["Nombre", "Monto"]);
        assert_eq!(data.rows[1], vec!["B", "200"]);
    }

    #[test]
    fn strips_utf8_bom() {
        let data = read_csv(b"\xEF\xBB\xBFNombre,Monto\nA,1").unwrap();
        assert_eq!(data.headers[0], "Nombre");
    }

    #[test]
    fn drops_fully_empty_rows() {
        let data = read_csv(b"Nombre,Monto\nA,1\n,\nB,2").unwrap();
        assert_eq!(data.rows.len(), 2);
    }

    #[test]
    fn normalizes_uneven_rows_to_header_width() {
        let data = read_csv(b"a,b,c\n1,2\n3,4,5,6").unwrap();
        assert_eq!(data.rows[0], vec!["1", "2", ""]);
        assert_eq!(data.rows[1], vec!["3", "4", "5"]);
    }

    #[test]
    fn empty_csv_is_an_error() {
        assert!(matches!(read_csv(b"").unwrap_err(), IngestError::EmptyFile));
        assert!(matches!(
            read_csv(b"\n\n").unwrap_err(),
            IngestError::EmptyFile
        ));
    }

    #[test]
    fn reads_workbook_produced_by_the_template_writer() {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Nombre").unwrap();
        sheet.write_string(0, 1, "Monto").unwrap();
        sheet.write_string(1, 0, "A").unwrap();
        sheet.write_number(1, 1, 100.5).unwrap();
        sheet.write_string(2, 0, "B").unwrap();
        sheet.write_number(2, 1, 200.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let data = read_workbook(&bytes).unwrap();
        assert_eq!(data.headers, vec!["Nombre", "Monto"]);
        assert_eq!(data.rows[0], vec!["A", "100.5"]);
        // Whole numbers render without a trailing fraction.
        assert_eq!(data.rows[1], vec!["B", "200"]);
    }

    #[test]
    fn garbage_bytes_are_an_unreadable_workbook() {
        let err = read_workbook(b"definitely not a spreadsheet").unwrap_err();
        assert!(matches!(err, IngestError::UnreadableFile(_)));
    }

    #[test]
    fn excel_serials_render_as_iso_dates() {
        // 2024-01-15 is serial 45306 in the 1900 date system.
        assert_eq!(excel_serial_to_string(45306.0), "2024-01-15");
        assert_eq!(excel_serial_to_string(45306.5), "2024-01-15 12:00:00");
    }
}
