//! Downloadable template workbook with the expected columns and sample rows.

use rust_xlsxwriter::Workbook;

use crate::errors::{Error, Result};

/// Column headers of the template; all four are recognized by the column
/// inference step.
pub const TEMPLATE_HEADERS: [&str; 4] = ["Name", "Amount", "Factor", "Date"];

const SAMPLE_ROWS: [(&str, f64, f64, &str); 3] = [
    ("Ejemplo Dato 1", 1_000_000.50, 1.05, "2024-01-15"),
    ("Ejemplo Dato 2", 2_500_000.00, 1.15, "2024-02-20"),
    ("Ejemplo Dato 3", 500_000.75, 1.02, "2024-03-10"),
];

/// Builds the example workbook users download before their first upload.
pub fn build_template() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Datos")
        .map_err(|e| Error::Unexpected(format!("Failed to build template sheet: {}", e)))?;

    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .map_err(|e| Error::Unexpected(format!("Failed to write template header: {}", e)))?;
    }

    for (index, (name, amount, factor, date)) in SAMPLE_ROWS.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet
            .write_string(row, 0, *name)
            .and_then(|sheet| sheet.write_number(row, 1, *amount))
            .and_then(|sheet| sheet.write_number(row, 2, *factor))
            .and_then(|sheet| sheet.write_string(row, 3, *date))
            .map_err(|e| Error::Unexpected(format!("Failed to write template row: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Unexpected(format!("Failed to serialize template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{read_workbook, ColumnMap};

    #[test]
    fn template_headers_resolve_through_column_inference() {
        let bytes = build_template().unwrap();
        let data = read_workbook(&bytes).unwrap();

        assert_eq!(data.headers, TEMPLATE_HEADERS);
        assert_eq!(data.rows.len(), 3);
        assert_eq!(data.rows[0][0], "Ejemplo Dato 1");

        let map = ColumnMap::detect(&data.headers).unwrap();
        assert_eq!(map.name, 0);
        assert_eq!(map.amount, Some(1));
        assert_eq!(map.factor, Some(2));
        assert_eq!(map.date, Some(3));
    }
}
