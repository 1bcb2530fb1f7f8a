//! Rectangular tabular data: one header row plus string cells.
//!
//! Cells are kept as strings end to end; the reporting jobs this serves
//! re-type columns downstream, so no inference happens here.

use std::io;

use thiserror::Error;

/// Construction error: the table would no longer be rectangular.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("row {row_index} has {got} fields, header has {expected}")]
    RaggedRow {
        row_index: usize,
        expected: usize,
        got: usize,
    },
    #[error("table needs at least one column")]
    EmptyHeader,
}

/// Decode error: the input is not a rectangular CSV body.
#[derive(Debug, Error)]
pub enum TableReadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Shape(#[from] TableError),
}

/// Named-column tabular payload. Every row is exactly as wide as the
/// header; the constructors enforce this, so encoding can't fail on shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// New empty table with the given header. At least one column.
    pub fn new(header: Vec<String>) -> Result<Self, TableError> {
        if header.is_empty() {
            return Err(TableError::EmptyHeader);
        }
        Ok(Self {
            header,
            rows: Vec::new(),
        })
    }

    /// Build a table from a header and pre-collected rows.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let mut table = Self::new(header)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append one row. Rejects rows that don't match the header width.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), TableError> {
        if row.len() != self.header.len() {
            return Err(TableError::RaggedRow {
                row_index: self.rows.len(),
                expected: self.header.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Write as CSV, header first. Quoting is the writer's business.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.header)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Strict CSV decode: a header row, then rows of exactly the header's
    /// width. Headers come back verbatim.
    ///
    /// A comma-free text body is indistinguishable from a single-column
    /// table and decodes as the latter; callers that care should keep the
    /// payload kind at the call site.
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self, TableReadError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut table = Table::new(header)?;
        for record in rdr.records() {
            let record = record?;
            table.push_row(record.iter().map(str::to_string).collect())?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> Table {
        let mut t = Table::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        t.push_row(vec!["1".to_string(), "2".to_string()]).unwrap();
        t
    }

    #[test]
    fn empty_header_rejected() {
        assert!(matches!(Table::new(vec![]), Err(TableError::EmptyHeader)));
    }

    #[test]
    fn ragged_row_rejected_with_position() {
        let mut t = two_by_one();
        let err = t.push_row(vec!["only-one".to_string()]).unwrap_err();
        match err {
            TableError::RaggedRow {
                row_index,
                expected,
                got,
            } => {
                assert_eq!(row_index, 1);
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_layout_is_header_then_rows() {
        let mut buf = Vec::new();
        two_by_one().write_csv(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn csv_roundtrip_keeps_headers_verbatim() {
        let mut t = Table::new(vec!["Source / Name".to_string(), "utm,content".to_string()])
            .unwrap();
        t.push_row(vec!["yandex".to_string(), "cpc".to_string()])
            .unwrap();

        let mut buf = Vec::new();
        t.write_csv(&mut buf).unwrap();
        let back = Table::read_csv(buf.as_slice()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn ragged_csv_input_fails_decode() {
        let body = "a,b\n1,2\n3\n";
        assert!(Table::read_csv(body.as_bytes()).is_err());
    }

    #[test]
    fn comma_free_body_decodes_as_single_column() {
        let t = Table::read_csv("hello".as_bytes()).unwrap();
        assert_eq!(t.header(), ["hello".to_string()]);
        assert_eq!(t.row_count(), 0);
    }
}
