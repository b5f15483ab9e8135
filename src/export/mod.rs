use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const HEADER: [&str; 2] = ["Index", "Value"];
pub const DELIMITER: char = ',';

/// Comma-separated `Index,Value` records. Values are written with four
/// decimal places.
pub struct CsvRecordWriter<W: Write> {
    inner: W,
    records: u64,
}

impl CsvRecordWriter<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes the header.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvRecordWriter<W> {
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{}{}{}", HEADER[0], DELIMITER, HEADER[1])?;
        Ok(Self { inner, records: 0 })
    }

    pub fn write_record(&mut self, index: u64, value: f64) -> io::Result<()> {
        writeln!(self.inner, "{}{}{}", index, DELIMITER, format_value(value))?;
        self.records += 1;
        Ok(())
    }

    /// Data records written so far, header excluded.
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

pub fn format_value(value: f64) -> String {
    format!("{:.4}", value)
}
