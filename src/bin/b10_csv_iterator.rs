//! Behavioral Pattern: Iterator (over an external resource)
//! Example: Lazily iterating the rows of a delimited text file
//!
//! Run with: cargo run --bin b10_csv_iterator

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("The file cannot be read: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("Malformed row: {0}")]
    Malformed(#[from] csv::Error),
}

/// Iterates over CSV file rows, one numbered row per step. The file
/// is opened up front: an unreadable path fails construction before
/// any row is read.
pub struct CsvRows {
    reader: csv::Reader<File>,
    row_counter: usize,
}

impl CsvRows {
    pub fn open(path: impl AsRef<Path>, delimiter: u8) -> Result<Self, CsvError> {
        let file = File::open(path)?;
        let reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        Ok(CsvRows {
            reader,
            row_counter: 0,
        })
    }
}

impl Iterator for CsvRows {
    type Item = Result<(usize, Vec<String>), CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                self.row_counter += 1;
                let fields = record.iter().map(str::to_string).collect();
                Some(Ok((self.row_counter, fields)))
            }
            Ok(false) => None,
            Err(err) => Some(Err(err.into())),
        }
    }
}

fn main() {
    let path = std::env::temp_dir().join("design-patterns-example.csv");
    std::fs::write(
        &path,
        "Name;Value;isActive\nFirst;10;true\nSecond;20;false\nThird;30;true\n",
    )
    .expect("temp dir is writable");

    match CsvRows::open(&path, b';') {
        Ok(rows) => {
            for row in rows {
                match row {
                    Ok((key, fields)) => println!("{}:{}", key, fields.join(", ")),
                    Err(err) => println!("{}", err),
                }
            }
        }
        Err(err) => println!("{}", err),
    }

    /* Output:
    1:Name, Value, isActive
    2:First, 10, true
    3:Second, 20, false
    4:Third, 30, true */
}
