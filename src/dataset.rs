use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use crate::error::{ExtractError, Result};

/// An in-memory tabular dataset: one header row plus data rows, loaded
/// once from CSV and written once. Rows keep their input order.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Dataset {
    pub fn from_path(path: &Path) -> Result<Self> {
        // Strict field counts: a ragged row is not parseable tabular data,
        // and letting it through would misalign every appended column.
        let mut reader = ReaderBuilder::new()
            .from_path(path)
            .map_err(|e| ExtractError::Load {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let headers = reader
            .headers()
            .map_err(|e| ExtractError::Load {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
            .clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ExtractError::Load {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            rows.push(record);
        }

        info!(path = %path.display(), rows = rows.len(), "loaded dataset");
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, if present in the header.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// The value of `column` in `row`, with blank cells treated as absent.
    pub fn field<'a>(&self, row: &'a StringRecord, column: Option<usize>) -> Option<&'a str> {
        let value = row.get(column?)?;
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Append a derived column: a new header plus one value per row.
    /// The strict loader guarantees rows already match the header width,
    /// so the value lands at the new header's index.
    pub fn push_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.headers.push_field(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push_field(&value);
        }
    }

    /// Write the dataset to `path` via a sibling temporary file renamed
    /// into place, so a failed run never leaves partial output behind.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let tmp_path = temp_sibling(path);
        self.write_csv(&tmp_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ExtractError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ExtractError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        debug!(path = %path.display(), "dataset written");
        Ok(())
    }

    fn write_csv(&self, path: &Path) -> std::result::Result<(), csv::Error> {
        let mut writer = WriterBuilder::new().from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::tempdir;

    fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_headers_and_rows() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "in.csv", "a,b\n1,2\n3,4\n");
        let dataset = Dataset::from_path(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.column("b"), Some(1));
        assert_eq!(dataset.column("missing"), None);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempdir().unwrap();
        let result = Dataset::from_path(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(ExtractError::Load { .. })));
    }

    #[test]
    fn blank_fields_read_as_absent() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "in.csv", "a,b\nx,\n");
        let dataset = Dataset::from_path(&path).unwrap();
        let row = &dataset.rows()[0];
        assert_eq!(dataset.field(row, dataset.column("a")), Some("x"));
        assert_eq!(dataset.field(row, dataset.column("b")), None);
    }

    #[test]
    fn ragged_rows_fail_the_load() {
        let dir = tempdir().unwrap();
        for content in ["a,b\n1,2,3\n", "a,b\n1\n"] {
            let path = write_fixture(dir.path(), "in.csv", content);
            let result = Dataset::from_path(&path);
            assert!(matches!(result, Err(ExtractError::Load { .. })));
        }
    }

    #[test]
    fn push_column_lands_at_the_new_header_index() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "in.csv", "a,b\n1,2\n3,4\n");
        let mut dataset = Dataset::from_path(&path).unwrap();
        dataset.push_column("c", vec!["x".to_string(), "y".to_string()]);
        assert_eq!(dataset.column("c"), Some(2));
        assert_eq!(dataset.rows()[1].get(2), Some("y"));
    }

    #[test]
    fn write_then_reload_round_trips() {
        let dir = tempdir().unwrap();
        let input = write_fixture(dir.path(), "in.csv", "a,b\n1,2\n");
        let output = dir.path().join("out.csv");
        let dataset = Dataset::from_path(&input).unwrap();
        dataset.write_to_path(&output).unwrap();
        let reloaded = Dataset::from_path(&output).unwrap();
        assert_eq!(reloaded.len(), dataset.len());
        assert!(!dir.path().join("out.csv.tmp").exists());
    }
}
