// ============================================================
// Layer 4 - Dataset Loader
// ============================================================
// Loads the labelled SMS corpus from a CSV file.
//
// The classic SMS Spam Collection export looks like:
//
//   v1,v2,,,
//   ham,"Go until jurong point, crazy..",,,
//   spam,Free entry in 2 a wkly comp to win FA Cup final...,,,
//
//   - Column v1 is the label, v2 the message
//   - Trailing unnamed columns are present and ragged
//   - The file is Latin-1 encoded, not UTF-8
//
// Because of the encoding we read raw byte records and decode
// every byte as the Unicode code point of the same value,
// which is exactly Latin-1.
//
// Anything malformed is fatal: a missing column, a short row,
// or an unknown label aborts loading with the line number.
//
// Reference: csv crate documentation (ByteRecord, flexible)
//            Rust Book §9 (Error Handling)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use csv::{ByteRecord, ReaderBuilder};

use crate::domain::label::{Label, LabeledExample};
use crate::domain::traits::ExampleSource;

/// Header names accepted for the label column
const LABEL_COLUMNS:   &[&str] = &["v1", "label"];
/// Header names accepted for the message column
const MESSAGE_COLUMNS: &[&str] = &["v2", "message"];

/// Loads labelled examples from a two-column CSV dataset.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExampleSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<LabeledExample>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            // Rows carry a varying number of trailing empty columns
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open dataset '{}'", self.path.display()))?;

        let headers: Vec<String> = reader
            .byte_headers()
            .with_context(|| format!("Cannot read header row of '{}'", self.path.display()))?
            .iter()
            .map(|h| decode_latin1(h).trim().to_lowercase())
            .collect();

        let label_idx   = find_column(&headers, LABEL_COLUMNS)
            .with_context(|| format!("Dataset '{}' has no label column", self.path.display()))?;
        let message_idx = find_column(&headers, MESSAGE_COLUMNS)
            .with_context(|| format!("Dataset '{}' has no message column", self.path.display()))?;

        let mut examples = Vec::new();
        let mut record   = ByteRecord::new();

        while reader
            .read_byte_record(&mut record)
            .with_context(|| format!("Malformed CSV in '{}'", self.path.display()))?
        {
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let (Some(raw_label), Some(raw_message)) =
                (record.get(label_idx), record.get(message_idx))
            else {
                bail!("Line {line}: row is missing the label or message field");
            };

            let label: Label = decode_latin1(raw_label)
                .parse()
                .with_context(|| format!("Line {line}: bad label"))?;

            examples.push(LabeledExample::new(decode_latin1(raw_message), label));
        }

        tracing::info!(
            "Loaded {} examples from '{}'",
            examples.len(),
            self.path.display()
        );
        Ok(examples)
    }
}

/// Index of the first header matching any of `names`
fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h.as_str()))
}

/// Decode Latin-1 bytes: every byte maps to the code point of equal value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_loads_ragged_sms_collection_layout() {
        let f = write_dataset(
            b"v1,v2,,,\n\
              ham,\"Go until jurong point, crazy..\",,,\n\
              spam,Free entry in 2 a wkly comp\n",
        );
        let examples = CsvLoader::new(f.path()).load_all().unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], LabeledExample::new("Go until jurong point, crazy..", Label::Ham));
        assert_eq!(examples[1].label, Label::Spam);
    }

    #[test]
    fn test_accepts_named_columns_in_any_order() {
        let f = write_dataset(b"message,label\nsee you soon,ham\n");
        let examples = CsvLoader::new(f.path()).load_all().unwrap();
        assert_eq!(examples, vec![LabeledExample::new("see you soon", Label::Ham)]);
    }

    #[test]
    fn test_decodes_latin1() {
        // 0xA3 is the pound sign in Latin-1 and invalid on its own in UTF-8
        let f = write_dataset(b"v1,v2\nspam,Win \xA3100 now\n");
        let examples = CsvLoader::new(f.path()).load_all().unwrap();
        assert_eq!(examples[0].text, "Win \u{00A3}100 now");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let f = write_dataset(b"v1,text\nham,hello\n");
        assert!(CsvLoader::new(f.path()).load_all().is_err());
    }

    #[test]
    fn test_short_row_is_fatal() {
        let f = write_dataset(b"v1,v2\nham\n");
        assert!(CsvLoader::new(f.path()).load_all().is_err());
    }

    #[test]
    fn test_unknown_label_is_fatal() {
        let f = write_dataset(b"v1,v2\nmaybe,hello\n");
        assert!(CsvLoader::new(f.path()).load_all().is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(CsvLoader::new("does/not/exist.csv").load_all().is_err());
    }
}
