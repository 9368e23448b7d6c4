// src/history/csv_store.rs
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDateTime;
use tempfile::NamedTempFile;

use crate::models::{PasswordCheckRecord, Strength, TIMESTAMP_FORMAT};
use super::{current_timestamp, HistoryError, HistoryStore, Result, HISTORY_COLUMNS};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// History persisted as a comma-separated file with a header row.
///
/// Every append rewrites the whole file into a temporary sibling and renames it
/// over the target, so readers see either the old or the new history. The mutex
/// only orders writers inside this process; separate processes sharing the file
/// race, last write wins.
pub struct CsvHistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvHistoryStore {
    /// Open the store at `path`, creating an empty one with a header if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };
        if !store.path.exists() {
            log::info!("Initializing empty password history at {}", store.path.display());
            store.write_records(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<PasswordCheckRecord>> {
        let content = fs::read_to_string(&self.path)?;
        parse_history(&content)
    }

    fn write_records(&self, records: &[PasswordCheckRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(render_history(records).as_bytes())?;
        file.flush()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    // Re-checked under the lock so a concurrent append is never overwritten.
    fn recreate_if_missing(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        if self.path.exists() {
            return;
        }
        log::debug!("No history at {}, recreating it", self.path.display());
        if let Err(e) = self.write_records(&[]) {
            log::warn!("Could not recreate history file {}: {}", self.path.display(), e);
        }
    }
}

impl HistoryStore for CsvHistoryStore {
    fn load(&self) -> Vec<PasswordCheckRecord> {
        match self.read_records() {
            Ok(records) => records,
            Err(HistoryError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                self.recreate_if_missing();
                Vec::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable history {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn append(&self, password: &str, strength: Strength) -> Result<PasswordCheckRecord> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = match self.read_records() {
            Ok(records) => records,
            Err(HistoryError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("Replacing unreadable history {}: {}", self.path.display(), e);
                Vec::new()
            }
        };
        let record = PasswordCheckRecord {
            timestamp: current_timestamp(),
            password: password.to_string(),
            strength,
        };
        records.push(record.clone());
        self.write_records(&records)?;

        log::debug!("Recorded {} check, history now has {} entries", strength, records.len());
        Ok(record)
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Password history cleared ({})", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

fn render_history(records: &[PasswordCheckRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, &HISTORY_COLUMNS);
    for record in records {
        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        push_row(&mut out, &[timestamp.as_str(), record.password.as_str(), record.strength.as_str()]);
    }
    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, QUOTE, '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace(QUOTE, "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn parse_history(content: &str) -> Result<Vec<PasswordCheckRecord>> {
    let mut rows = parse_rows(content)?.into_iter();

    let Some((line, header)) = rows.next() else {
        return Ok(Vec::new());
    };
    if header.iter().map(|h| h.trim()).ne(HISTORY_COLUMNS) {
        return Err(HistoryError::FormatError(
            line,
            format!("Expected header {}, found {}", HISTORY_COLUMNS.join(","), header.join(",")),
        ));
    }

    rows.map(|(line, fields)| parse_record(line, fields)).collect()
}

fn parse_record(line: usize, fields: Vec<String>) -> Result<PasswordCheckRecord> {
    let [timestamp, password, strength]: [String; 3] = fields.try_into().map_err(|fields: Vec<String>| {
        HistoryError::FormatError(line, format!("Expected 3 columns, found {}", fields.len()))
    })?;

    let timestamp = NaiveDateTime::parse_from_str(timestamp.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| HistoryError::FormatError(line, format!("Invalid timestamp '{}': {}", timestamp, e)))?;
    let strength = strength
        .parse::<Strength>()
        .map_err(|e| HistoryError::FormatError(line, e.to_string()))?;

    Ok(PasswordCheckRecord { timestamp, password, strength })
}

/// Split CSV text into rows of fields, tagged with the line each row starts on.
/// Blank lines are skipped.
fn parse_rows(content: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                _ => {
                    if c == '\n' {
                        line += 1;
                    }
                    field.push(c);
                }
            }
            continue;
        }

        match c {
            QUOTE if field.is_empty() => in_quotes = true,
            DELIMITER => row.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push((row_start, std::mem::take(&mut row)));
                }
                row.clear();
                line += 1;
                row_start = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(HistoryError::FormatError(row_start, "Unterminated quoted field".to_string()));
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push((row_start, row));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_file_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.csv");
        let store = CsvHistoryStore::open(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "timestamp,password,strength\n");
        assert!(store.load().is_empty());
        assert_eq!(store.location(), Some(path.as_path()));
    }

    #[test]
    fn append_then_load_returns_last_record() {
        let dir = tempdir().unwrap();
        let store = CsvHistoryStore::open(dir.path().join("history.csv")).unwrap();

        store.append("first-pass", Strength::Weak).unwrap();
        let record = store.append("Second1!", Strength::Strong).unwrap();

        let history = store.load();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].password, "first-pass");
        assert_eq!(history.last(), Some(&record));
    }

    #[test]
    fn awkward_passwords_round_trip() {
        let dir = tempdir().unwrap();
        let store = CsvHistoryStore::open(dir.path().join("history.csv")).unwrap();

        let awkward = ["a,b", "say \"hi\"", "two\nlines", "crlf\r\nend", " padded ", "\"", ""];
        for pwd in awkward {
            store.append(pwd, Strength::Moderate).unwrap();
        }

        let stored: Vec<String> = store.load().into_iter().map(|r| r.password).collect();
        assert_eq!(stored, awkward);
    }

    #[test]
    fn clear_removes_file_and_load_recreates_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let store = CsvHistoryStore::open(&path).unwrap();
        store.append("Abcdef1!", Strength::Strong).unwrap();

        store.clear().unwrap();
        assert!(!path.exists());

        assert!(store.load().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "timestamp,password,strength\n");
    }

    #[test]
    fn clear_without_file_is_ok() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let store = CsvHistoryStore::open(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(store.clear().is_ok());
    }

    #[test]
    fn malformed_history_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let store = CsvHistoryStore::open(&path).unwrap();

        fs::write(&path, "when,what\n2025-01-01 00:00:00,x\n").unwrap();
        assert!(store.load().is_empty());

        fs::write(&path, "timestamp,password,strength\nyesterday,x,Weak\n").unwrap();
        assert!(store.load().is_empty());

        fs::write(&path, "timestamp,password,strength\n2025-01-01 00:00:00,x,Meh\n").unwrap();
        assert!(store.load().is_empty());

        fs::write(&path, "timestamp,password,strength\n2025-01-01 00:00:00,\"open\n").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_over_malformed_history_starts_fresh() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let store = CsvHistoryStore::open(&path).unwrap();
        fs::write(&path, "garbage\n").unwrap();

        store.append("Zx9!", Strength::Moderate).unwrap();
        let history = store.load();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].strength, Strength::Moderate);
    }

    #[test]
    fn reads_history_written_by_other_tools() {
        let content = "timestamp,password,strength\r\n\
                       2025-03-01 10:00:00,abc,Weak\r\n\
                       \r\n\
                       2025-03-01 10:05:00,\"x,\"\"y\"\"\",Strong";
        let records = parse_history(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].password, "x,\"y\"");
        assert_eq!(records[1].strength, Strength::Strong);
        assert_eq!(
            records[0].timestamp,
            NaiveDateTime::parse_from_str("2025-03-01 10:00:00", TIMESTAMP_FORMAT).unwrap()
        );
    }

    #[test]
    fn readers_never_see_a_partial_rewrite() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let dir = tempdir().unwrap();
        let store = CsvHistoryStore::open(dir.path().join("history.csv")).unwrap();
        for i in 0..50 {
            store.append(&format!("seed-{i}"), Strength::Weak).unwrap();
        }

        let done = AtomicBool::new(false);
        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 0..100 {
                    store.append(&format!("more-{i}"), Strength::Moderate).unwrap();
                }
                done.store(true, Ordering::SeqCst);
            });

            let mut last = 50;
            while !done.load(Ordering::SeqCst) {
                let len = store.load().len();
                assert!(len >= last, "history shrank from {last} to {len} during append");
                last = len;
            }
        });

        assert_eq!(store.load().len(), 150);
    }

    #[test]
    fn append_after_clear_survives_recreate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let store = CsvHistoryStore::open(&path).unwrap();

        store.clear().unwrap();
        store.append("kept-check", Strength::Weak).unwrap();
        // File exists again, so recreating must leave the record alone
        store.recreate_if_missing();

        let history = store.load();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].password, "kept-check");
    }

    #[test]
    fn format_errors_report_line_numbers() {
        let content = "timestamp,password,strength\n2025-03-01 10:00:00,abc\n";
        match parse_history(content) {
            Err(HistoryError::FormatError(line, _)) => assert_eq!(line, 2),
            other => panic!("expected format error, got {:?}", other),
        }
    }
}
