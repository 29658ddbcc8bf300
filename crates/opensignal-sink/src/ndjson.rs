use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::Formatter;
use tracing::{debug, info};

use opensignal_envelope::Event;

use crate::error::{Result, SinkError};
use crate::traits::EventSink;

/// Writes events as newline-delimited JSON.
///
/// On-disk format: UTF-8, one JSON object per event, each followed by `\n`,
/// in input order. Members and array items are separated by `", "` and keys
/// by `": "`; non-ASCII text is written raw. Every `write` truncates the
/// file first.
#[derive(Clone, Debug)]
pub struct NdjsonSink {
    path: PathBuf,
}

impl NdjsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for NdjsonSink {
    fn write(&self, events: &[Event]) -> Result<()> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SinkError::io(parent, e))?;
        }

        let file = File::create(&self.path).map_err(|e| SinkError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        for event in events {
            let mut ser = serde_json::Serializer::with_formatter(&mut writer, LineFormatter);
            event.serialize(&mut ser)?;
            writer
                .write_all(b"\n")
                .map_err(|e| SinkError::io(&self.path, e))?;
        }
        writer.flush().map_err(|e| SinkError::io(&self.path, e))?;

        info!(path = %self.path.display(), count = events.len(), "NDJSON written");
        Ok(())
    }
}

/// Single-line JSON with a space after each `,` and `:`.
struct LineFormatter;

impl Formatter for LineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Read every event from an NDJSON file, in file order.
///
/// Blank lines are skipped. A line that does not decode as an event fails
/// the whole read with its 1-based line number.
pub fn read_ndjson(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SinkError::io(path, e))?;
    let mut events = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| SinkError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(&line).map_err(|source| SinkError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        events.push(event);
    }

    debug!(path = %path.display(), count = events.len(), "NDJSON read");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensignal_envelope::{create_event, Payload};
    use serde_json::json;

    fn batch(n: usize) -> Vec<Event> {
        (0..n)
            .map(|i| {
                let mut data = Payload::new();
                data.insert("seq".into(), json!(i));
                create_event("policy_announcement", "public_bulletin", data)
            })
            .collect()
    }

    fn temp_sink() -> (tempfile::TempDir, NdjsonSink) {
        let dir = tempfile::tempdir().unwrap();
        let sink = NdjsonSink::new(dir.path().join("events.ndjson"));
        (dir, sink)
    }

    #[test]
    fn roundtrip_preserves_ids_and_order() {
        let (_dir, sink) = temp_sink();
        let events = batch(25);
        sink.write(&events).unwrap();

        let read = read_ndjson(sink.path()).unwrap();
        let expected: Vec<_> = events.iter().map(|e| e.id).collect();
        let actual: Vec<_> = read.iter().map(|e| e.id).collect();
        assert_eq!(actual, expected);
        assert_eq!(read, events);
    }

    #[test]
    fn one_terminated_line_per_event() {
        let (_dir, sink) = temp_sink();
        sink.write(&batch(3)).unwrap();

        let text = fs::read_to_string(sink.path()).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 3);
        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["schema_version"], "1.0");
            assert_eq!(value["type"], "policy_announcement");
        }
    }

    #[test]
    fn write_overwrites_existing_file() {
        let (_dir, sink) = temp_sink();
        sink.write(&batch(10)).unwrap();
        sink.write(&batch(2)).unwrap();
        assert_eq!(read_ndjson(sink.path()).unwrap().len(), 2);
    }

    #[test]
    fn empty_batch_produces_empty_file() {
        let (_dir, sink) = temp_sink();
        sink.write(&[]).unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sink = NdjsonSink::new(dir.path().join("out").join("nested").join("e.ndjson"));
        sink.write(&batch(1)).unwrap();
        assert!(sink.path().exists());
    }

    #[test]
    fn risk_block_is_persisted() {
        let (_dir, sink) = temp_sink();
        let mut event = create_event("sanction_update", "public_list", Payload::new());
        event.risk.record("base_sanction_weight", 0.5, "why");
        sink.write(std::slice::from_ref(&event)).unwrap();

        let text = fs::read_to_string(sink.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["risk"]["score"], 0.5);
        assert_eq!(value["risk"]["rules_applied"], json!(["base_sanction_weight"]));
    }

    #[test]
    fn lines_use_spaced_separators() {
        let (_dir, sink) = temp_sink();
        let mut data = Payload::new();
        data.insert("entity".into(), json!("Société Générale"));
        let mut event = create_event("sanction_update", "public_list", data);
        event.risk.record("base_sanction_weight", 0.5, "why");
        sink.write(std::slice::from_ref(&event)).unwrap();

        let text = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"type\": \"sanction_update\", \"source\": \"public_list\""));
        assert!(text.contains("\"score\": 0.5"));
        assert!(text.contains("\"rules_applied\": [\"base_sanction_weight\"]"));
        assert!(text.contains("\"entity\": \"Société Générale\""));
        assert_eq!(read_ndjson(sink.path()).unwrap(), vec![event]);
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file for writing.
        let sink = NdjsonSink::new(dir.path());
        let err = sink.write(&batch(1)).unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }

    #[test]
    fn read_skips_blank_lines() {
        let (_dir, sink) = temp_sink();
        sink.write(&batch(2)).unwrap();
        let mut text = fs::read_to_string(sink.path()).unwrap();
        text.insert(0, '\n');
        text.push('\n');
        fs::write(sink.path(), text).unwrap();

        assert_eq!(read_ndjson(sink.path()).unwrap().len(), 2);
    }

    #[test]
    fn read_reports_malformed_line() {
        let (_dir, sink) = temp_sink();
        sink.write(&batch(1)).unwrap();
        let mut text = fs::read_to_string(sink.path()).unwrap();
        text.push_str("{not json}\n");
        fs::write(sink.path(), text).unwrap();

        let err = read_ndjson(sink.path()).unwrap_err();
        assert!(matches!(err, SinkError::Parse { line: 2, .. }));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_ndjson(dir.path().join("absent.ndjson")).unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }
}
