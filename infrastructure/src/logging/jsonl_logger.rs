//! JSONL file writer for game transcripts.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying its `type`, a
//! `timestamp` and a per-file `seq` number, so a transcript can be replayed
//! in order even when timestamps collide.

use room_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct Sink {
    writer: BufWriter<File>,
    next_seq: u64,
}

/// Game transcript logger that writes one JSON object per line.
///
/// Thread-safe via a `Mutex`; every line is flushed as it is written.
pub struct JsonlConversationLogger {
    sink: Mutex<Sink>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            sink: Mutex::new(Sink {
                writer: BufWriter::new(file),
                next_seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    /// Timestamped transcript file name inside `dir`
    pub fn timestamped_path(dir: impl AsRef<Path>) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        dir.as_ref().join(format!("room-{}.jsonl", stamp))
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent, seq: u64) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::String(event.event_type.to_string()));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        map.insert("seq".to_string(), Value::from(seq));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };

        let record = Self::record(event, sink.next_seq);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        sink.next_seq += 1;
        if writeln!(sink.writer, "{}", line)
            .and_then(|_| sink.writer.flush())
            .is_err()
        {
            warn!("Failed to write transcript line to {}", self.path.display());
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.writer.flush();
        }
    }
}
