// core/src/history.rs
//
// Conversion history: every non-blank conversion appends one record
// (original input, resulting glyph string, timestamp).
//
// Two backends behind the `ConversionLog` enum:
// - `InMemory`: thread-safe, capacity-bounded ring of records, used in tests
//   and short-lived sessions.
// - `Redb`: persistent ACID storage, records serialized with bincode under a
//   monotonically growing u64 id.
//
// The transcoder never depends on this module; engines call `record` after
// computing a result and must treat failures as non-fatal.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use redb::{ReadableTable, ReadableTableMetadata};

/// One performed conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Original input text.
    pub input: String,
    /// Resulting Unicode Braille glyph string.
    pub braille: String,
    /// Seconds since the Unix epoch at record time.
    pub created_at: u64,
}

impl ConversionRecord {
    /// Build a record stamped with the current time.
    pub fn new<I: Into<String>, B: Into<String>>(input: I, braille: B) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            input: input.into(),
            braille: braille.into(),
            created_at,
        }
    }
}

/// A thread-safe in-memory conversion log.
///
/// Bounded: once `capacity` records are held, appending drops the oldest.
#[derive(Clone)]
pub struct InMemoryLog {
    inner: Arc<RwLock<Vec<ConversionRecord>>>,
    capacity: usize,
}

impl InMemoryLog {
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// `capacity` of 0 is treated as 1; a log that can hold nothing is not a log.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
            capacity: capacity.max(1),
        }
    }

    /// Append a record, evicting the oldest one at capacity.
    pub fn record(&self, rec: ConversionRecord) {
        if let Ok(mut records) = self.inner.write() {
            if records.len() >= self.capacity {
                records.remove(0);
            }
            records.push(rec);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the current records, oldest first.
    pub fn snapshot(&self) -> Vec<ConversionRecord> {
        self.inner.read().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.inner.write() {
            records.clear();
        }
    }
}

impl Default for InMemoryLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Redb-backed persistent conversion log.
///
/// Each record is bincode-serialized and stored under the next u64 id, so
/// iteration order is append order.
#[derive(Clone)]
pub struct RedbLog {
    db: Arc<redb::Database>,
    path: std::path::PathBuf,
}

impl RedbLog {
    const RECORDS: redb::TableDefinition<'static, u64, &'static [u8]> =
        redb::TableDefinition::new("conversion_records");

    /// Create or open a redb database at `path`, creating parent directories
    /// and the records table as needed.
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let db = redb::Database::create(path)
            .with_context(|| format!("open conversion log at {}", path.display()))?;

        // make sure the table exists so reads on a fresh database succeed
        let txn = db.begin_write()?;
        txn.open_table(Self::RECORDS)?;
        txn.commit()?;

        tracing::debug!(path = %path.display(), "opened conversion log");
        Ok(Self {
            db: Arc::new(db),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Append one record in its own write transaction.
    pub fn record(&self, rec: &ConversionRecord) -> anyhow::Result<()> {
        let payload = bincode::serialize(rec).context("serialize conversion record")?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(Self::RECORDS)?;
            let id = table.len()?;
            table.insert(id, payload.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    pub fn len(&self) -> anyhow::Result<u64> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(Self::RECORDS)?;
        Ok(table.len()?)
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Snapshot all records in append order.
    pub fn snapshot(&self) -> anyhow::Result<Vec<ConversionRecord>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(Self::RECORDS)?;
        let mut out = Vec::new();
        for item in table.iter()? {
            let (_, value) = item?;
            let rec: ConversionRecord =
                bincode::deserialize(value.value()).context("deserialize conversion record")?;
            out.push(rec);
        }
        Ok(out)
    }

    /// Delete every record.
    pub fn clear(&self) -> anyhow::Result<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(Self::RECORDS)?;
            table.retain(|_, _| false)?;
        }
        txn.commit()?;
        Ok(())
    }
}

/// Backend switch used by higher-level engines.
#[derive(Clone)]
pub enum ConversionLog {
    InMemory(InMemoryLog),
    Redb(RedbLog),
}

impl ConversionLog {
    /// Default in-memory log.
    pub fn new_in_memory() -> Self {
        ConversionLog::InMemory(InMemoryLog::new())
    }

    /// In-memory log with an explicit capacity bound.
    pub fn with_capacity(capacity: usize) -> Self {
        ConversionLog::InMemory(InMemoryLog::with_capacity(capacity))
    }

    /// Persistent log at the given path.
    pub fn new_redb<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        Ok(ConversionLog::Redb(RedbLog::new(path)?))
    }

    /// Persistent log at the conventional per-user location
    /// (`~/.braille/history.redb`).
    pub fn open_default() -> anyhow::Result<Self> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        let path = std::path::PathBuf::from(home)
            .join(".braille")
            .join("history.redb");
        Self::new_redb(path)
    }

    /// Append one record for a performed conversion.
    pub fn record(&self, input: &str, braille: &str) -> anyhow::Result<()> {
        let rec = ConversionRecord::new(input, braille);
        match self {
            ConversionLog::InMemory(log) => {
                log.record(rec);
                Ok(())
            }
            ConversionLog::Redb(log) => log.record(&rec),
        }
    }

    /// Number of held records. Redb read failures count as empty, matching
    /// the best-effort contract of the history side effect.
    pub fn len(&self) -> usize {
        match self {
            ConversionLog::InMemory(log) => log.len(),
            ConversionLog::Redb(log) => log.len().unwrap_or(0) as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all records, oldest first.
    pub fn snapshot(&self) -> Vec<ConversionRecord> {
        match self {
            ConversionLog::InMemory(log) => log.snapshot(),
            ConversionLog::Redb(log) => log.snapshot().unwrap_or_default(),
        }
    }

    pub fn clear(&self) {
        match self {
            ConversionLog::InMemory(log) => log.clear(),
            ConversionLog::Redb(log) => {
                let _ = log.clear();
            }
        }
    }
}
