//! Key-value slot abstraction backing the journal store.

use crate::error::JournalError;
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the persisted journal payload.
pub const JOURNAL_FILE_NAME: &str = "dream-journal-entries.json";

/// Single-slot payload storage used by the journal store.
///
/// The slot holds one opaque payload; callers never address anything
/// finer-grained. Backends must be substitutable without call-site
/// changes.
pub trait JournalSlot: Send + Sync {
    /// Read the stored payload, or None when nothing has been written.
    fn read(&self) -> Result<Option<String>, JournalError>;

    /// Replace the stored payload.
    fn write(&self, payload: &str) -> Result<(), JournalError>;
}

/// File-backed slot storing the payload in a single file under a root
/// directory.
#[derive(Debug)]
pub struct FileJournalSlot {
    /// Directory holding the payload file.
    root: PathBuf,
    /// Serialize write access to the payload file.
    write_lock: Mutex<()>,
}

impl FileJournalSlot {
    /// Create a slot under the given root, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, JournalError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        info!("initialized journal slot (root={})", root.display());
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Path to the payload file.
    fn payload_path(&self) -> PathBuf {
        self.root.join(JOURNAL_FILE_NAME)
    }

    /// Path to the temporary file used during rewrites.
    fn temp_path(&self) -> PathBuf {
        self.root.join(format!("{JOURNAL_FILE_NAME}.tmp"))
    }
}

impl JournalSlot for FileJournalSlot {
    /// Read the payload file, treating a missing file as an empty slot.
    fn read(&self) -> Result<Option<String>, JournalError> {
        let path = self.payload_path();
        if !path.exists() {
            return Ok(None);
        }
        let payload = std::fs::read_to_string(path)?;
        Ok(Some(payload))
    }

    /// Rewrite the payload file atomically via a temp file and rename.
    fn write(&self, payload: &str) -> Result<(), JournalError> {
        let _guard = self.write_lock.lock();
        let path = self.payload_path();
        let temp_path = self.temp_path();
        {
            let mut file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(&temp_path)?;
            file.write_all(payload.as_bytes())?;
        }
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        std::fs::rename(temp_path, path)?;
        debug!("wrote journal payload (bytes={})", payload.len());
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral journals.
#[derive(Debug, Default)]
pub struct MemoryJournalSlot {
    /// Current payload, None until first written.
    payload: RwLock<Option<String>>,
}

impl MemoryJournalSlot {
    /// Create an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl JournalSlot for MemoryJournalSlot {
    fn read(&self) -> Result<Option<String>, JournalError> {
        Ok(self.payload.read().clone())
    }

    fn write(&self, payload: &str) -> Result<(), JournalError> {
        *self.payload.write() = Some(payload.to_string());
        Ok(())
    }
}
