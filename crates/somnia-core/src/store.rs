//! Dream record store over the journal slot.

use crate::error::JournalError;
use crate::model::{DreamDraft, DreamRecord};
use crate::slot::JournalSlot;
use log::{error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Record store owning serialization of dreams to and from the slot.
///
/// Every mutation is a full read-modify-write of the single slot. The
/// store trusts callers to validate drafts before capture.
pub struct DreamStore {
    /// Backing payload slot.
    slot: Arc<dyn JournalSlot>,
}

impl DreamStore {
    /// Create a store over the given slot.
    pub fn new(slot: Arc<dyn JournalSlot>) -> Self {
        Self { slot }
    }

    /// Load the full record collection, newest first.
    ///
    /// A missing, unreadable, or corrupt payload loads as an empty
    /// journal; the failure is logged and never raised.
    pub fn load(&self) -> Vec<DreamRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(err) => {
                warn!("failed to load journal, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Load the full record collection, raising on read or parse failure.
    pub fn try_load(&self) -> Result<Vec<DreamRecord>, JournalError> {
        let Some(payload) = self.slot.read()? else {
            return Ok(Vec::new());
        };
        let records = serde_json::from_str(&payload)?;
        Ok(records)
    }

    /// Overwrite the slot with the given records.
    ///
    /// Persistence is best effort: a failed write is logged and the
    /// in-memory view is left to diverge until the next save.
    pub fn save(&self, records: &[DreamRecord]) {
        if let Err(err) = self.try_save(records) {
            error!("failed to save journal (records={}): {err}", records.len());
        }
    }

    /// Overwrite the slot, raising on serialization or write failure.
    pub fn try_save(&self, records: &[DreamRecord]) -> Result<(), JournalError> {
        let payload = serde_json::to_string(records)?;
        self.slot.write(&payload)
    }

    /// Capture a draft as a new record at the head of the journal.
    pub fn create(&self, draft: DreamDraft) -> DreamRecord {
        let record = DreamRecord {
            id: Uuid::new_v4(),
            description: draft.description,
            timestamp: draft.timestamp,
            emotions: draft.emotions,
            rating: draft.rating,
        };
        let mut records = self.load();
        records.insert(0, record.clone());
        self.save(&records);
        info!(
            "captured dream (id={}, rating={}, emotions={})",
            record.id,
            record.rating,
            record.emotions.len()
        );
        record
    }

    /// Delete the record with the given id; absent ids are a no-op.
    pub fn delete(&self, id: Uuid) {
        let mut records = self.load();
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() < before {
            info!("deleted dream (id={id})");
        } else {
            warn!("dream not found for delete (id={id})");
        }
        self.save(&records);
    }
}
