//! Draft validation applied before dreams reach the store.

use crate::error::JournalError;
use crate::model::DreamDraft;

/// Minimum description length in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 50;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Validate a draft before it is handed to the store.
///
/// Only the description length is checked here; rating range and
/// emotion uniqueness are enforced where drafts are assembled. The
/// store itself never validates.
pub fn validate_draft(draft: &DreamDraft) -> Result<(), JournalError> {
    let chars = draft.description.chars().count();
    if chars < MIN_DESCRIPTION_CHARS {
        return Err(JournalError::DescriptionTooShort { chars });
    }
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(JournalError::DescriptionTooLong { chars });
    }
    Ok(())
}
