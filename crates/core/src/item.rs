//! Item field constraints and validation.
//!
//! Length bounds match the `items` table columns; the API layer runs
//! these checks before any service call so malformed input never
//! reaches the store.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed length for an item name.
pub const MAX_ITEM_NAME_LENGTH: usize = 100;

/// Maximum allowed length for an item description.
pub const MAX_ITEM_DESCRIPTION_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an item name: must be non-blank and within
/// [`MAX_ITEM_NAME_LENGTH`].
pub fn validate_item_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Item name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_ITEM_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Item name must be between 1 and {MAX_ITEM_NAME_LENGTH} characters, got {}",
            name.len()
        )));
    }
    Ok(())
}

/// Validate an item description against [`MAX_ITEM_DESCRIPTION_LENGTH`].
pub fn validate_item_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_ITEM_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Item description must not exceed {MAX_ITEM_DESCRIPTION_LENGTH} characters, got {}",
            description.len()
        )));
    }
    Ok(())
}
