//! Item model and request DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
///
/// Also serves as the response projection: every column is part of the
/// public contract. Timestamp fields serialize as `createdAt` /
/// `updatedAt`; the database columns stay snake_case.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item. `active` is not client-settable; new
/// items always start active.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for partially updating an item.
///
/// `None` — whether the field was absent or explicitly `null` — leaves
/// the stored value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}
