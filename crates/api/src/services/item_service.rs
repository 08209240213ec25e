//! Business operations over the item store.
//!
//! Read paths translate a missing row into [`CoreError::NotFound`];
//! each mutation owns exactly one transaction scope, so an early return
//! on any error path rolls the unit of work back and releases the
//! connection.

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::item::{CreateItem, Item, UpdateItem};
use catalog_db::repositories::ItemRepo;
use sqlx::PgPool;

use crate::error::AppResult;

/// Orchestrates item store calls and owns the unit of work for mutations.
pub struct ItemService;

impl ItemService {
    /// List all items.
    pub async fn get_all_items(pool: &PgPool) -> AppResult<Vec<Item>> {
        tracing::debug!("Fetching all items");
        Ok(ItemRepo::find_all(pool).await?)
    }

    /// List items with `active = true`, order consistent with
    /// [`ItemService::get_all_items`].
    pub async fn get_active_items(pool: &PgPool) -> AppResult<Vec<Item>> {
        tracing::debug!("Fetching active items");
        Ok(ItemRepo::find_active(pool).await?)
    }

    /// Get a single item by ID.
    pub async fn get_item_by_id(pool: &PgPool, id: DbId) -> AppResult<Item> {
        tracing::debug!(item_id = id, "Fetching item");
        let item = ItemRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Item", id })?;
        Ok(item)
    }

    /// Search items by name substring. An empty term is not an error; the
    /// store's match policy returns every row.
    pub async fn search_by_name(pool: &PgPool, term: &str) -> AppResult<Vec<Item>> {
        tracing::debug!(term = %term, "Searching items by name");
        Ok(ItemRepo::find_by_name_contains(pool, term).await?)
    }

    /// Create a new item. New items always start active; the store assigns
    /// the id and timestamps. Duplicate names are allowed.
    pub async fn create_item(pool: &PgPool, input: CreateItem) -> AppResult<Item> {
        tracing::info!(name = %input.name, "Creating item");

        let mut tx = pool.begin().await?;
        let item = ItemRepo::insert(&mut tx, &input).await?;
        tx.commit().await?;

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    /// Partially update an item: only `Some` fields overwrite the stored
    /// values, then the full row is persisted with a fresh `updated_at`.
    ///
    /// The read-then-write pair is not guarded by a version column or row
    /// lock; two concurrent updates to the same id can lose the earlier
    /// write.
    pub async fn update_item(pool: &PgPool, id: DbId, input: UpdateItem) -> AppResult<Item> {
        tracing::info!(item_id = id, "Updating item");

        let mut tx = pool.begin().await?;

        let mut item = ItemRepo::find_by_id_for_update(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Item", id })?;

        if let Some(name) = input.name {
            item.name = name;
        }
        if let Some(description) = input.description {
            item.description = Some(description);
        }
        if let Some(active) = input.active {
            item.active = active;
        }

        let item = ItemRepo::update(&mut tx, &item).await?;
        tx.commit().await?;

        tracing::info!(item_id = item.id, "Updated item");
        Ok(item)
    }

    /// Delete an item by ID. Deleting an id that does not exist -- never
    /// issued, or already deleted -- is `NotFound`, not an idempotent
    /// success.
    pub async fn delete_item(pool: &PgPool, id: DbId) -> AppResult<()> {
        tracing::info!(item_id = id, "Deleting item");

        let mut tx = pool.begin().await?;

        if !ItemRepo::exists_by_id(&mut tx, id).await? {
            return Err(CoreError::NotFound { entity: "Item", id }.into());
        }

        ItemRepo::delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(item_id = id, "Deleted item");
        Ok(())
    }
}
