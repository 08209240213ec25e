//! Repository for the `items` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item};

/// Column list for items queries.
const COLUMNS: &str = "id, name, description, active, created_at, updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the stored row. The database assigns
    /// the id and both timestamps; new items are always active.
    pub async fn insert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &CreateItem,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, description, active)
             VALUES ($1, $2, TRUE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find an item by its ID. Absence is `None`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an item by its ID within an existing unit of work (the read
    /// half of a read-modify-write).
    pub async fn find_by_id_for_update(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all items, ordered by id ascending.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id ASC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// List all active items, same order as [`ItemRepo::find_all`].
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE active ORDER BY id ASC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Search items by name (case-insensitive substring). An empty term
    /// matches every row.
    pub async fn find_by_name_contains(
        pool: &PgPool,
        term: &str,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let pattern = format!("%{term}%");
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE name ILIKE $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Check whether an item with the given ID exists.
    pub async fn exists_by_id(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }

    /// Check whether an item with the given name exists (case-insensitive).
    pub async fn exists_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE LOWER(name) = LOWER($1))")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Persist the full row state of an item, recomputing `updated_at`.
    /// Returns the stored row.
    pub async fn update(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        item: &Item,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = $2,
                description = $3,
                active = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.active)
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete an item by ID. Existence is the caller's check; deleting a
    /// missing row is a no-op here.
    pub async fn delete(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
