//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Pool-level reads take `&PgPool`; methods that participate in a
//! caller-owned unit of work take `&mut sqlx::Transaction`.

pub mod item_repo;

pub use item_repo::ItemRepo;
