//! Business layer between HTTP handlers and the repositories.

pub mod item_service;

pub use item_service::ItemService;
