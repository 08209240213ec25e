//! Route definitions for the item resource.
//!
//! Mounted at `/items` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes.
///
/// ```text
/// GET    /                   -> list_items (?activeOnly)
/// POST   /                   -> create_item
/// GET    /search             -> search_items (?name)
/// GET    /{id}               -> get_item
/// PUT    /{id}               -> update_item
/// DELETE /{id}               -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/search", get(items::search_items))
        .route(
            "/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
