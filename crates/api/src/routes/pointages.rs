//! Route definitions for pointages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pointages;
use crate::state::AppState;

/// ```text
/// GET  /pointages        -> list_pointages
/// POST /pointages        -> create_pointage
/// GET  /sync/pointages   -> list_unsynced_pointages
/// GET  /movements/{id}   -> list_movements
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/pointages",
            get(pointages::list_pointages).post(pointages::create_pointage),
        )
        .route("/sync/pointages", get(pointages::list_unsynced_pointages))
        .route("/movements/{id}", get(pointages::list_movements))
}
