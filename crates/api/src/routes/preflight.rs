//! Route definitions for preflight dispatch, mounted at `/preflights`.

use axum::routing::get;
use axum::Router;

use crate::handlers::preflight;
use crate::state::AppState;

/// ```text
/// GET /pending?incluster=<bool>                          -> list_pending
/// GET /command/{app_slug}/{cluster_slug}/{sequence}      -> get_command
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(preflight::list_pending))
        .route(
            "/command/{app_slug}/{cluster_slug}/{sequence}",
            get(preflight::get_command),
        )
}
