pub mod health;
pub mod preflight;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /preflights/pending                                     pending fetch params
/// /preflights/command/{app_slug}/{cluster_slug}/{seq}     operator command
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/preflights", preflight::router())
}
