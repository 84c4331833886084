use axum::{
    middleware,
    routing::get,
    Router,
};

use crate::api::state::AppState;

use super::handlers;
use super::middleware::v1_auth_middleware;

pub fn v1_router(state: AppState) -> Router<AppState> {
    let entries = Router::new()
        .route(
            "/",
            get(handlers::entries::list_entries).post(handlers::entries::create_entry),
        )
        .route(
            "/{entryId}",
            get(handlers::entries::get_entry)
                .patch(handlers::entries::update_entry)
                .delete(handlers::entries::delete_entry),
        );

    let analytics = Router::new()
        .route("/weekly-summary", get(handlers::analytics::weekly_summary))
        .route("/correlations", get(handlers::analytics::correlations))
        .route("/trends", get(handlers::analytics::trends));

    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json));

    let protected_routes = Router::new()
        .nest("/entries", entries)
        .nest("/analytics", analytics)
        .route_layer(middleware::from_fn_with_state(state, v1_auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
