//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Product routes plus the readiness probe
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(health::ready_router(state.clone()))
}
