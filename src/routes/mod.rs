use axum::Router;

use crate::state::AppState;

pub mod addresses;
pub mod auth;
pub mod branches;
pub mod catalog;
pub mod companies;
pub mod doc;
pub mod health;
pub mod homepage;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/companies", companies::router())
        .nest("/branches", branches::router())
        .nest("/addresses", addresses::router())
        .nest("/categories", catalog::categories_router())
        .nest("/series", catalog::series_router())
        .nest("/models", catalog::models_router())
        .nest("/products", products::router())
        .nest("/homepage", homepage::router())
}
