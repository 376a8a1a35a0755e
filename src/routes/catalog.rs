use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::catalog::{
        CategoryList, CategoryRequest, CategoryTree, CreateModelRequest, CreateSeriesRequest,
        ModelList, SeriesList, UpdateModelRequest, UpdateSeriesRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Category, ModelCategory, SeriesCategory},
    response::ApiResponse,
    routes::params::{ModelQuery, SeriesQuery},
    services::catalog_service,
    state::AppState,
};

pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", put(update_category).delete(delete_category))
        .route("/{id}/tree", get(category_tree))
}

pub fn series_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_series).post(create_series))
        .route("/{id}", put(update_series).delete(delete_series))
}

pub fn models_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_models).post(create_model))
        .route("/{id}", put(update_model).delete(delete_model))
}

// ---- categories ----

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List categories", body = ApiResponse<CategoryList>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let resp = catalog_service::list_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/tree",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category with nested series and models", body = ApiResponse<CategoryTree>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Catalog"
)]
pub async fn category_tree(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CategoryTree>>> {
    let resp = catalog_service::get_category_tree(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Create category", body = ApiResponse<Category>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_category(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let resp = catalog_service::create_category(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Rename category", body = ApiResponse<Category>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let resp = catalog_service::update_category(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Delete category with its series, models and products"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = catalog_service::delete_category(&state, &user, id).await?;
    Ok(Json(resp))
}

// ---- series ----

#[utoipa::path(
    get,
    path = "/api/series",
    params(("category_id" = Option<Uuid>, Query, description = "Filter by category")),
    responses(
        (status = 200, description = "List series", body = ApiResponse<SeriesList>)
    ),
    tag = "Catalog"
)]
pub async fn list_series(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> AppResult<Json<ApiResponse<SeriesList>>> {
    let resp = catalog_service::list_series(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/series",
    request_body = CreateSeriesRequest,
    responses(
        (status = 200, description = "Create series", body = ApiResponse<SeriesCategory>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Name already used in this category"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_series(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateSeriesRequest>,
) -> AppResult<Json<ApiResponse<SeriesCategory>>> {
    let resp = catalog_service::create_series(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/series/{id}",
    params(("id" = Uuid, Path, description = "Series ID")),
    request_body = UpdateSeriesRequest,
    responses(
        (status = 200, description = "Update series", body = ApiResponse<SeriesCategory>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_series(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSeriesRequest>,
) -> AppResult<Json<ApiResponse<SeriesCategory>>> {
    let resp = catalog_service::update_series(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/series/{id}",
    params(("id" = Uuid, Path, description = "Series ID")),
    responses(
        (status = 200, description = "Delete series with its models and products"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_series(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = catalog_service::delete_series(&state, &user, id).await?;
    Ok(Json(resp))
}

// ---- models ----

#[utoipa::path(
    get,
    path = "/api/models",
    params(
        ("category_id" = Option<Uuid>, Query, description = "Filter by category"),
        ("series_id" = Option<Uuid>, Query, description = "Filter by series"),
    ),
    responses(
        (status = 200, description = "List models", body = ApiResponse<ModelList>)
    ),
    tag = "Catalog"
)]
pub async fn list_models(
    State(state): State<AppState>,
    Query(query): Query<ModelQuery>,
) -> AppResult<Json<ApiResponse<ModelList>>> {
    let resp = catalog_service::list_models(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/models",
    request_body = CreateModelRequest,
    responses(
        (status = 200, description = "Create model under a series", body = ApiResponse<ModelCategory>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_model(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateModelRequest>,
) -> AppResult<Json<ApiResponse<ModelCategory>>> {
    let resp = catalog_service::create_model(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/models/{id}",
    params(("id" = Uuid, Path, description = "Model ID")),
    request_body = UpdateModelRequest,
    responses(
        (status = 200, description = "Update model", body = ApiResponse<ModelCategory>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_model(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateModelRequest>,
) -> AppResult<Json<ApiResponse<ModelCategory>>> {
    let resp = catalog_service::update_model(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/models/{id}",
    params(("id" = Uuid, Path, description = "Model ID")),
    responses(
        (status = 200, description = "Delete model with its products"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_model(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = catalog_service::delete_model(&state, &user, id).await?;
    Ok(Json(resp))
}
