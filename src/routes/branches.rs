use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::company::{
        BranchDetail, BranchList, BranchPhoneList, CreateBranchPhoneRequest,
        UpdateBranchPhoneRequest, UpdateBranchRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Branch, BranchPhoneNumber},
    response::ApiResponse,
    routes::params::BranchQuery,
    services::company_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_branches))
        .route(
            "/{id}",
            get(get_branch).put(update_branch).delete(delete_branch),
        )
        .route("/{branch_id}/phones", get(list_phones).post(create_phone))
        .route(
            "/{branch_id}/phones/{phone_id}",
            put(update_phone).delete(delete_phone),
        )
}

#[utoipa::path(
    get,
    path = "/api/branches",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("company_id" = Option<Uuid>, Query, description = "Filter by company"),
        ("is_main" = Option<bool>, Query, description = "Filter by main flag"),
    ),
    responses(
        (status = 200, description = "List branches", body = ApiResponse<BranchList>)
    ),
    tag = "Branches"
)]
pub async fn list_branches(
    State(state): State<AppState>,
    Query(query): Query<BranchQuery>,
) -> AppResult<Json<ApiResponse<BranchList>>> {
    let resp = company_service::list_branches(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/branches/{id}",
    params(("id" = Uuid, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch with phone numbers", body = ApiResponse<BranchDetail>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Branches"
)]
pub async fn get_branch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<BranchDetail>>> {
    let resp = company_service::get_branch(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/branches/{id}",
    params(("id" = Uuid, Path, description = "Branch ID")),
    request_body = UpdateBranchRequest,
    responses(
        (status = 200, description = "Update branch", body = ApiResponse<Branch>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Branches"
)]
pub async fn update_branch(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBranchRequest>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    let resp = company_service::update_branch(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/branches/{id}",
    params(("id" = Uuid, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Delete branch"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Branches"
)]
pub async fn delete_branch(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = company_service::delete_branch(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/branches/{branch_id}/phones",
    params(("branch_id" = Uuid, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Phone numbers of a branch", body = ApiResponse<BranchPhoneList>)
    ),
    tag = "Branches"
)]
pub async fn list_phones(
    State(state): State<AppState>,
    Path(branch_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<BranchPhoneList>>> {
    let resp = company_service::list_branch_phones(&state, branch_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/branches/{branch_id}/phones",
    params(("branch_id" = Uuid, Path, description = "Branch ID")),
    request_body = CreateBranchPhoneRequest,
    responses(
        (status = 200, description = "Add phone number", body = ApiResponse<BranchPhoneNumber>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Branches"
)]
pub async fn create_phone(
    State(state): State<AppState>,
    user: AuthUser,
    Path(branch_id): Path<Uuid>,
    Json(payload): Json<CreateBranchPhoneRequest>,
) -> AppResult<Json<ApiResponse<BranchPhoneNumber>>> {
    let resp = company_service::create_branch_phone(&state, &user, branch_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/branches/{branch_id}/phones/{phone_id}",
    params(
        ("branch_id" = Uuid, Path, description = "Branch ID"),
        ("phone_id" = Uuid, Path, description = "Phone number ID"),
    ),
    request_body = UpdateBranchPhoneRequest,
    responses(
        (status = 200, description = "Update phone number", body = ApiResponse<BranchPhoneNumber>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Branches"
)]
pub async fn update_phone(
    State(state): State<AppState>,
    user: AuthUser,
    Path((branch_id, phone_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateBranchPhoneRequest>,
) -> AppResult<Json<ApiResponse<BranchPhoneNumber>>> {
    let resp =
        company_service::update_branch_phone(&state, &user, branch_id, phone_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/branches/{branch_id}/phones/{phone_id}",
    params(
        ("branch_id" = Uuid, Path, description = "Branch ID"),
        ("phone_id" = Uuid, Path, description = "Phone number ID"),
    ),
    responses(
        (status = 200, description = "Delete phone number"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Branches"
)]
pub async fn delete_phone(
    State(state): State<AppState>,
    user: AuthUser,
    Path((branch_id, phone_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = company_service::delete_branch_phone(&state, &user, branch_id, phone_id).await?;
    Ok(Json(resp))
}
