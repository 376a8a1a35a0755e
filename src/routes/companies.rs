use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::company::{
        CompanyDetail, CompanyList, CreateBranchRequest, CreateCompanyRequest,
        UpdateCompanyRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Branch, Company},
    response::ApiResponse,
    routes::params::Pagination,
    services::company_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
        .route("/{company_id}/branches", post(create_branch))
        .route("/{company_id}/branches/{branch_id}/main", post(set_main_branch))
}

#[utoipa::path(
    get,
    path = "/api/companies",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List companies with branch counts", body = ApiResponse<CompanyList>)
    ),
    tag = "Companies"
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CompanyList>>> {
    let resp = company_service::list_companies(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company with its branches", body = ApiResponse<CompanyDetail>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Companies"
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CompanyDetail>>> {
    let resp = company_service::get_company(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 200, description = "Create company", body = ApiResponse<Company>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
pub async fn create_company(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCompanyRequest>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let resp = company_service::create_company(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Update company", body = ApiResponse<Company>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
pub async fn update_company(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let resp = company_service::update_company(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Delete company and its branches"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
pub async fn delete_company(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = company_service::delete_company(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/companies/{company_id}/branches",
    params(("company_id" = Uuid, Path, description = "Company ID")),
    request_body = CreateBranchRequest,
    responses(
        (status = 200, description = "Create branch; a main branch demotes the previous one", body = ApiResponse<Branch>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Company not found"),
        (status = 409, description = "Branch name already taken"),
    ),
    security(("bearer_auth" = [])),
    tag = "Branches"
)]
pub async fn create_branch(
    State(state): State<AppState>,
    user: AuthUser,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<CreateBranchRequest>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    let resp = company_service::create_branch(&state, &user, company_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/companies/{company_id}/branches/{branch_id}/main",
    params(
        ("company_id" = Uuid, Path, description = "Company ID"),
        ("branch_id" = Uuid, Path, description = "Branch ID"),
    ),
    responses(
        (status = 200, description = "Branch is now the only main branch of the company", body = ApiResponse<Branch>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Branches"
)]
pub async fn set_main_branch(
    State(state): State<AppState>,
    user: AuthUser,
    Path((company_id, branch_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    let resp = company_service::set_main_branch(&state, &user, company_id, branch_id).await?;
    Ok(Json(resp))
}
