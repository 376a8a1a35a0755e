use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::homepage::{
        AboutSectionList, AboutSectionRequest, BusinessPartnerList, BusinessPartnerRequest,
        FaqList, FaqRequest, HeroSectionRequest, LandingPage, OurValueList, OurValueRequest,
        StatisticList, StatisticRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{AboutSection, BusinessPartner, Faq, HeroSection, OurValue, Statistic},
    response::ApiResponse,
    services::homepage_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/hero", get(get_hero).put(put_hero))
        .route("/about", get(list_about).post(create_about))
        .route("/about/{id}", put(update_about).delete(delete_about))
        .route("/statistics", get(list_statistics).post(create_statistic))
        .route(
            "/statistics/{id}",
            put(update_statistic).delete(delete_statistic),
        )
        .route("/values", get(list_values).post(create_value))
        .route("/values/{id}", put(update_value).delete(delete_value))
        .route("/faqs", get(list_faqs).post(create_faq))
        .route("/faqs/{id}", put(update_faq).delete(delete_faq))
        .route("/partners", get(list_partners).post(create_partner))
        .route("/partners/{id}", put(update_partner).delete(delete_partner))
}

#[utoipa::path(
    get,
    path = "/api/homepage",
    responses(
        (status = 200, description = "Landing page content", body = ApiResponse<LandingPage>)
    ),
    tag = "Homepage"
)]
pub async fn landing_page(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<LandingPage>>> {
    let resp = homepage_service::landing_page(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/homepage/hero",
    responses(
        (status = 200, description = "Hero section", body = ApiResponse<HeroSection>),
        (status = 404, description = "No hero section yet"),
    ),
    tag = "Homepage"
)]
pub async fn get_hero(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HeroSection>>> {
    let resp = homepage_service::get_hero(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/homepage/hero",
    request_body = HeroSectionRequest,
    responses(
        (status = 200, description = "Create or replace the hero section", body = ApiResponse<HeroSection>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Concurrent first write"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn put_hero(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<HeroSectionRequest>,
) -> AppResult<Json<ApiResponse<HeroSection>>> {
    let resp = homepage_service::put_hero(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/homepage/about",
    responses((status = 200, description = "About sections", body = ApiResponse<AboutSectionList>)),
    tag = "Homepage"
)]
pub async fn list_about(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AboutSectionList>>> {
    let resp = homepage_service::list_about(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/homepage/about",
    request_body = AboutSectionRequest,
    responses(
        (status = 200, description = "Create about section", body = ApiResponse<AboutSection>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn create_about(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AboutSectionRequest>,
) -> AppResult<Json<ApiResponse<AboutSection>>> {
    let resp = homepage_service::create_about(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/homepage/about/{id}",
    params(("id" = Uuid, Path, description = "About section ID")),
    request_body = AboutSectionRequest,
    responses(
        (status = 200, description = "Update about section", body = ApiResponse<AboutSection>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn update_about(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AboutSectionRequest>,
) -> AppResult<Json<ApiResponse<AboutSection>>> {
    let resp = homepage_service::update_about(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/homepage/about/{id}",
    params(("id" = Uuid, Path, description = "About section ID")),
    responses(
        (status = 200, description = "Delete about section"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn delete_about(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = homepage_service::delete_about(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/homepage/statistics",
    responses((status = 200, description = "Statistics", body = ApiResponse<StatisticList>)),
    tag = "Homepage"
)]
pub async fn list_statistics(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<StatisticList>>> {
    let resp = homepage_service::list_statistics(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/homepage/statistics",
    request_body = StatisticRequest,
    responses(
        (status = 200, description = "Create statistic", body = ApiResponse<Statistic>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn create_statistic(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<StatisticRequest>,
) -> AppResult<Json<ApiResponse<Statistic>>> {
    let resp = homepage_service::create_statistic(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/homepage/statistics/{id}",
    params(("id" = Uuid, Path, description = "Statistic ID")),
    request_body = StatisticRequest,
    responses(
        (status = 200, description = "Update statistic", body = ApiResponse<Statistic>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn update_statistic(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatisticRequest>,
) -> AppResult<Json<ApiResponse<Statistic>>> {
    let resp = homepage_service::update_statistic(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/homepage/statistics/{id}",
    params(("id" = Uuid, Path, description = "Statistic ID")),
    responses(
        (status = 200, description = "Delete statistic"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn delete_statistic(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = homepage_service::delete_statistic(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/homepage/values",
    responses((status = 200, description = "Company values", body = ApiResponse<OurValueList>)),
    tag = "Homepage"
)]
pub async fn list_values(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<OurValueList>>> {
    let resp = homepage_service::list_values(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/homepage/values",
    request_body = OurValueRequest,
    responses(
        (status = 200, description = "Create value", body = ApiResponse<OurValue>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn create_value(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<OurValueRequest>,
) -> AppResult<Json<ApiResponse<OurValue>>> {
    let resp = homepage_service::create_value(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/homepage/values/{id}",
    params(("id" = Uuid, Path, description = "Value ID")),
    request_body = OurValueRequest,
    responses(
        (status = 200, description = "Update value", body = ApiResponse<OurValue>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn update_value(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<OurValueRequest>,
) -> AppResult<Json<ApiResponse<OurValue>>> {
    let resp = homepage_service::update_value(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/homepage/values/{id}",
    params(("id" = Uuid, Path, description = "Value ID")),
    responses(
        (status = 200, description = "Delete value"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn delete_value(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = homepage_service::delete_value(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/homepage/faqs",
    responses((status = 200, description = "FAQ entries", body = ApiResponse<FaqList>)),
    tag = "Homepage"
)]
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<ApiResponse<FaqList>>> {
    let resp = homepage_service::list_faqs(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/homepage/faqs",
    request_body = FaqRequest,
    responses(
        (status = 200, description = "Create FAQ entry", body = ApiResponse<Faq>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn create_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<FaqRequest>,
) -> AppResult<Json<ApiResponse<Faq>>> {
    let resp = homepage_service::create_faq(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/homepage/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    request_body = FaqRequest,
    responses(
        (status = 200, description = "Update FAQ entry", body = ApiResponse<Faq>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn update_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<FaqRequest>,
) -> AppResult<Json<ApiResponse<Faq>>> {
    let resp = homepage_service::update_faq(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/homepage/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    responses(
        (status = 200, description = "Delete FAQ entry"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = homepage_service::delete_faq(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/homepage/partners",
    responses((status = 200, description = "Business partners", body = ApiResponse<BusinessPartnerList>)),
    tag = "Homepage"
)]
pub async fn list_partners(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BusinessPartnerList>>> {
    let resp = homepage_service::list_partners(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/homepage/partners",
    request_body = BusinessPartnerRequest,
    responses(
        (status = 200, description = "Create business partner", body = ApiResponse<BusinessPartner>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn create_partner(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BusinessPartnerRequest>,
) -> AppResult<Json<ApiResponse<BusinessPartner>>> {
    let resp = homepage_service::create_partner(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/homepage/partners/{id}",
    params(("id" = Uuid, Path, description = "Business partner ID")),
    request_body = BusinessPartnerRequest,
    responses(
        (status = 200, description = "Update business partner", body = ApiResponse<BusinessPartner>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn update_partner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BusinessPartnerRequest>,
) -> AppResult<Json<ApiResponse<BusinessPartner>>> {
    let resp = homepage_service::update_partner(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/homepage/partners/{id}",
    params(("id" = Uuid, Path, description = "Business partner ID")),
    responses(
        (status = 200, description = "Delete business partner"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Homepage"
)]
pub async fn delete_partner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = homepage_service::delete_partner(&state, &user, id).await?;
    Ok(Json(resp))
}
