use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::audit_write,
    display::{branch_display_name, truncate_with_ellipsis},
    dto::company::{
        AddressList, BranchDetail, BranchList, BranchPhoneList, CompanyDetail, CompanyList,
        CreateAddressRequest, CreateBranchPhoneRequest, CreateBranchRequest, CreateCompanyRequest,
        UpdateAddressRequest, UpdateBranchPhoneRequest, UpdateBranchRequest, UpdateCompanyRequest,
    },
    entity::{
        addresses::{
            ActiveModel as AddressActive, Column as AddressCol, Entity as Addresses,
            Model as AddressModel,
        },
        branch_phone_numbers::{
            ActiveModel as PhoneActive, Column as PhoneCol, Entity as BranchPhoneNumbers,
            Model as PhoneModel,
        },
        branches::{
            ActiveModel as BranchActive, Column as BranchCol, Entity as Branches,
            Model as BranchModel,
        },
        companies::{
            ActiveModel as CompanyActive, Entity as Companies, Model as CompanyModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Address, Branch, BranchPhoneNumber, BranchSummary, Company, CompanySummary},
    response::{ApiResponse, Meta},
    routes::params::{BranchQuery, Pagination},
    services::exclusive_flag::enforce_exclusive,
    state::AppState,
    validation::blank_to_none,
};

const SHORT_ADDRESS_LEN: usize = 60;

// ---- companies ----

pub async fn list_companies(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<CompanyList>> {
    let (page, limit, offset) = pagination.normalize();
    let items = sqlx::query_as::<_, CompanySummary>(
        r#"
        SELECT c.id, c.name, c.phone, c.mail_address, c.created_at, c.updated_at,
               COUNT(b.id) AS branch_count
        FROM companies c
        LEFT JOIN branches b ON b.company_id = c.id
        GROUP BY c.id
        ORDER BY c.name
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    let total = Companies::find().count(&state.orm).await? as i64;

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Companies", CompanyList { items }, Some(meta)))
}

pub async fn get_company(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CompanyDetail>> {
    let company = Companies::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(company_from_entity)
        .ok_or(AppError::NotFound)?;

    let branches = fetch_branch_summaries(state, Some(id), None, i64::MAX, 0).await?;

    let data = CompanyDetail { company, branches };
    Ok(ApiResponse::success("Company", data, None))
}

pub async fn create_company(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCompanyRequest,
) -> AppResult<ApiResponse<Company>> {
    ensure_admin(user)?;
    payload.validate()?;

    let active = CompanyActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        phone: Set(payload.phone.unwrap_or_default()),
        whatsapp: Set(payload.whatsapp),
        mail_address: Set(payload.mail_address),
        logo: Set(payload.logo),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let company = active.insert(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "company_create",
        "companies",
        serde_json::json!({ "company_id": company.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Company created",
        company_from_entity(company),
        Some(Meta::empty()),
    ))
}

pub async fn update_company(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCompanyRequest,
) -> AppResult<ApiResponse<Company>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = Companies::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CompanyActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    if let Some(whatsapp) = payload.whatsapp {
        active.whatsapp = Set(whatsapp);
    }
    if let Some(mail_address) = payload.mail_address {
        active.mail_address = Set(mail_address);
    }
    if let Some(logo) = payload.logo {
        active.logo = Set(logo);
    }
    active.updated_at = Set(Utc::now().into());

    let company = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "company_update",
        "companies",
        serde_json::json!({ "company_id": company.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        company_from_entity(company),
        Some(Meta::empty()),
    ))
}

pub async fn delete_company(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Companies::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "company_delete",
        "companies",
        serde_json::json!({ "company_id": id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- branches ----

#[derive(FromRow)]
struct BranchSummaryRow {
    id: Uuid,
    company_id: Uuid,
    company_name: String,
    name: String,
    email: Option<String>,
    is_main: bool,
    photo: String,
    phones_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BranchSummaryRow> for BranchSummary {
    fn from(row: BranchSummaryRow) -> Self {
        BranchSummary {
            display_name: branch_display_name(&row.name, row.is_main),
            id: row.id,
            company_id: row.company_id,
            company_name: row.company_name,
            name: row.name,
            email: row.email,
            is_main: row.is_main,
            phones_count: row.phones_count,
            photo: row.photo,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

async fn fetch_branch_summaries(
    state: &AppState,
    company_id: Option<Uuid>,
    is_main: Option<bool>,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<BranchSummary>> {
    let rows = sqlx::query_as::<_, BranchSummaryRow>(
        r#"
        SELECT b.id, b.company_id, c.name AS company_name, b.name, b.email, b.is_main,
               b.photo, b.created_at, b.updated_at, COUNT(p.id) AS phones_count
        FROM branches b
        JOIN companies c ON c.id = b.company_id
        LEFT JOIN branch_phone_numbers p ON p.branch_id = b.id
        WHERE ($1::uuid IS NULL OR b.company_id = $1)
          AND ($2::boolean IS NULL OR b.is_main = $2)
        GROUP BY b.id, c.name
        ORDER BY b.name
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(company_id)
    .bind(is_main)
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    Ok(rows.into_iter().map(BranchSummary::from).collect())
}

pub async fn list_branches(
    state: &AppState,
    query: BranchQuery,
) -> AppResult<ApiResponse<BranchList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let items = fetch_branch_summaries(state, query.company_id, query.is_main, limit, offset).await?;

    let mut finder = Branches::find();
    if let Some(company_id) = query.company_id {
        finder = finder.filter(BranchCol::CompanyId.eq(company_id));
    }
    if let Some(is_main) = query.is_main {
        finder = finder.filter(BranchCol::IsMain.eq(is_main));
    }
    let total = finder.count(&state.orm).await? as i64;

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Branches", BranchList { items }, Some(meta)))
}

pub async fn get_branch(state: &AppState, id: Uuid) -> AppResult<ApiResponse<BranchDetail>> {
    let branch = Branches::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(branch_from_entity)
        .ok_or(AppError::NotFound)?;

    let phones = BranchPhoneNumbers::find()
        .filter(PhoneCol::BranchId.eq(id))
        .order_by_asc(PhoneCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(phone_from_entity)
        .collect();

    let data = BranchDetail {
        display_name: branch_display_name(&branch.name, branch.is_main),
        branch,
        phones,
    };
    Ok(ApiResponse::success("Branch", data, None))
}

pub async fn create_branch(
    state: &AppState,
    user: &AuthUser,
    company_id: Uuid,
    payload: CreateBranchRequest,
) -> AppResult<ApiResponse<Branch>> {
    ensure_admin(user)?;
    payload.validate()?;

    let id = Uuid::new_v4();
    let txn = state.orm.begin().await?;

    enforce_exclusive::<Branches, _>(&txn, Some(company_id), id, payload.is_main).await?;

    let active = BranchActive {
        id: Set(id),
        company_id: Set(company_id),
        name: Set(payload.name),
        email: Set(blank_to_none(payload.email)),
        address: Set(payload.address.unwrap_or_default()),
        photo: Set(payload.photo.unwrap_or_default()),
        instagram_url: Set(payload.instagram_url.unwrap_or_default()),
        facebook_url: Set(payload.facebook_url.unwrap_or_default()),
        twitter_url: Set(payload.twitter_url.unwrap_or_default()),
        google_business_url: Set(payload.google_business_url.unwrap_or_default()),
        youtube_url: Set(payload.youtube_url.unwrap_or_default()),
        is_main: Set(payload.is_main),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let branch = active.insert(&txn).await?;

    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "branch_create",
        "branches",
        serde_json::json!({ "branch_id": branch.id, "company_id": company_id, "is_main": branch.is_main }),
    )
    .await;

    Ok(ApiResponse::success(
        "Branch created",
        branch_from_entity(branch),
        Some(Meta::empty()),
    ))
}

pub async fn update_branch(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateBranchRequest,
) -> AppResult<ApiResponse<Branch>> {
    ensure_admin(user)?;
    payload.validate()?;

    // Partition locks are always taken before branch row locks.
    let txn = state.orm.begin().await?;
    let existing = Branches::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let company_id = payload.company_id.unwrap_or(existing.company_id);
    let moved = company_id != existing.company_id;
    // The flag is only rewritten when asked for or when the partition changes.
    let is_main = match payload.is_main {
        Some(is_main) => Some(is_main),
        None if moved => Some(existing.is_main),
        None => None,
    };

    if let Some(is_main) = is_main {
        enforce_exclusive::<Branches, _>(&txn, Some(company_id), id, is_main).await?;
    }

    let mut active: BranchActive = existing.into();
    if moved {
        active.company_id = Set(company_id);
    }
    if let Some(is_main) = is_main {
        active.is_main = Set(is_main);
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if payload.email.is_some() {
        active.email = Set(blank_to_none(payload.email));
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(photo) = payload.photo {
        active.photo = Set(photo);
    }
    if let Some(url) = payload.instagram_url {
        active.instagram_url = Set(url);
    }
    if let Some(url) = payload.facebook_url {
        active.facebook_url = Set(url);
    }
    if let Some(url) = payload.twitter_url {
        active.twitter_url = Set(url);
    }
    if let Some(url) = payload.google_business_url {
        active.google_business_url = Set(url);
    }
    if let Some(url) = payload.youtube_url {
        active.youtube_url = Set(url);
    }
    active.updated_at = Set(Utc::now().into());

    let branch = active.update(&txn).await?;
    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "branch_update",
        "branches",
        serde_json::json!({ "branch_id": branch.id, "is_main": branch.is_main }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        branch_from_entity(branch),
        Some(Meta::empty()),
    ))
}

/// Makes `branch_id` the main branch of `company_id`, demoting the previous one.
pub async fn set_main_branch(
    state: &AppState,
    user: &AuthUser,
    company_id: Uuid,
    branch_id: Uuid,
) -> AppResult<ApiResponse<Branch>> {
    ensure_admin(user)?;

    let txn = state.orm.begin().await?;
    let existing = Branches::find_by_id(branch_id)
        .filter(BranchCol::CompanyId.eq(company_id))
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    enforce_exclusive::<Branches, _>(&txn, Some(company_id), branch_id, true).await?;

    // Written unconditionally: `existing` was read before the partition lock.
    let mut active: BranchActive = existing.into();
    active.is_main = Set(true);
    active.updated_at = Set(Utc::now().into());
    let branch = active.update(&txn).await?;

    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "branch_set_main",
        "branches",
        serde_json::json!({ "branch_id": branch_id, "company_id": company_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Main branch updated",
        branch_from_entity(branch),
        Some(Meta::empty()),
    ))
}

pub async fn delete_branch(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Branches::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "branch_delete",
        "branches",
        serde_json::json!({ "branch_id": id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- branch phone numbers ----

pub async fn list_branch_phones(
    state: &AppState,
    branch_id: Uuid,
) -> AppResult<ApiResponse<BranchPhoneList>> {
    let items = BranchPhoneNumbers::find()
        .filter(PhoneCol::BranchId.eq(branch_id))
        .order_by_asc(PhoneCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(phone_from_entity)
        .collect();

    Ok(ApiResponse::success("Phone numbers", BranchPhoneList { items }, None))
}

pub async fn create_branch_phone(
    state: &AppState,
    user: &AuthUser,
    branch_id: Uuid,
    payload: CreateBranchPhoneRequest,
) -> AppResult<ApiResponse<BranchPhoneNumber>> {
    ensure_admin(user)?;
    payload.validate()?;

    let active = PhoneActive {
        id: Set(Uuid::new_v4()),
        branch_id: Set(branch_id),
        name: Set(payload.name),
        phone_number: Set(payload.phone_number),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let phone = active.insert(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "branch_phone_create",
        "branch_phone_numbers",
        serde_json::json!({ "branch_id": branch_id, "phone_id": phone.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Phone number created",
        phone_from_entity(phone),
        Some(Meta::empty()),
    ))
}

pub async fn update_branch_phone(
    state: &AppState,
    user: &AuthUser,
    branch_id: Uuid,
    phone_id: Uuid,
    payload: UpdateBranchPhoneRequest,
) -> AppResult<ApiResponse<BranchPhoneNumber>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = BranchPhoneNumbers::find_by_id(phone_id)
        .filter(PhoneCol::BranchId.eq(branch_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: PhoneActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(phone_number) = payload.phone_number {
        active.phone_number = Set(phone_number);
    }
    active.updated_at = Set(Utc::now().into());
    let phone = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "branch_phone_update",
        "branch_phone_numbers",
        serde_json::json!({ "branch_id": branch_id, "phone_id": phone.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        phone_from_entity(phone),
        Some(Meta::empty()),
    ))
}

pub async fn delete_branch_phone(
    state: &AppState,
    user: &AuthUser,
    branch_id: Uuid,
    phone_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = BranchPhoneNumbers::delete_many()
        .filter(PhoneCol::Id.eq(phone_id))
        .filter(PhoneCol::BranchId.eq(branch_id))
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "branch_phone_delete",
        "branch_phone_numbers",
        serde_json::json!({ "branch_id": branch_id, "phone_id": phone_id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- addresses ----

pub async fn list_addresses(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<AddressList>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Addresses::find().order_by_asc(AddressCol::Address);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(address_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Addresses", AddressList { items }, Some(meta)))
}

pub async fn get_address(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Address>> {
    let address = Addresses::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(address_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Address", address, None))
}

pub async fn create_address(
    state: &AppState,
    user: &AuthUser,
    payload: CreateAddressRequest,
) -> AppResult<ApiResponse<Address>> {
    ensure_admin(user)?;
    payload.validate()?;

    let active = AddressActive {
        id: Set(Uuid::new_v4()),
        address: Set(payload.address),
        province: Set(payload.province),
        district: Set(payload.district),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let address = active.insert(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "address_create",
        "addresses",
        serde_json::json!({ "address_id": address.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Address created",
        address_from_entity(address),
        Some(Meta::empty()),
    ))
}

pub async fn update_address(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateAddressRequest,
) -> AppResult<ApiResponse<Address>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = Addresses::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: AddressActive = existing.into();
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(province) = payload.province {
        active.province = Set(province);
    }
    if let Some(district) = payload.district {
        active.district = Set(district);
    }
    active.updated_at = Set(Utc::now().into());
    let address = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "address_update",
        "addresses",
        serde_json::json!({ "address_id": address.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        address_from_entity(address),
        Some(Meta::empty()),
    ))
}

pub async fn delete_address(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Addresses::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "address_delete",
        "addresses",
        serde_json::json!({ "address_id": id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

pub(crate) fn company_from_entity(model: CompanyModel) -> Company {
    Company {
        id: model.id,
        name: model.name,
        phone: model.phone,
        whatsapp: model.whatsapp,
        mail_address: model.mail_address,
        logo: model.logo,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn branch_from_entity(model: BranchModel) -> Branch {
    Branch {
        id: model.id,
        company_id: model.company_id,
        name: model.name,
        email: model.email,
        address: model.address,
        photo: model.photo,
        instagram_url: model.instagram_url,
        facebook_url: model.facebook_url,
        twitter_url: model.twitter_url,
        google_business_url: model.google_business_url,
        youtube_url: model.youtube_url,
        is_main: model.is_main,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn phone_from_entity(model: PhoneModel) -> BranchPhoneNumber {
    BranchPhoneNumber {
        id: model.id,
        branch_id: model.branch_id,
        name: model.name,
        phone_number: model.phone_number,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn address_from_entity(model: AddressModel) -> Address {
    Address {
        id: model.id,
        short_address: truncate_with_ellipsis(&model.address, SHORT_ADDRESS_LEN),
        address: model.address,
        province: model.province,
        district: model.district,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
