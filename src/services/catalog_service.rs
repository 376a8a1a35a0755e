use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::audit_write,
    dto::catalog::{
        CategoryList, CategoryRequest, CategoryTree, CreateModelRequest, CreateSeriesRequest,
        ModelList, SeriesList, SeriesNode, UpdateModelRequest, UpdateSeriesRequest,
    },
    dto::products::ProductPlacement,
    entity::{
        categories::{
            ActiveModel as CategoryActive, Column as CategoryCol, Entity as Categories,
            Model as CategoryModel,
        },
        model_categories::{
            ActiveModel as ModelActive, Column as ModelCol, Entity as ModelCategories,
            Model as ModelCategoryModel,
        },
        products::{Column as ProductCol, Entity as Products},
        series_categories::{
            ActiveModel as SeriesActive, Column as SeriesCol, Entity as SeriesCategories,
            Model as SeriesModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Category, ModelCategory, SeriesCategory},
    response::{ApiResponse, Meta},
    routes::params::{ModelQuery, SeriesQuery},
    state::AppState,
};

// ---- hierarchy consistency ----

/// Parents of the series and model a product points at, as stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lineage {
    /// Category of the selected series.
    pub series_category: Option<Uuid>,
    /// `(series_id, category_id)` of the selected model.
    pub model_parents: Option<(Uuid, Uuid)>,
}

/// A product's series must sit under its category, and its model under both.
pub fn check_placement(placement: &ProductPlacement, lineage: &Lineage) -> AppResult<()> {
    if let (Some(category_id), Some(parent)) = (placement.category_id, lineage.series_category) {
        if parent != category_id {
            return Err(AppError::field(
                "series_id",
                "series_category_mismatch",
                "series does not belong to the selected category",
            ));
        }
    }

    if let Some((model_series, model_category)) = lineage.model_parents {
        if placement.series_id.is_some_and(|series_id| series_id != model_series) {
            return Err(AppError::field(
                "model_id",
                "model_series_mismatch",
                "model does not belong to the selected series",
            ));
        }
        if placement.category_id.is_some_and(|category_id| category_id != model_category) {
            return Err(AppError::field(
                "model_id",
                "model_category_mismatch",
                "model does not belong to the selected category",
            ));
        }
    }

    Ok(())
}

/// Loads the parents referenced by `placement` and checks they line up.
pub async fn validate_placement<C>(conn: &C, placement: &ProductPlacement) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let mut lineage = Lineage::default();

    if let Some(category_id) = placement.category_id {
        if Categories::find_by_id(category_id).one(conn).await?.is_none() {
            return Err(AppError::field("category_id", "not_found", "category does not exist"));
        }
    }

    if let Some(series_id) = placement.series_id {
        let series = SeriesCategories::find_by_id(series_id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::field("series_id", "not_found", "series does not exist"))?;
        lineage.series_category = Some(series.category_id);
    }

    if let Some(model_id) = placement.model_id {
        let model = ModelCategories::find_by_id(model_id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::field("model_id", "not_found", "model does not exist"))?;
        lineage.model_parents = Some((model.series_id, model.category_id));
    }

    check_placement(placement, &lineage)
}

// ---- categories ----

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items = Categories::find()
        .order_by_asc(CategoryCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();
    Ok(ApiResponse::success("Categories", CategoryList { items }, None))
}

/// Category with its series and their models, for catalog navigation.
pub async fn get_category_tree(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<CategoryTree>> {
    let category = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(category_from_entity)
        .ok_or(AppError::NotFound)?;

    let series = SeriesCategories::find()
        .filter(SeriesCol::CategoryId.eq(id))
        .order_by_asc(SeriesCol::Name)
        .all(&state.orm)
        .await?;

    let mut models = ModelCategories::find()
        .filter(ModelCol::CategoryId.eq(id))
        .order_by_asc(ModelCol::Name)
        .all(&state.orm)
        .await?;

    let series = series
        .into_iter()
        .map(|s| {
            let (own, rest): (Vec<_>, Vec<_>) =
                models.drain(..).partition(|m| m.series_id == s.id);
            models = rest;
            SeriesNode {
                series: series_from_entity(s),
                models: own.into_iter().map(model_from_entity).collect(),
            }
        })
        .collect();

    let data = CategoryTree { category, series };
    Ok(ApiResponse::success("Category", data, None))
}

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    payload.validate()?;

    let active = CategoryActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let category = active.insert(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "category_create",
        "categories",
        serde_json::json!({ "category_id": category.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Category created",
        category_from_entity(category),
        Some(Meta::empty()),
    ))
}

pub async fn update_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: CategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CategoryActive = existing.into();
    active.name = Set(payload.name);
    active.updated_at = Set(Utc::now().into());
    let category = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "category_update",
        "categories",
        serde_json::json!({ "category_id": category.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        category_from_entity(category),
        Some(Meta::empty()),
    ))
}

/// Deletes the category; series, models and products under it go with it.
pub async fn delete_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "category_delete",
        "categories",
        serde_json::json!({ "category_id": id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- series ----

pub async fn list_series(
    state: &AppState,
    query: SeriesQuery,
) -> AppResult<ApiResponse<SeriesList>> {
    let mut finder = SeriesCategories::find();
    if let Some(category_id) = query.category_id {
        finder = finder.filter(SeriesCol::CategoryId.eq(category_id));
    }
    let items = finder
        .order_by_asc(SeriesCol::CategoryId)
        .order_by_asc(SeriesCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(series_from_entity)
        .collect();
    Ok(ApiResponse::success("Series", SeriesList { items }, None))
}

pub async fn create_series(
    state: &AppState,
    user: &AuthUser,
    payload: CreateSeriesRequest,
) -> AppResult<ApiResponse<SeriesCategory>> {
    ensure_admin(user)?;
    payload.validate()?;

    let active = SeriesActive {
        id: Set(Uuid::new_v4()),
        category_id: Set(payload.category_id),
        name: Set(payload.name),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let series = active.insert(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "series_create",
        "series_categories",
        serde_json::json!({ "series_id": series.id, "category_id": series.category_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Series created",
        series_from_entity(series),
        Some(Meta::empty()),
    ))
}

/// Moving a series to another category carries its models and products along.
pub async fn update_series(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateSeriesRequest,
) -> AppResult<ApiResponse<SeriesCategory>> {
    ensure_admin(user)?;
    payload.validate()?;

    let txn = state.orm.begin().await?;
    let existing = SeriesCategories::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let moved_to = payload
        .category_id
        .filter(|category_id| *category_id != existing.category_id);

    let mut active: SeriesActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(category_id) = moved_to {
        active.category_id = Set(category_id);
    }
    active.updated_at = Set(Utc::now().into());
    let series = active.update(&txn).await?;

    if let Some(category_id) = moved_to {
        ModelCategories::update_many()
            .col_expr(ModelCol::CategoryId, Expr::value(category_id))
            .filter(ModelCol::SeriesId.eq(id))
            .exec(&txn)
            .await?;
        // Products may point at one of the series' models without naming the series.
        let model_ids: Vec<Uuid> = ModelCategories::find()
            .select_only()
            .column(ModelCol::Id)
            .filter(ModelCol::SeriesId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;
        Products::update_many()
            .col_expr(ProductCol::CategoryId, Expr::value(category_id))
            .filter(
                Condition::any()
                    .add(ProductCol::SeriesId.eq(id))
                    .add(ProductCol::ModelId.is_in(model_ids)),
            )
            .exec(&txn)
            .await?;
    }

    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "series_update",
        "series_categories",
        serde_json::json!({ "series_id": series.id, "category_id": series.category_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        series_from_entity(series),
        Some(Meta::empty()),
    ))
}

pub async fn delete_series(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = SeriesCategories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "series_delete",
        "series_categories",
        serde_json::json!({ "series_id": id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- models ----

pub async fn list_models(
    state: &AppState,
    query: ModelQuery,
) -> AppResult<ApiResponse<ModelList>> {
    let mut finder = ModelCategories::find();
    if let Some(category_id) = query.category_id {
        finder = finder.filter(ModelCol::CategoryId.eq(category_id));
    }
    if let Some(series_id) = query.series_id {
        finder = finder.filter(ModelCol::SeriesId.eq(series_id));
    }
    let items = finder
        .order_by_asc(ModelCol::SeriesId)
        .order_by_asc(ModelCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(model_from_entity)
        .collect();
    Ok(ApiResponse::success("Models", ModelList { items }, None))
}

async fn series_category<C>(conn: &C, series_id: Uuid) -> AppResult<Uuid>
where
    C: ConnectionTrait,
{
    SeriesCategories::find_by_id(series_id)
        .one(conn)
        .await?
        .map(|series| series.category_id)
        .ok_or_else(|| AppError::field("series_id", "not_found", "series does not exist"))
}

pub async fn create_model(
    state: &AppState,
    user: &AuthUser,
    payload: CreateModelRequest,
) -> AppResult<ApiResponse<ModelCategory>> {
    ensure_admin(user)?;
    payload.validate()?;

    let category_id = series_category(&state.orm, payload.series_id).await?;
    if payload.category_id.is_some_and(|given| given != category_id) {
        return Err(AppError::field(
            "category_id",
            "model_category_mismatch",
            "category must match the category of the series",
        ));
    }

    let active = ModelActive {
        id: Set(Uuid::new_v4()),
        category_id: Set(category_id),
        series_id: Set(payload.series_id),
        name: Set(payload.name),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let model = active.insert(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "model_create",
        "model_categories",
        serde_json::json!({ "model_id": model.id, "series_id": model.series_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Model created",
        model_from_entity(model),
        Some(Meta::empty()),
    ))
}

pub async fn update_model(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateModelRequest,
) -> AppResult<ApiResponse<ModelCategory>> {
    ensure_admin(user)?;
    payload.validate()?;

    let txn = state.orm.begin().await?;
    let existing = ModelCategories::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let moved_to = payload
        .series_id
        .filter(|series_id| *series_id != existing.series_id);

    let mut active: ModelActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(series_id) = moved_to {
        let category_id = series_category(&txn, series_id).await?;
        active.series_id = Set(series_id);
        active.category_id = Set(category_id);

        Products::update_many()
            .col_expr(ProductCol::SeriesId, Expr::value(series_id))
            .col_expr(ProductCol::CategoryId, Expr::value(category_id))
            .filter(ProductCol::ModelId.eq(id))
            .exec(&txn)
            .await?;
    }
    active.updated_at = Set(Utc::now().into());
    let model = active.update(&txn).await?;

    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "model_update",
        "model_categories",
        serde_json::json!({ "model_id": model.id, "series_id": model.series_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        model_from_entity(model),
        Some(Meta::empty()),
    ))
}

pub async fn delete_model(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = ModelCategories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "model_delete",
        "model_categories",
        serde_json::json!({ "model_id": id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn series_from_entity(model: SeriesModel) -> SeriesCategory {
    SeriesCategory {
        id: model.id,
        category_id: model.category_id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn model_from_entity(model: ModelCategoryModel) -> ModelCategory {
    ModelCategory {
        id: model.id,
        category_id: model.category_id,
        series_id: model.series_id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (Uuid, Uuid, Uuid) {
        (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn consistent_placement_passes() {
        let (category, series, model) = ids();
        let placement = ProductPlacement {
            category_id: Some(category),
            series_id: Some(series),
            model_id: Some(model),
        };
        let lineage = Lineage {
            series_category: Some(category),
            model_parents: Some((series, category)),
        };
        assert!(check_placement(&placement, &lineage).is_ok());
    }

    #[test]
    fn empty_placement_passes() {
        assert!(check_placement(&ProductPlacement::default(), &Lineage::default()).is_ok());
    }

    #[test]
    fn series_from_other_category_is_rejected() {
        let (category, series, _) = ids();
        let placement = ProductPlacement {
            category_id: Some(category),
            series_id: Some(series),
            model_id: None,
        };
        let lineage = Lineage {
            series_category: Some(Uuid::new_v4()),
            model_parents: None,
        };
        let err = check_placement(&placement, &lineage).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.field_errors().contains_key("series_id"));
    }

    #[test]
    fn model_from_other_series_is_rejected() {
        let (category, series, model) = ids();
        let placement = ProductPlacement {
            category_id: Some(category),
            series_id: Some(series),
            model_id: Some(model),
        };
        let lineage = Lineage {
            series_category: Some(category),
            model_parents: Some((Uuid::new_v4(), category)),
        };
        let err = check_placement(&placement, &lineage).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.field_errors().contains_key("model_id"));
    }

    #[test]
    fn model_without_series_still_checks_category() {
        let (category, _, model) = ids();
        let placement = ProductPlacement {
            category_id: Some(category),
            series_id: None,
            model_id: Some(model),
        };
        let lineage = Lineage {
            series_category: None,
            model_parents: Some((Uuid::new_v4(), Uuid::new_v4())),
        };
        assert!(check_placement(&placement, &lineage).is_err());
    }
}
