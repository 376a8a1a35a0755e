use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::audit_write,
    dto::products::{
        CreateProductRequest, ProductDetail, ProductImageInput, ProductImageList, ProductList,
        ProductVideoInput, ProductVideoList, UpdateProductImageRequest, UpdateProductRequest,
    },
    entity::{
        product_images::{
            ActiveModel as ImageActive, Column as ImageCol, Entity as ProductImages,
            Model as ImageModel,
        },
        product_videos::{
            ActiveModel as VideoActive, Column as VideoCol, Entity as ProductVideos,
            Model as VideoModel,
        },
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Product, ProductImage, ProductVideo},
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    services::{catalog_service::validate_placement, exclusive_flag::enforce_exclusive},
    state::AppState,
    validation::blank_to_none,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();

    if let Some(category_id) = query.category_id {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }
    if let Some(series_id) = query.series_id {
        condition = condition.add(Column::SeriesId.eq(series_id));
    }
    if let Some(model_id) = query.model_id {
        condition = condition.add(Column::ModelId.eq(model_id));
    }

    let sort_by = query.sort_by.unwrap_or(ProductSortBy::Name);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Asc);
    let sort_col = match sort_by {
        ProductSortBy::Name => Column::Name,
        ProductSortBy::Stock => Column::Stock,
        ProductSortBy::UpdatedAt => Column::UpdatedAt,
    };

    let mut finder = Products::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .order_by_asc(Column::Id)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    let data = ProductList { items };
    Ok(ApiResponse::success("Products", data, Some(meta)))
}

/// Product with its images (cover first) and videos.
pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<ProductDetail>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity)
        .ok_or(AppError::NotFound)?;

    let images = product_images(&state.orm, id).await?;
    let videos = product_videos(&state.orm, id).await?;

    let data = ProductDetail {
        product,
        images,
        videos,
    };
    Ok(ApiResponse::success("Product", data, None))
}

/// Number of images in a submission flagged as cover.
pub fn count_covers(images: &[ProductImageInput]) -> usize {
    images.iter().filter(|image| image.is_cover).count()
}

/// Creates the product together with its inline images and videos.
pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<ProductDetail>> {
    ensure_admin(user)?;
    payload.validate()?;

    if count_covers(&payload.images) > 1 {
        return Err(AppError::field(
            "images",
            "multiple_covers",
            "only one cover image is allowed",
        ));
    }

    let txn = state.orm.begin().await?;
    validate_placement(&txn, &payload.placement).await?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        category_id: Set(payload.placement.category_id),
        series_id: Set(payload.placement.series_id),
        model_id: Set(payload.placement.model_id),
        width: Set(payload.width),
        height: Set(payload.height),
        depth: Set(payload.depth),
        description: Set(payload.description),
        stock: Set(payload.stock),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let product = active.insert(&txn).await?;

    for image in payload.images {
        insert_image(&txn, product.id, image).await?;
    }
    for video in payload.videos {
        insert_video(&txn, product.id, video).await?;
    }

    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "product_create",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    let data = ProductDetail {
        images: product_images(&state.orm, product.id).await?,
        videos: product_videos(&state.orm, product.id).await?,
        product: product_from_entity(product),
    };
    Ok(ApiResponse::success("Product created", data, Some(Meta::empty())))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    payload.validate()?;

    let txn = state.orm.begin().await?;
    let existing = Products::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(placement) = payload.placement {
        validate_placement(&txn, &placement).await?;
        active.category_id = Set(placement.category_id);
        active.series_id = Set(placement.series_id);
        active.model_id = Set(placement.model_id);
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(width) = payload.width {
        active.width = Set(width);
    }
    if let Some(height) = payload.height {
        active.height = Set(height);
    }
    if let Some(depth) = payload.depth {
        active.depth = Set(depth);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(stock) = payload.stock {
        active.stock = Set(stock);
    }
    active.updated_at = Set(Utc::now().into());

    let product = active.update(&txn).await?;
    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "product_update",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "product_delete",
        "products",
        serde_json::json!({ "product_id": id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- images ----

pub async fn list_images(
    state: &AppState,
    product_id: Uuid,
) -> AppResult<ApiResponse<ProductImageList>> {
    let items = product_images(&state.orm, product_id).await?;
    Ok(ApiResponse::success("Images", ProductImageList { items }, None))
}

pub async fn add_image(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    payload: ProductImageInput,
) -> AppResult<ApiResponse<ProductImage>> {
    ensure_admin(user)?;
    payload.validate()?;

    let txn = state.orm.begin().await?;
    if Products::find_by_id(product_id).one(&txn).await?.is_none() {
        return Err(AppError::NotFound);
    }
    let image = insert_image(&txn, product_id, payload).await?;
    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "product_image_create",
        "product_images",
        serde_json::json!({ "product_id": product_id, "image_id": image.id, "is_cover": image.is_cover }),
    )
    .await;

    Ok(ApiResponse::success(
        "Image added",
        image_from_entity(image),
        Some(Meta::empty()),
    ))
}

pub async fn update_image(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    image_id: Uuid,
    payload: UpdateProductImageRequest,
) -> AppResult<ApiResponse<ProductImage>> {
    ensure_admin(user)?;
    payload.validate()?;

    let txn = state.orm.begin().await?;
    let existing = find_image(&txn, product_id, image_id).await?;
    if let Some(is_cover) = payload.is_cover {
        enforce_exclusive::<ProductImages, _>(&txn, Some(product_id), image_id, is_cover).await?;
    }

    let mut active: ImageActive = existing.into();
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    if payload.alt_text.is_some() {
        active.alt_text = Set(blank_to_none(payload.alt_text));
    }
    if let Some(is_cover) = payload.is_cover {
        active.is_cover = Set(is_cover);
    }
    active.updated_at = Set(Utc::now().into());
    let image = active.update(&txn).await?;

    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "product_image_update",
        "product_images",
        serde_json::json!({ "product_id": product_id, "image_id": image.id, "is_cover": image.is_cover }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        image_from_entity(image),
        Some(Meta::empty()),
    ))
}

/// Makes `image_id` the only cover image of its product.
pub async fn set_cover_image(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    image_id: Uuid,
) -> AppResult<ApiResponse<ProductImage>> {
    ensure_admin(user)?;

    let txn = state.orm.begin().await?;
    let existing = find_image(&txn, product_id, image_id).await?;
    enforce_exclusive::<ProductImages, _>(&txn, Some(product_id), image_id, true).await?;

    // Written unconditionally: `existing` was read before the partition lock.
    let mut active: ImageActive = existing.into();
    active.is_cover = Set(true);
    active.updated_at = Set(Utc::now().into());
    let image = active.update(&txn).await?;

    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "product_image_set_cover",
        "product_images",
        serde_json::json!({ "product_id": product_id, "image_id": image_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Cover image set",
        image_from_entity(image),
        Some(Meta::empty()),
    ))
}

pub async fn delete_image(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    image_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = ProductImages::delete_many()
        .filter(ImageCol::Id.eq(image_id))
        .filter(ImageCol::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "product_image_delete",
        "product_images",
        serde_json::json!({ "product_id": product_id, "image_id": image_id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- videos ----

pub async fn list_videos(
    state: &AppState,
    product_id: Uuid,
) -> AppResult<ApiResponse<ProductVideoList>> {
    let items = product_videos(&state.orm, product_id).await?;
    Ok(ApiResponse::success("Videos", ProductVideoList { items }, None))
}

pub async fn add_video(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    payload: ProductVideoInput,
) -> AppResult<ApiResponse<ProductVideo>> {
    ensure_admin(user)?;
    payload.validate()?;

    if Products::find_by_id(product_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound);
    }
    let video = insert_video(&state.orm, product_id, payload).await?;

    audit_write(
        &state.pool,
        user,
        "product_video_create",
        "product_videos",
        serde_json::json!({ "product_id": product_id, "video_id": video.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Video added",
        video_from_entity(video),
        Some(Meta::empty()),
    ))
}

pub async fn delete_video(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    video_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = ProductVideos::delete_many()
        .filter(VideoCol::Id.eq(video_id))
        .filter(VideoCol::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(
        &state.pool,
        user,
        "product_video_delete",
        "product_videos",
        serde_json::json!({ "product_id": product_id, "video_id": video_id }),
    )
    .await;

    Ok(ApiResponse::deleted())
}

// ---- helpers ----

async fn find_image<C>(conn: &C, product_id: Uuid, image_id: Uuid) -> AppResult<ImageModel>
where
    C: ConnectionTrait,
{
    ProductImages::find_by_id(image_id)
        .filter(ImageCol::ProductId.eq(product_id))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}

async fn insert_image<C>(conn: &C, product_id: Uuid, input: ProductImageInput) -> AppResult<ImageModel>
where
    C: ConnectionTrait,
{
    let id = Uuid::new_v4();
    enforce_exclusive::<ProductImages, _>(conn, Some(product_id), id, input.is_cover).await?;

    let active = ImageActive {
        id: Set(id),
        product_id: Set(product_id),
        image: Set(input.image),
        alt_text: Set(input.alt_text),
        is_cover: Set(input.is_cover),
        created_at: NotSet,
        updated_at: NotSet,
    };
    Ok(active.insert(conn).await?)
}

async fn insert_video<C>(conn: &C, product_id: Uuid, input: ProductVideoInput) -> AppResult<VideoModel>
where
    C: ConnectionTrait,
{
    let active = VideoActive {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        video: Set(input.video),
        alt_text: Set(input.alt_text),
        created_at: NotSet,
        updated_at: NotSet,
    };
    Ok(active.insert(conn).await?)
}

async fn product_images<C>(conn: &C, product_id: Uuid) -> AppResult<Vec<ProductImage>>
where
    C: ConnectionTrait,
{
    Ok(ProductImages::find()
        .filter(ImageCol::ProductId.eq(product_id))
        .order_by_desc(ImageCol::IsCover)
        .order_by_asc(ImageCol::CreatedAt)
        .order_by_asc(ImageCol::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(image_from_entity)
        .collect())
}

async fn product_videos<C>(conn: &C, product_id: Uuid) -> AppResult<Vec<ProductVideo>>
where
    C: ConnectionTrait,
{
    Ok(ProductVideos::find()
        .filter(VideoCol::ProductId.eq(product_id))
        .order_by_desc(VideoCol::CreatedAt)
        .order_by_desc(VideoCol::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(video_from_entity)
        .collect())
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        category_id: model.category_id,
        series_id: model.series_id,
        model_id: model.model_id,
        width: model.width,
        height: model.height,
        depth: model.depth,
        description: model.description,
        stock: model.stock,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn image_from_entity(model: ImageModel) -> ProductImage {
    ProductImage {
        id: model.id,
        product_id: model.product_id,
        image: model.image,
        alt_text: model.alt_text,
        is_cover: model.is_cover,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn video_from_entity(model: VideoModel) -> ProductVideo {
    ProductVideo {
        id: model.id,
        product_id: model.product_id,
        video: model.video,
        alt_text: model.alt_text,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(is_cover: bool) -> ProductImageInput {
        ProductImageInput {
            image: "product_images/x.jpg".into(),
            alt_text: None,
            is_cover,
        }
    }

    #[test]
    fn counts_cover_flags() {
        assert_eq!(count_covers(&[]), 0);
        assert_eq!(count_covers(&[image(false), image(true), image(false)]), 1);
        assert_eq!(count_covers(&[image(true), image(true)]), 2);
    }
}
