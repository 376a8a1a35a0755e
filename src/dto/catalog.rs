use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Category, ModelCategory, SeriesCategory};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub items: Vec<Category>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateSeriesRequest {
    pub category_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateSeriesRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeriesList {
    pub items: Vec<SeriesCategory>,
}

/// `category_id` may be omitted; it is taken from the series.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateModelRequest {
    pub series_id: Uuid,
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateModelRequest {
    pub series_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelList {
    pub items: Vec<ModelCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeriesNode {
    pub series: SeriesCategory,
    pub models: Vec<ModelCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryTree {
    pub category: Category,
    pub series: Vec<SeriesNode>,
}
