use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Product, ProductImage, ProductVideo};

/// Position of a product in the Category → Series → Model hierarchy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ProductPlacement {
    pub category_id: Option<Uuid>,
    pub series_id: Option<Uuid>,
    pub model_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ProductImageInput {
    #[validate(length(min = 1, message = "image path is required"))]
    pub image: String,
    #[validate(length(max = 100, message = "alt text must be at most 100 characters"))]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_cover: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateProductImageRequest {
    #[validate(length(min = 1, message = "image path is required"))]
    pub image: Option<String>,
    #[validate(length(max = 100, message = "alt text must be at most 100 characters"))]
    pub alt_text: Option<String>,
    pub is_cover: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ProductVideoInput {
    pub video: Option<String>,
    #[validate(length(max = 100, message = "alt text must be at most 100 characters"))]
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[serde(flatten)]
    pub placement: ProductPlacement,
    #[validate(range(min = 0.0, message = "width must not be negative"))]
    pub width: f64,
    #[validate(range(min = 0.0, message = "height must not be negative"))]
    pub height: f64,
    #[validate(range(min = 0.0, message = "depth must not be negative"))]
    pub depth: f64,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,
    #[serde(default)]
    #[validate(nested)]
    pub images: Vec<ProductImageInput>,
    #[serde(default)]
    #[validate(nested)]
    pub videos: Vec<ProductVideoInput>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    /// Replaces all three hierarchy references when present.
    pub placement: Option<ProductPlacement>,
    #[validate(range(min = 0.0, message = "width must not be negative"))]
    pub width: Option<f64>,
    #[validate(range(min = 0.0, message = "height must not be negative"))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0, message = "depth must not be negative"))]
    pub depth: Option<f64>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub images: Vec<ProductImage>,
    pub videos: Vec<ProductVideo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductImageList {
    pub items: Vec<ProductImage>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductVideoList {
    pub items: Vec<ProductVideo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Köşe Koltuk".into(),
            placement: ProductPlacement::default(),
            width: 240.0,
            height: 85.0,
            depth: 160.0,
            description: "<p>Soft fabric</p>".into(),
            stock: 3,
            images: vec![ProductImageInput {
                image: "product_images/a.jpg".into(),
                alt_text: None,
                is_cover: true,
            }],
            videos: vec![],
        }
    }

    #[test]
    fn valid_product_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn negative_dimensions_and_stock_fail() {
        let mut req = request();
        req.width = -1.0;
        req.stock = -5;
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("width"));
        assert!(fields.contains_key("stock"));
    }

    #[test]
    fn nested_image_is_validated() {
        let mut req = request();
        req.images[0].image = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn placement_is_flattened() {
        let json = serde_json::json!({
            "name": "Sehpa",
            "category_id": "7b8f0c5e-9d1f-4a44-9b84-3c1b0f5b9e11",
            "width": 50.0,
            "height": 45.0,
            "depth": 50.0,
            "stock": 1
        });
        let req: CreateProductRequest = serde_json::from_value(json).unwrap();
        assert!(req.placement.category_id.is_some());
        assert!(req.placement.series_id.is_none());
        assert!(req.images.is_empty());
    }
}
