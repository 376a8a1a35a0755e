use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub role: String,
}

// ---- company directory ----

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub whatsapp: String,
    pub mail_address: String,
    pub logo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Company row as shown in the company list, with its branch count.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct CompanySummary {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub mail_address: String,
    pub branch_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Branch {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub address: String,
    pub photo: String,
    pub instagram_url: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub google_business_url: String,
    pub youtube_url: String,
    pub is_main: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BranchSummary {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_name: String,
    pub name: String,
    pub display_name: String,
    pub email: Option<String>,
    pub is_main: bool,
    pub phones_count: i64,
    pub photo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BranchPhoneNumber {
    pub id: Uuid,
    pub branch_id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: Uuid,
    pub address: String,
    pub short_address: String,
    pub province: String,
    pub district: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---- catalog ----

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeriesCategory {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelCategory {
    pub id: Uuid,
    pub category_id: Uuid,
    pub series_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category_id: Option<Uuid>,
    pub series_id: Option<Uuid>,
    pub model_id: Option<Uuid>,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub description: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    pub image: String,
    pub alt_text: Option<String>,
    pub is_cover: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductVideo {
    pub id: Uuid,
    pub product_id: Uuid,
    pub video: Option<String>,
    pub alt_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---- homepage ----

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HeroSection {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub youtube_url: String,
    pub youtube_embed_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AboutSection {
    pub id: Uuid,
    pub header: String,
    pub sub_header: String,
    pub home_description: String,
    pub detail_description: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Statistic {
    pub id: Uuid,
    pub title: String,
    pub value: i32,
    pub icon: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OurValue {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub short_question: String,
    pub short_answer: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BusinessPartner {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub img_alt: String,
}
