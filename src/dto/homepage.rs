use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{
    AboutSection, BusinessPartner, Company, Faq, HeroSection, OurValue, Statistic,
};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct HeroSectionRequest {
    #[validate(length(min = 1, max = 100, message = "title must be 1-100 characters"))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, message = "image path is required"))]
    pub image: String,
    #[validate(url(message = "must be a valid URL"))]
    pub youtube_url: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AboutSectionRequest {
    #[validate(length(min = 1, max = 100, message = "header must be 1-100 characters"))]
    pub header: String,
    #[validate(length(min = 1, max = 100, message = "sub header must be 1-100 characters"))]
    pub sub_header: String,
    pub home_description: String,
    pub detail_description: String,
    #[validate(length(min = 1, message = "image path is required"))]
    pub image: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StatisticRequest {
    #[validate(length(min = 1, max = 100, message = "title must be 1-100 characters"))]
    pub title: String,
    pub value: i32,
    #[validate(length(min = 1, max = 100, message = "icon must be 1-100 characters"))]
    pub icon: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct OurValueRequest {
    #[validate(length(min = 1, max = 100, message = "title must be 1-100 characters"))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, message = "image path is required"))]
    pub image: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct FaqRequest {
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BusinessPartnerRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "image path is required"))]
    pub image: String,
    #[validate(length(min = 1, max = 100, message = "alt text must be 1-100 characters"))]
    pub img_alt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AboutSectionList {
    pub items: Vec<AboutSection>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatisticList {
    pub items: Vec<Statistic>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OurValueList {
    pub items: Vec<OurValue>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FaqList {
    pub items: Vec<Faq>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessPartnerList {
    pub items: Vec<BusinessPartner>,
}

/// Everything the public landing page renders, in one payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct LandingPage {
    pub hero_section: Option<HeroSection>,
    pub about_section: Option<AboutSection>,
    pub statistic_area: Vec<Statistic>,
    pub our_values: Option<OurValue>,
    pub faq: Vec<Faq>,
    pub company: Option<Company>,
    pub business_partners: Vec<BusinessPartner>,
    pub hero_youtube_embed: String,
}
