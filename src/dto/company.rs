use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Address, Branch, BranchPhoneNumber, BranchSummary, Company, CompanySummary};
use crate::validation::{validate_blank_or_email, validate_blank_or_url, validate_optional_phone, validate_phone};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(custom(function = "validate_optional_phone"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 200, message = "whatsapp must be 1-200 characters"))]
    pub whatsapp: String,
    #[validate(email(message = "must be a valid email"))]
    pub mail_address: String,
    #[validate(length(min = 1, message = "logo path is required"))]
    pub logo: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_optional_phone"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 200, message = "whatsapp must be 1-200 characters"))]
    pub whatsapp: Option<String>,
    #[validate(email(message = "must be a valid email"))]
    pub mail_address: Option<String>,
    #[validate(length(min = 1, message = "logo path is required"))]
    pub logo: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyList {
    pub items: Vec<CompanySummary>,
}

/// Company with its branches inline.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDetail {
    pub company: Company,
    pub branches: Vec<BranchSummary>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBranchRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(custom(function = "validate_blank_or_email"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub instagram_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub facebook_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub twitter_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub google_business_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub is_main: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateBranchRequest {
    /// Moves the branch to another company.
    pub company_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    /// An empty string clears the email.
    #[validate(custom(function = "validate_blank_or_email"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub instagram_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub facebook_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub twitter_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub google_business_url: Option<String>,
    #[validate(custom(function = "validate_blank_or_url"))]
    pub youtube_url: Option<String>,
    pub is_main: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BranchList {
    pub items: Vec<BranchSummary>,
}

/// Branch with its phone numbers inline.
#[derive(Debug, Serialize, ToSchema)]
pub struct BranchDetail {
    pub branch: Branch,
    pub display_name: String,
    pub phones: Vec<BranchPhoneNumber>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBranchPhoneRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone_number: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateBranchPhoneRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone_number: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BranchPhoneList {
    pub items: Vec<BranchPhoneNumber>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, max = 100, message = "province must be 1-100 characters"))]
    pub province: String,
    #[validate(length(min = 1, max = 100, message = "district must be 1-100 characters"))]
    pub district: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, message = "address is required"))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100, message = "province must be 1-100 characters"))]
    pub province: Option<String>,
    #[validate(length(min = 1, max = 100, message = "district must be 1-100 characters"))]
    pub district: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddressList {
    pub items: Vec<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CreateCompanyRequest {
        CreateCompanyRequest {
            name: "Acme Mobilya".into(),
            phone: Some("05551234567".into()),
            whatsapp: "05551234567".into(),
            mail_address: "info@acme.example".into(),
            logo: "logos/acme.png".into(),
        }
    }

    #[test]
    fn valid_company_passes() {
        assert!(company().validate().is_ok());
    }

    #[test]
    fn company_phone_and_email_are_checked() {
        let mut req = company();
        req.phone = Some("5551234567".into());
        req.mail_address = "not-an-email".into();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("mail_address"));
    }

    #[test]
    fn blank_company_phone_is_allowed() {
        let mut req = company();
        req.phone = Some(String::new());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn branch_social_urls_may_be_blank() {
        let req = CreateBranchRequest {
            name: "Merkez".into(),
            email: None,
            address: None,
            photo: None,
            instagram_url: Some(String::new()),
            facebook_url: Some("https://facebook.com/acme".into()),
            twitter_url: Some("nope".into()),
            google_business_url: None,
            youtube_url: None,
            is_main: true,
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("twitter_url"));
        assert!(!fields.contains_key("instagram_url"));
        assert!(!fields.contains_key("facebook_url"));
    }

    #[test]
    fn branch_phone_must_match_pattern() {
        let req = CreateBranchPhoneRequest {
            name: "Ahmet".into(),
            phone_number: "02121234567".into(),
        };
        assert!(req.validate().is_err());
    }
}
