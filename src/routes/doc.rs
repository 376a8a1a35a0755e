use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{auth, catalog, company, homepage as homepage_dto, products},
    models::{
        AboutSection, Address, Branch, BranchPhoneNumber, BranchSummary, BusinessPartner,
        Category, Company, CompanySummary, Faq, HeroSection, ModelCategory, OurValue, Product,
        ProductImage, ProductVideo, SeriesCategory, Statistic,
    },
    response::{ApiResponse, Meta},
    routes::{
        addresses, auth as auth_routes, branches, catalog as catalog_routes, companies, health,
        homepage, params, products as product_routes,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth_routes::login,
        companies::list_companies,
        companies::get_company,
        companies::create_company,
        companies::update_company,
        companies::delete_company,
        companies::create_branch,
        companies::set_main_branch,
        branches::list_branches,
        branches::get_branch,
        branches::update_branch,
        branches::delete_branch,
        branches::list_phones,
        branches::create_phone,
        branches::update_phone,
        branches::delete_phone,
        addresses::list_addresses,
        addresses::get_address,
        addresses::create_address,
        addresses::update_address,
        addresses::delete_address,
        catalog_routes::list_categories,
        catalog_routes::category_tree,
        catalog_routes::create_category,
        catalog_routes::update_category,
        catalog_routes::delete_category,
        catalog_routes::list_series,
        catalog_routes::create_series,
        catalog_routes::update_series,
        catalog_routes::delete_series,
        catalog_routes::list_models,
        catalog_routes::create_model,
        catalog_routes::update_model,
        catalog_routes::delete_model,
        product_routes::list_products,
        product_routes::get_product,
        product_routes::create_product,
        product_routes::update_product,
        product_routes::delete_product,
        product_routes::list_images,
        product_routes::add_image,
        product_routes::update_image,
        product_routes::set_cover_image,
        product_routes::delete_image,
        product_routes::list_videos,
        product_routes::add_video,
        product_routes::delete_video,
        homepage::landing_page,
        homepage::get_hero,
        homepage::put_hero,
        homepage::list_about,
        homepage::create_about,
        homepage::update_about,
        homepage::delete_about,
        homepage::list_statistics,
        homepage::create_statistic,
        homepage::update_statistic,
        homepage::delete_statistic,
        homepage::list_values,
        homepage::create_value,
        homepage::update_value,
        homepage::delete_value,
        homepage::list_faqs,
        homepage::create_faq,
        homepage::update_faq,
        homepage::delete_faq,
        homepage::list_partners,
        homepage::create_partner,
        homepage::update_partner,
        homepage::delete_partner
    ),
    components(
        schemas(
            Company,
            CompanySummary,
            Branch,
            BranchSummary,
            BranchPhoneNumber,
            Address,
            Category,
            SeriesCategory,
            ModelCategory,
            Product,
            ProductImage,
            ProductVideo,
            HeroSection,
            AboutSection,
            Statistic,
            OurValue,
            Faq,
            BusinessPartner,
            auth::LoginRequest,
            auth::LoginResponse,
            company::CreateCompanyRequest,
            company::UpdateCompanyRequest,
            company::CompanyList,
            company::CompanyDetail,
            company::CreateBranchRequest,
            company::UpdateBranchRequest,
            company::BranchList,
            company::BranchDetail,
            company::CreateBranchPhoneRequest,
            company::UpdateBranchPhoneRequest,
            company::BranchPhoneList,
            company::CreateAddressRequest,
            company::UpdateAddressRequest,
            company::AddressList,
            catalog::CategoryRequest,
            catalog::CategoryList,
            catalog::CategoryTree,
            catalog::SeriesNode,
            catalog::CreateSeriesRequest,
            catalog::UpdateSeriesRequest,
            catalog::SeriesList,
            catalog::CreateModelRequest,
            catalog::UpdateModelRequest,
            catalog::ModelList,
            products::ProductPlacement,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            products::ProductImageInput,
            products::UpdateProductImageRequest,
            products::ProductVideoInput,
            products::ProductList,
            products::ProductDetail,
            products::ProductImageList,
            products::ProductVideoList,
            homepage_dto::HeroSectionRequest,
            homepage_dto::AboutSectionRequest,
            homepage_dto::StatisticRequest,
            homepage_dto::OurValueRequest,
            homepage_dto::FaqRequest,
            homepage_dto::BusinessPartnerRequest,
            homepage_dto::LandingPage,
            params::Pagination,
            params::ProductQuery,
            params::BranchQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<products::ProductList>,
            ApiResponse<products::ProductDetail>,
            ApiResponse<company::CompanyList>,
            ApiResponse<homepage_dto::LandingPage>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Companies", description = "Company directory"),
        (name = "Branches", description = "Branches and their phone numbers"),
        (name = "Addresses", description = "Address book"),
        (name = "Catalog", description = "Category, series and model hierarchy"),
        (name = "Products", description = "Products, images and videos"),
        (name = "Homepage", description = "Landing page content"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
