pub mod auth_service;
pub mod catalog_service;
pub mod company_service;
pub mod exclusive_flag;
pub mod homepage_service;
pub mod product_service;
