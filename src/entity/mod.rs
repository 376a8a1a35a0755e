pub mod about_sections;
pub mod addresses;
pub mod audit_logs;
pub mod branch_phone_numbers;
pub mod branches;
pub mod business_partners;
pub mod categories;
pub mod companies;
pub mod faqs;
pub mod hero_sections;
pub mod model_categories;
pub mod our_values;
pub mod product_images;
pub mod product_videos;
pub mod products;
pub mod series_categories;
pub mod statistics;
pub mod users;

pub use about_sections::Entity as AboutSections;
pub use addresses::Entity as Addresses;
pub use audit_logs::Entity as AuditLogs;
pub use branch_phone_numbers::Entity as BranchPhoneNumbers;
pub use branches::Entity as Branches;
pub use business_partners::Entity as BusinessPartners;
pub use categories::Entity as Categories;
pub use companies::Entity as Companies;
pub use faqs::Entity as Faqs;
pub use hero_sections::Entity as HeroSections;
pub use model_categories::Entity as ModelCategories;
pub use our_values::Entity as OurValues;
pub use product_images::Entity as ProductImages;
pub use product_videos::Entity as ProductVideos;
pub use products::Entity as Products;
pub use series_categories::Entity as SeriesCategories;
pub use statistics::Entity as Statistics;
pub use users::Entity as Users;
