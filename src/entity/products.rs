use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_delete = "Cascade"
    )]
    Categories,
    #[sea_orm(
        belongs_to = "super::series_categories::Entity",
        from = "Column::SeriesId",
        to = "super::series_categories::Column::Id",
        on_delete = "Cascade"
    )]
    SeriesCategories,
    #[sea_orm(
        belongs_to = "super::model_categories::Entity",
        from = "Column::ModelId",
        to = "super::model_categories::Column::Id",
        on_delete = "Cascade"
    )]
    ModelCategories,
    #[sea_orm(has_many = "super::product_images::Entity")]
    ProductImages,
    #[sea_orm(has_many = "super::product_videos::Entity")]
    ProductVideos,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::series_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeriesCategories.def()
    }
}

impl Related<super::model_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelCategories.def()
    }
}

impl Related<super::product_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductImages.def()
    }
}

impl Related<super::product_videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductVideos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
